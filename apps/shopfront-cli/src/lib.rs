//! # Shopfront Console
//!
//! Console front-end for the Shopfront store.
//!
//! ## Module Organization
//! ```text
//! shopfront_cli/
//! ├── lib.rs          ◄─── You are here (store setup & run)
//! ├── config.rs       ◄─── ShopConfig: defaults, env, money formatting
//! ├── catalog.rs      ◄─── Demo products and JSON catalog loading
//! ├── menu.rs         ◄─── Menu entries and number parsing
//! ├── session.rs      ◄─── The interactive loop
//! └── error.rs        ◄─── CliError
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod menu;
pub mod session;

use std::io;

use shopfront_core::StoreService;
use tracing::info;

pub use config::ShopConfig;
pub use error::{CliError, CliResult};
pub use session::Session;

/// Builds the store from the configured catalog, or the demo products when
/// none is set.
pub fn build_store(config: &ShopConfig) -> CliResult<StoreService> {
    let inventory = match &config.catalog_path {
        Some(path) => catalog::load_catalog(path)?,
        None => catalog::demo_catalog(),
    };
    info!(products = inventory.len(), "store ready");
    Ok(StoreService::with_inventory(inventory))
}

/// Runs one console session on stdin/stdout.
pub fn run(config: &ShopConfig) -> CliResult<()> {
    let mut store = build_store(config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&mut store, config, stdin.lock(), stdout.lock());
    session.run()?;
    Ok(())
}
