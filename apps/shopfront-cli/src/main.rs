//! # Shopfront Console Entry Point
//!
//! ```bash
//! # Demo catalog
//! cargo run -p shopfront-cli
//!
//! # Own catalog, debug logs on stderr
//! cargo run -p shopfront-cli -- --catalog ./catalog.json --verbose
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shopfront_cli::ShopConfig;

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(about = "In-memory console shopping cart")]
#[command(version)]
struct Args {
    /// JSON catalog to load instead of the demo products
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Store name shown in the welcome banner
    #[arg(long)]
    store_name: Option<String>,

    /// Currency symbol used when printing prices
    #[arg(long)]
    currency_symbol: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Applies flags on top of the environment-derived config.
    fn apply(self, mut config: ShopConfig) -> ShopConfig {
        if let Some(path) = self.catalog {
            config.catalog_path = Some(path);
        }
        if let Some(name) = self.store_name {
            config.store_name = name;
        }
        if let Some(symbol) = self.currency_symbol {
            config.currency_symbol = symbol;
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.apply(ShopConfig::from_env());
    info!(?config, "configuration resolved");

    shopfront_cli::run(&config).context("shopfront session failed")?;
    Ok(())
}

/// Installs the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopfront=trace` - Trace for shopfront crates only
/// - Default: WARN, or DEBUG for shopfront crates with `--verbose`
///
/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,shopfront=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
