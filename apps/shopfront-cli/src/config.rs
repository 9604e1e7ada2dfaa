//! # Configuration
//!
//! Settings resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (applied in `main`)
//! 2. Environment variables (`SHOPFRONT_*`)
//! 3. Defaults (this file)
//!
//! Read-only after startup.

use std::path::PathBuf;

use shopfront_core::Money;

pub const ENV_STORE_NAME: &str = "SHOPFRONT_STORE_NAME";
pub const ENV_CURRENCY_SYMBOL: &str = "SHOPFRONT_CURRENCY_SYMBOL";
pub const ENV_CATALOG: &str = "SHOPFRONT_CATALOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    /// Shown in the welcome banner.
    pub store_name: String,

    /// Prefix for every rendered price.
    pub currency_symbol: String,

    /// JSON catalog to load instead of the built-in demo products.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            store_name: "Shopfront Demo Store".to_string(),
            currency_symbol: "$".to_string(),
            catalog_path: None,
        }
    }
}

impl ShopConfig {
    /// Defaults overridden by whatever `SHOPFRONT_*` variables are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable
    /// source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ShopConfig::default();

        if let Some(store_name) = lookup(ENV_STORE_NAME) {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }

        if let Some(path) = lookup(ENV_CATALOG).filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        config
    }

    /// Formats money with the configured symbol, e.g. `$1600.00`.
    pub fn format_money(&self, money: Money) -> String {
        money.format_with_symbol(&self.currency_symbol)
    }
}
