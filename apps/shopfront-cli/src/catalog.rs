//! # Catalog Seeding
//!
//! Where the store's products come from at startup: the built-in demo set,
//! or a JSON file.
//!
//! ## File Format
//! ```json
//! [
//!   { "id": 1, "name": "Laptop", "unit_price_cents": 80000, "stock": 5 },
//!   { "id": 2, "name": "Phone",  "unit_price_cents": 50000, "stock": 10 }
//! ]
//! ```
//! Entries are added in file order. Duplicate ids are accepted; the first
//! one wins on lookup.

use std::fs;
use std::path::Path;

use shopfront_core::{Inventory, Money, Product};
use tracing::info;

use crate::error::{CliError, CliResult};

/// The three products the demo store opens with.
pub fn demo_catalog() -> Inventory {
    [
        Product::new(1, "Laptop", Money::from_major_minor(800, 0), 5),
        Product::new(2, "Phone", Money::from_major_minor(500, 0), 10),
        Product::new(3, "Headphones", Money::from_major_minor(50, 0), 20),
    ]
    .into_iter()
    .collect()
}

/// Parses a JSON catalog document.
pub fn parse_catalog(json: &str) -> Result<Inventory, serde_json::Error> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    Ok(products.into_iter().collect())
}

/// Reads and parses a catalog file.
pub fn load_catalog(path: &Path) -> CliResult<Inventory> {
    let json = fs::read_to_string(path).map_err(|source| CliError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    let inventory = parse_catalog(&json).map_err(|source| CliError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), products = inventory.len(), "catalog loaded");
    Ok(inventory)
}
