//! # shopfront-core: Inventory & Cart State Machine
//!
//! This crate holds all of Shopfront's business logic with zero I/O.
//! The console app in `apps/shopfront-cli` reads input, calls into
//! [`StoreService`], and renders whatever comes back.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 shopfront-cli (console menu)                    │   │
//! │  │   View Products ──► Buy ──► View Cart ──► Checkout ──► Exit     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopfront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ inventory │  │   cart    │  │   store   │  │   │
//! │  │   │  Product  │  │ Inventory │  │   Cart    │  │  Service  │  │   │
//! │  │   │   Money   │  │           │  │ CartItem  │  │  Receipt  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • SINGLE-THREADED                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and its identifier
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`inventory`] - Ordered product catalog with live stock
//! - [`cart`] - Reserved quantities between checkouts
//! - [`store`] - The four store operations
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{Money, Product, StoreService};
//!
//! let mut store = StoreService::new();
//! store.add_product(Product::new(1, "Laptop", Money::from_major_minor(800, 0), 5));
//!
//! let purchase = store.buy_product(1, 2).unwrap();
//! assert_eq!(purchase.to_string(), "2 Laptop(s) added to cart.");
//!
//! let receipt = store.checkout().unwrap();
//! assert_eq!(receipt.total.to_string(), "$1600.00");
//! assert!(store.cart().is_empty());
//! ```

pub mod cart;
pub mod error;
pub mod inventory;
pub mod money;
pub mod store;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals};
pub use error::{CoreError, CoreResult};
pub use inventory::Inventory;
pub use money::Money;
pub use store::{Purchase, Receipt, ReceiptLine, StoreService};
pub use types::{Product, ProductId};
