//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  └── CoreError        - Expected business outcomes                     │
//! │                                                                         │
//! │  shopfront-cli errors (app crate)                                      │
//! │  └── CliError         - I/O, catalog file, configuration               │
//! │                                                                         │
//! │  Flow: CoreError ──► rendered as a status line, never propagated       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are failures of the program. A missing product or an empty
//! cart is something the shopper did, and the caller reports it and moves on.

use thiserror::Error;

use crate::types::ProductId;

/// Why a store operation did not take effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No product in the inventory carries this id.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Requested more than the product currently has in stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Buy (id: 1, qty: 7)
    ///      │
    ///      ▼
    /// Check stock: available=5
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Laptop", available: 5, requested: 7 }
    ///      │
    ///      ▼
    /// Console shows: "Insufficient stock for Laptop: available 5, requested 7"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// The quantity passes the stock check but the resulting stock, cart
    /// quantity or cart amount would not fit in an `i64`.
    #[error("Quantity {requested} for {name} is out of range")]
    QuantityOutOfRange { name: String, requested: i64 },

    /// The cart has no entries (view or checkout on an empty cart).
    #[error("Cart is empty")]
    EmptyCart,

    /// Cart amounts no longer fit in an `i64`. Purchases are rejected before
    /// that can happen, so checkout only reports it and keeps the cart.
    #[error("Cart total is out of range")]
    AmountOverflow,
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
