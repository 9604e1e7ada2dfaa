//! # Domain Types
//!
//! The one entity the store sells.
//!
//! ```text
//! ┌─────────────────────┐
//! │      Product        │
//! │  ─────────────────  │
//! │  id          (fix)  │
//! │  name        (fix)  │
//! │  unit_price  (fix)  │
//! │  stock       (mut)  │
//! └─────────────────────┘
//! ```
//!
//! Identity, name and price never change after construction, so they are
//! only reachable through getters. Stock moves only through the store,
//! which checks [`Product::stock_after`] before committing anything.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Business identifier of a product, as typed by the shopper.
pub type ProductId = i64;

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,

    name: String,

    /// Price of one unit; serialized as plain cents.
    #[serde(rename = "unit_price_cents")]
    unit_price: Money,

    /// Units left on the shelf.
    stock: i64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, unit_price: Money, stock: i64) -> Self {
        Product {
            id,
            name: name.into(),
            unit_price,
            stock,
        }
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// Checks whether `quantity` units can be taken from stock.
    ///
    /// Only the upper bound is checked. A zero or negative quantity always
    /// passes; the store applies it as-is.
    #[inline]
    pub fn can_fulfil(&self, quantity: i64) -> bool {
        quantity <= self.stock
    }

    /// Stock left after taking `quantity` units, or `None` when the
    /// subtraction overflows (a hugely negative quantity).
    #[inline]
    pub fn stock_after(&self, quantity: i64) -> Option<i64> {
        self.stock.checked_sub(quantity)
    }

    pub(crate) fn set_stock(&mut self, stock: i64) {
        self.stock = stock;
    }
}
