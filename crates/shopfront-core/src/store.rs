//! # Store Service
//!
//! Orchestrates [`Inventory`] and [`Cart`] through the store operations.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │              buy_product (ok)              buy_product (ok)             │
//! │   ┌──────────────┐ ─────────────────► ┌──────────────────┐ ◄──┐        │
//! │   │  Cart Empty  │                    │  Cart Non-Empty  │ ───┘        │
//! │   └──────────────┘ ◄───────────────── └──────────────────┘             │
//! │        ▲    │             checkout                                      │
//! │        └────┘                                                           │
//! │   view_cart / checkout → EmptyCart                                      │
//! │                                                                         │
//! │   view_cart never transitions.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation runs to completion on `&mut self`. A host that shares a
//! store across threads wraps the whole service in one `Mutex`.

use std::fmt;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cart::{Cart, CartItem};
use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Operation Results
// =============================================================================

/// A successful `buy_product`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: i64,
    /// Stock left on the product after this purchase.
    pub remaining_stock: i64,
}

/// Confirmation line shown to the shopper.
impl fmt::Display for Purchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(s) added to cart.", self.quantity, self.name)
    }
}

/// One line of a checkout summary, frozen at checkout time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_cost: Money,
}

impl ReceiptLine {
    /// Freezes a cart entry; `None` if its line cost overflows.
    fn from_item(item: &CartItem) -> Option<Self> {
        Some(ReceiptLine {
            product_id: item.product_id,
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            line_cost: item.line_cost()?,
        })
    }
}

/// The result of a successful checkout.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub id: Uuid,
    /// One line per cart entry, in the cart's iteration order.
    pub lines: Vec<ReceiptLine>,
    /// Distinct products bought.
    pub item_count: usize,
    /// Units bought across all lines.
    pub total_quantity: i64,
    pub total: Money,
    pub completed_at: DateTime<Utc>,
}

// =============================================================================
// Store Service
// =============================================================================

/// The store: one inventory and one cart.
#[derive(Debug, Clone, Default)]
pub struct StoreService {
    inventory: Inventory,
    cart: Cart,
}

impl StoreService {
    /// Creates a store with no products and an empty cart.
    pub fn new() -> Self {
        StoreService::default()
    }

    /// Creates a store around an existing catalog.
    pub fn with_inventory(inventory: Inventory) -> Self {
        StoreService {
            inventory,
            cart: Cart::new(),
        }
    }

    /// Adds a product to the catalog. Always succeeds; ids are not checked
    /// for uniqueness.
    pub fn add_product(&mut self, product: Product) {
        debug!(product_id = product.id(), name = product.name(), "product added");
        self.inventory.add(product);
    }

    /// Products in insertion order, for display.
    pub fn products(&self) -> &[Product] {
        self.inventory.list()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Moves `quantity` units of product `id` from stock into the cart.
    ///
    /// ## Flow
    /// ```text
    /// find first product with id ──► none ──► ProductNotFound
    ///      │
    ///      ▼
    /// quantity > stock ──► yes ──► InsufficientStock
    ///      │
    ///      ▼
    /// new stock / cart amounts overflow ──► yes ──► QuantityOutOfRange
    ///      │
    ///      ▼
    /// stock -= quantity, cart[id] += quantity ──► Purchase
    /// ```
    ///
    /// Quantity is only bounded above. Zero or negative quantities are
    /// applied as given, so a negative purchase raises stock and puts a
    /// negative reservation in the cart. Every rejection leaves stock and
    /// cart as they were.
    pub fn buy_product(&mut self, id: ProductId, quantity: i64) -> CoreResult<Purchase> {
        let Some(product) = self.inventory.find_by_id_mut(id) else {
            warn!(product_id = id, quantity, "purchase rejected: unknown product");
            return Err(CoreError::ProductNotFound(id));
        };

        if !product.can_fulfil(quantity) {
            warn!(
                product_id = id,
                available = product.stock(),
                requested = quantity,
                "purchase rejected: insufficient stock"
            );
            return Err(CoreError::InsufficientStock {
                name: product.name().to_string(),
                available: product.stock(),
                requested: quantity,
            });
        }

        let Some(remaining_stock) = product.stock_after(quantity) else {
            warn!(product_id = id, quantity, "purchase rejected: stock out of range");
            return Err(CoreError::QuantityOutOfRange {
                name: product.name().to_string(),
                requested: quantity,
            });
        };

        if let Err(err) = self.cart.reserve(product, quantity) {
            warn!(product_id = id, quantity, "purchase rejected: cart amounts out of range");
            return Err(err);
        }
        product.set_stock(remaining_stock);

        let purchase = Purchase {
            product_id: id,
            name: product.name().to_string(),
            quantity,
            remaining_stock,
        };
        info!(
            product_id = id,
            quantity,
            remaining_stock = purchase.remaining_stock,
            "product reserved"
        );
        Ok(purchase)
    }

    /// Current cart entries, or `EmptyCart`. Order is unspecified.
    pub fn view_cart(&self) -> CoreResult<&[CartItem]> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        Ok(self.cart.entries())
    }

    /// Totals up the cart and clears it.
    ///
    /// Stock was already taken at buy time and is left as is. An empty cart
    /// yields `EmptyCart` and an overflowing total yields `AmountOverflow`;
    /// neither changes anything.
    pub fn checkout(&mut self) -> CoreResult<Receipt> {
        if self.cart.is_empty() {
            debug!("checkout on empty cart");
            return Err(CoreError::EmptyCart);
        }

        let totals = self.cart.totals().ok_or(CoreError::AmountOverflow)?;
        let lines = self
            .cart
            .entries()
            .iter()
            .map(ReceiptLine::from_item)
            .collect::<Option<Vec<_>>>()
            .ok_or(CoreError::AmountOverflow)?;
        self.cart.clear();

        let receipt = Receipt {
            id: Uuid::new_v4(),
            lines,
            item_count: totals.item_count,
            total_quantity: totals.total_quantity,
            total: totals.subtotal,
            completed_at: Utc::now(),
        };
        info!(
            receipt_id = %receipt.id,
            total = %receipt.total,
            items = receipt.item_count,
            "checkout complete"
        );
        Ok(receipt)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
