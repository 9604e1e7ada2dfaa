//! # Cart
//!
//! Transient reservation of quantities per product, accumulated between
//! checkouts.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Store Operation          Cart Call               Cart State Change     │
//! │  ───────────────          ─────────               ─────────────────     │
//! │                                                                         │
//! │  buy_product() ──────────► reserve() ───────────► qty += n (or insert) │
//! │                                                                         │
//! │  view_cart() ────────────► entries() ───────────► (read only)          │
//! │                                                                         │
//! │  checkout() ─────────────► totals(), clear() ───► everything removed   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries are keyed by product id. The order of [`Cart::entries`] is not
//! part of the contract.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ProductId};

/// One reserved product in the cart.
///
/// Name and unit price are copied from the product when the entry is first
/// created. Both are immutable on [`Product`], so the copy never drifts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
}

impl CartItem {
    /// Creates a cart entry for `product` holding `quantity` units.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id(),
            name: product.name().to_string(),
            unit_price: product.unit_price(),
            quantity,
        }
    }

    /// Unit price × quantity, `None` on overflow.
    pub fn line_cost(&self) -> Option<Money> {
        self.unit_price.checked_mul(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - At most one entry per product id (reserving again increases quantity)
/// - Entries only ever leave through [`Cart::clear`]
/// - Every quantity, line cost and the cart totals fit in an `i64`
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds `quantity` to the entry for `product`, creating it at zero first
    /// if the product is not in the cart yet.
    ///
    /// Fails with `QuantityOutOfRange`, leaving the cart untouched, when the
    /// new quantity or any cart total would overflow.
    pub fn reserve(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        let out_of_range = || CoreError::QuantityOutOfRange {
            name: product.name().to_string(),
            requested: quantity,
        };

        let index = self.items.iter().position(|i| i.product_id == product.id());
        let new_quantity = match index {
            Some(i) => self.items[i]
                .quantity
                .checked_add(quantity)
                .ok_or_else(out_of_range)?,
            None => quantity,
        };

        let lines = self.items.iter().enumerate().map(|(i, item)| {
            let qty = if Some(i) == index { new_quantity } else { item.quantity };
            (item.unit_price, qty)
        });
        let added = index.is_none().then(|| (product.unit_price(), quantity));
        let item_count = self.items.len() + usize::from(added.is_some());
        checked_totals(lines.chain(added), item_count).ok_or_else(out_of_range)?;

        match index {
            Some(i) => self.items[i].quantity = new_quantity,
            None => self.items.push(CartItem::from_product(product, quantity)),
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current entries. Callers must not rely on their order.
    pub fn entries(&self) -> &[CartItem] {
        &self.items
    }

    /// Reserved quantity for a product, if it has an entry.
    pub fn quantity_of(&self, product_id: ProductId) -> Option<i64> {
        self.items
            .iter()
            .find(|i| i.product_id == product_id)
            .map(|i| i.quantity)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Item count, total quantity and Σ(unit price × quantity).
    ///
    /// `None` only if the totals overflow, which [`Cart::reserve`] rules out.
    pub fn totals(&self) -> Option<CartTotals> {
        checked_totals(
            self.items.iter().map(|i| (i.unit_price, i.quantity)),
            self.items.len(),
        )
    }
}

/// Cart summary figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Distinct products in the cart.
    pub item_count: usize,
    /// Sum of reserved quantities.
    pub total_quantity: i64,
    pub subtotal: Money,
}

fn checked_totals<I>(lines: I, item_count: usize) -> Option<CartTotals>
where
    I: Iterator<Item = (Money, i64)>,
{
    let mut total_quantity: i64 = 0;
    let mut subtotal = Money::zero();
    for (unit_price, quantity) in lines {
        total_quantity = total_quantity.checked_add(quantity)?;
        subtotal = subtotal.checked_add(unit_price.checked_mul(quantity)?)?;
    }
    Some(CartTotals {
        item_count,
        total_quantity,
        subtotal,
    })
}
