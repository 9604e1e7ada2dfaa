//! # Inventory
//!
//! The full catalog of purchasable products with live stock counts.
//!
//! Products are kept in insertion order for display. Ids are NOT checked for
//! uniqueness: if two products share an id, lookups always land on the one
//! added first and the later one is listed but unreachable by id.

use crate::types::{Product, ProductId};

/// Ordered product catalog.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Appends a product to the end of the catalog.
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Returns the first product with `id`, in insertion order.
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Mutable counterpart of [`find_by_id`](Self::find_by_id), same
    /// first-match rule.
    pub fn find_by_id_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    /// All products in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for Inventory {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Inventory {
            products: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: ProductId, name: &str, stock: i64) -> Product {
        Product::new(id, name, Money::from_cents(100), stock)
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut inventory = Inventory::new();
        inventory.add(product(3, "Headphones", 20));
        inventory.add(product(1, "Laptop", 5));
        inventory.add(product(2, "Phone", 10));

        let names: Vec<&str> = inventory.list().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["Headphones", "Laptop", "Phone"]);
        assert_eq!(inventory.len(), 3);
    }

    #[test]
    fn test_find_by_id() {
        let inventory: Inventory = vec![product(1, "Laptop", 5), product(2, "Phone", 10)]
            .into_iter()
            .collect();

        assert_eq!(inventory.find_by_id(2).map(|p| p.name()), Some("Phone"));
        assert!(inventory.find_by_id(99).is_none());
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let mut inventory = Inventory::new();
        inventory.add(product(7, "First", 1));
        inventory.add(product(7, "Second", 50));

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.find_by_id(7).map(|p| p.name()), Some("First"));

        inventory.find_by_id_mut(7).unwrap().set_stock(0);
        assert_eq!(inventory.list()[0].stock(), 0);
        assert_eq!(inventory.list()[1].stock(), 50);
    }

    #[test]
    fn test_new_is_empty() {
        assert!(Inventory::new().is_empty());
    }
}
