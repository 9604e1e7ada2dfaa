//! End-to-end scenarios against the public store API.

use std::collections::HashSet;

use shopfront_core::{CoreError, Money, Product, ProductId, StoreService};

fn demo_store() -> StoreService {
    let mut store = StoreService::new();
    store.add_product(Product::new(1, "Laptop", Money::from_major_minor(800, 0), 5));
    store.add_product(Product::new(2, "Phone", Money::from_major_minor(500, 0), 10));
    store.add_product(Product::new(3, "Headphones", Money::from_major_minor(50, 0), 20));
    store
}

fn stock_of(store: &StoreService, id: ProductId) -> i64 {
    store.inventory().find_by_id(id).map(Product::stock).unwrap()
}

#[test]
fn laptop_purchase_and_checkout() {
    let mut store = StoreService::new();
    store.add_product(Product::new(1, "Laptop", Money::from_major_minor(800, 0), 5));

    store.buy_product(1, 2).unwrap();
    assert_eq!(stock_of(&store, 1), 3);
    assert_eq!(store.cart().quantity_of(1), Some(2));

    let receipt = store.checkout().unwrap();
    assert_eq!(receipt.total.to_string(), "$1600.00");
    assert!(store.cart().is_empty());
    assert_eq!(stock_of(&store, 1), 3);
}

#[test]
fn unknown_product_leaves_state_untouched() {
    let mut store = StoreService::new();
    store.add_product(Product::new(1, "Laptop", Money::from_major_minor(800, 0), 5));

    assert_eq!(
        store.buy_product(99, 1).unwrap_err(),
        CoreError::ProductNotFound(99)
    );
    assert_eq!(stock_of(&store, 1), 5);
    assert!(store.cart().is_empty());
}

#[test]
fn every_quantity_up_to_stock_is_accepted() {
    for q in 1..=20 {
        let mut store = demo_store();
        let purchase = store.buy_product(3, q).unwrap();
        assert_eq!(purchase.remaining_stock, 20 - q);
        assert_eq!(stock_of(&store, 3), 20 - q);
        assert_eq!(store.cart().quantity_of(3), Some(q));
    }

    let mut store = demo_store();
    assert!(matches!(
        store.buy_product(3, 21),
        Err(CoreError::InsufficientStock { available: 20, requested: 21, .. })
    ));
}

#[test]
fn mixed_cart_total_is_exact_sum() {
    let mut store = demo_store();
    store.buy_product(1, 1).unwrap();
    store.buy_product(2, 2).unwrap();
    store.buy_product(3, 3).unwrap();
    store.buy_product(2, 1).unwrap();

    let entries: HashSet<(String, i64)> = store
        .view_cart()
        .unwrap()
        .iter()
        .map(|item| (item.name.clone(), item.quantity))
        .collect();
    let expected: HashSet<(String, i64)> = [
        ("Laptop".to_string(), 1),
        ("Phone".to_string(), 3),
        ("Headphones".to_string(), 3),
    ]
    .into_iter()
    .collect();
    assert_eq!(entries, expected);

    let receipt = store.checkout().unwrap();
    // 800 + 3 * 500 + 3 * 50
    assert_eq!(receipt.total, Money::from_major_minor(2450, 0));
    assert_eq!(receipt.lines.len(), 3);

    assert_eq!(store.view_cart().unwrap_err(), CoreError::EmptyCart);
    assert_eq!(store.checkout().unwrap_err(), CoreError::EmptyCart);
    assert_eq!(stock_of(&store, 2), 7);
}

#[test]
fn cart_refills_after_checkout() {
    let mut store = demo_store();
    store.buy_product(2, 4).unwrap();
    store.checkout().unwrap();

    store.buy_product(2, 1).unwrap();
    assert_eq!(store.cart().quantity_of(2), Some(1));
    assert_eq!(stock_of(&store, 2), 5);
}

#[test]
fn out_of_range_quantities_are_rejected_without_side_effects() {
    let mut store = demo_store();
    store.buy_product(2, 1).unwrap();

    for quantity in [i64::MIN, -200_000_000_000_000, i64::MIN / 2] {
        assert!(matches!(
            store.buy_product(1, quantity),
            Err(CoreError::QuantityOutOfRange { .. })
        ));
        assert_eq!(stock_of(&store, 1), 5);
        assert_eq!(store.cart().quantity_of(1), None);
    }

    let receipt = store.checkout().unwrap();
    assert_eq!(receipt.total.to_string(), "$500.00");
    assert_eq!(receipt.item_count, 1);
}
