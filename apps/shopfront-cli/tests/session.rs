//! Drives the console session with scripted input.

use std::io::{Cursor, Write};

use shopfront_cli::{build_store, catalog, ShopConfig, Session};
use shopfront_core::StoreService;

fn run_script(store: &mut StoreService, script: &str) -> String {
    let config = ShopConfig::default();
    let mut output = Vec::new();
    Session::new(store, &config, Cursor::new(script.to_string()), &mut output)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

fn demo_store() -> StoreService {
    StoreService::with_inventory(catalog::demo_catalog())
}

#[test]
fn lists_products_with_prices_and_stock() {
    let mut store = demo_store();
    let out = run_script(&mut store, "1\n5\n");

    assert!(out.contains("Welcome to Shopfront Demo Store!"));
    assert!(out.contains("Available Products:"));
    assert!(out.contains("1. Laptop - $800.00 (Stock: 5)"));
    assert!(out.contains("2. Phone - $500.00 (Stock: 10)"));
    assert!(out.contains("3. Headphones - $50.00 (Stock: 20)"));
    assert!(out.trim_end().ends_with("Exiting... Thank you for shopping!"));
}

#[test]
fn buy_view_and_checkout() {
    let mut store = demo_store();
    let out = run_script(&mut store, "2\n1\n2\n3\n4\n4\n5\n");

    assert!(out.contains("2 Laptop(s) added to cart."));
    assert!(out.contains("Items in Cart:\nLaptop - Quantity: 2"));
    assert!(out.contains("Checkout Summary:\nLaptop - 2 x $800.00 = $1600.00"));
    assert!(out.contains("Items: 1 (2 units)\nTotal: $1600.00"));
    assert!(out.contains("Receipt: "));
    assert!(out.contains("Purchase successful!"));
    assert!(out.contains("Cart is empty. Add products before checkout."));

    assert!(store.cart().is_empty());
    assert_eq!(store.inventory().find_by_id(1).map(|p| p.stock()), Some(3));
}

#[test]
fn rejected_purchases_are_reported() {
    let mut store = demo_store();
    let out = run_script(&mut store, "2\n99\n1\n2\n1\n6\n3\n");

    assert!(out.contains(
        "Product unavailable or insufficient stock. (Product not found: 99)"
    ));
    assert!(out.contains(
        "Product unavailable or insufficient stock. (Insufficient stock for Laptop: available 5, requested 6)"
    ));
    assert!(out.contains("Cart is empty."));
    assert_eq!(store.inventory().find_by_id(1).map(|p| p.stock()), Some(5));
}

#[test]
fn out_of_range_quantity_is_reported_and_session_continues() {
    let mut store = demo_store();
    let out = run_script(
        &mut store,
        "2\n1\n-200000000000000\n2\n1\n-9223372036854775808\n4\n2\n3\n2\n4\n5\n",
    );

    assert!(out.contains(
        "Product unavailable or insufficient stock. (Quantity -200000000000000 for Laptop is out of range)"
    ));
    assert!(out.contains(
        "Product unavailable or insufficient stock. (Quantity -9223372036854775808 for Laptop is out of range)"
    ));
    assert!(out.contains("Cart is empty. Add products before checkout."));
    assert!(out.contains("Items: 1 (2 units)\nTotal: $100.00"));
    assert!(out.contains("Exiting... Thank you for shopping!"));
    assert_eq!(store.inventory().find_by_id(1).map(|p| p.stock()), Some(5));
}

#[test]
fn invalid_input_is_recovered() {
    let mut store = demo_store();
    let out = run_script(&mut store, "9\nabc\n2\n3\nlots\n4\n5\n");

    assert!(out.contains("Invalid choice! Try again."));
    assert!(out.contains("Please enter a whole number."));
    assert!(out.contains("4 Headphones(s) added to cart."));
    assert_eq!(store.cart().quantity_of(3), Some(4));
}

#[test]
fn end_of_input_stops_cleanly() {
    let mut store = demo_store();
    let out = run_script(&mut store, "2\n1\n");

    assert!(out.ends_with("Enter Quantity: "));
    assert!(store.cart().is_empty());
}

#[test]
fn custom_currency_symbol() {
    let mut store = demo_store();
    let config = ShopConfig {
        currency_symbol: "€".to_string(),
        ..ShopConfig::default()
    };
    let mut output = Vec::new();
    Session::new(&mut store, &config, Cursor::new("1\n"), &mut output)
        .run()
        .unwrap();

    let out = String::from_utf8(output).unwrap();
    assert!(out.contains("1. Laptop - €800.00 (Stock: 5)"));
}

#[test]
fn build_store_uses_configured_catalog() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{ "id": 42, "name": "Desk Lamp", "unit_price_cents": 2599, "stock": 2 }}]"#
    )
    .unwrap();

    let config = ShopConfig {
        catalog_path: Some(file.path().to_path_buf()),
        ..ShopConfig::default()
    };
    let mut store = build_store(&config).unwrap();

    assert_eq!(store.products().len(), 1);
    let out = run_script(&mut store, "2\n42\n2\n4\n");
    assert!(out.contains("Desk Lamp - 2 x $25.99 = $51.98"));
    assert!(out.contains("Total: $51.98"));
}

#[test]
fn build_store_defaults_to_demo_catalog() {
    let store = build_store(&ShopConfig::default()).unwrap();
    assert_eq!(store.products().len(), 3);
}
