//! End-to-end checks through the public prelude.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{json, Value};
use shop_sdk::prelude::*;

fn products() -> Vec<Product> {
    vec![
        Product::new("banana").with_price(Money::usd(300)).with_rating(4.0),
        Product::new("Apple")
            .with_price(Money::usd(500))
            .with_discounted_price(Money::usd(100)),
        Product::new("cherry").with_price(Money::usd(200)).with_rating(4.5),
    ]
}

fn titles(products: &[Product]) -> Vec<&str> {
    products.iter().map(Product::sort_title).collect()
}

#[test]
fn test_sort_absent_or_non_array_input_is_empty() {
    assert!(safe_sort_products(None, "title").is_empty());
    assert!(safe_sort_products_json(&Value::Null, "title").is_empty());
    assert!(safe_sort_products_json(&json!({ "title": "mug" }), "price").is_empty());
}

#[test]
fn test_sort_leaves_input_untouched() {
    let input = products();
    let before = input.clone();

    let sorted = safe_sort_products(Some(input.as_slice()), "price");
    assert_eq!(input, before);
    assert_eq!(titles(&sorted), ["Apple", "cherry", "banana"]);
}

#[test]
fn test_sort_orders() {
    let input = products();
    let sorted = safe_sort_products(Some(input.as_slice()), "title");
    assert_eq!(titles(&sorted), ["Apple", "banana", "cherry"]);

    let sorted = safe_sort_products(Some(input.as_slice()), "-price");
    assert_eq!(titles(&sorted), ["banana", "cherry", "Apple"]);

    // Missing ratings sort as zero.
    let sorted = safe_sort_products(Some(input.as_slice()), "-rating");
    assert_eq!(titles(&sorted), ["cherry", "banana", "Apple"]);
}

#[test]
fn test_sort_from_json_with_missing_fields() {
    let value = json!([
        { "title": "mug", "price": 12.5 },
        { "title": "tee" },
        { "price": 3 },
    ]);

    let sorted = safe_sort_products_json(&value, SortKey::PriceAsc);
    assert_eq!(titles(&sorted), ["tee", "", "mug"]);
}

#[test]
fn test_cart_math() {
    let cart = vec![
        CartItem::new(Money::usd(1000), 2),
        CartItem::new(Money::usd(500), 1),
    ];
    assert_eq!(calculate_cart_total(&cart), Money::usd(2500));

    let totals = calculate_cart_total_with_tax(&cart, DEFAULT_TAX_RATE);
    assert_eq!(totals.tax, Money::usd(200));
    assert_eq!(totals.total, Money::usd(2700));

    let summary = get_cart_summary(&[]);
    assert_eq!(summary.total_items, 0);
    assert_eq!(summary.unique_items, 0);
    assert!(summary.total_value.is_zero());
    assert!(summary.average_item_value.is_zero());
}

#[test]
fn test_shipping_upgrade() {
    assert_eq!(suggest_shipping_upgrade(Money::usd(6000), Money::usd(5000)), None);

    let upgrade = suggest_shipping_upgrade(Money::usd(3000), Money::usd(5000)).unwrap();
    assert_eq!(upgrade.needed, Money::usd(2000));
    assert!(upgrade.message.contains("$20.00"));
}

#[test]
fn test_stock_validation_from_json() {
    let cart: Vec<CartItem> = serde_json::from_value(json!([
        { "id": "mug", "price": 12.0, "quantity": 3, "stock": 2 },
        { "id": "tee", "price": 20.0, "quantity": 1 },
    ]))
    .unwrap();

    let validated = validate_cart_stock(&cart);
    assert!(!validated[0].is_stock_valid);
    assert_eq!(validated[0].stock_issue.as_deref(), Some("Only 2 available"));
    assert!(validated[1].is_stock_valid);

    let out = serde_json::to_value(&validated[0]).unwrap();
    assert_eq!(out["id"], "mug");
    assert_eq!(out["isStockValid"], false);
}

#[test]
fn test_text_and_formatting() {
    assert_eq!(slugify("Hello, World!"), "hello-world");
    assert_eq!(format_price(1234.5), "$1,234.50");
    assert_eq!(format_date("2024-03-05"), "March 5, 2024");
    assert_eq!(format_date("soon"), INVALID_DATE);
    assert!(is_valid_email("shopper@example.com"));
    assert!(!is_valid_email("shopper@example"));
}

#[test]
fn test_storage_round_trips() {
    let storage = Storage::new(MemoryStore::new());

    storage.set_item("k", &json!({ "a": 1 }));
    assert_eq!(storage.get_item("k", Value::Null), json!({ "a": 1 }));

    storage.set_item(TOKEN_KEY, "abc");
    assert_eq!(storage.get_item(TOKEN_KEY, String::new()), "abc");
}

#[test]
fn test_storefront_persists_carts_by_id() {
    let store = Arc::new(MemoryStore::new());
    let shop = Storefront::new(StorefrontConfig::default(), Arc::clone(&store));

    shop.save_cart("a", &[CartItem::new(Money::usd(100), 1)]);
    shop.save_cart("b", &[CartItem::new(Money::usd(200), 2)]);

    assert_eq!(calculate_cart_total(&shop.load_cart("a")), Money::usd(100));
    assert_eq!(calculate_cart_total(&shop.load_cart("b")), Money::usd(400));
    assert!(store.exists(&storage_key!("cart", "a")).unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_rapid_debounced_calls_run_once() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let debouncer = Debouncer::new(
        move |n: u32| sink.lock().unwrap().push(n),
        Duration::from_millis(300),
    )
    .unwrap();

    for n in 0..10 {
        debouncer.call(n);
    }
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(*calls.lock().unwrap(), vec![9]);
}
