//! Config-driven helpers over a storage backend.

use shop_commerce::cart::{
    calculate_cart_total, calculate_cart_total_with_tax, suggest_shipping_upgrade, CartItem,
    CartTotals, ShippingUpgrade,
};
use shop_commerce::text::{generate_id, truncate_text};
use shop_executor::{DebounceError, Debouncer};
use shop_storage::{storage_key, KeyValueStore, Storage};

use crate::StorefrontConfig;

/// A storefront: its configuration plus the store carts are kept in.
///
/// # Example
///
/// ```
/// use shop_sdk::prelude::*;
///
/// let shop = Storefront::new(StorefrontConfig::default(), MemoryStore::new());
/// let cart = vec![CartItem::new(Money::usd(1000), 2), CartItem::new(Money::usd(500), 1)];
///
/// shop.save_cart("guest", &cart);
/// let cart = shop.load_cart("guest");
///
/// assert_eq!(shop.cart_totals(&cart).total.display(), "$27.00");
/// assert_eq!(
///     shop.shipping_upgrade(&cart).unwrap().message,
///     "Add $25.00 more for free shipping"
/// );
/// ```
#[derive(Debug)]
pub struct Storefront<S> {
    config: StorefrontConfig,
    storage: Storage<S>,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Create a storefront backed by `store`.
    pub fn new(config: StorefrontConfig, store: S) -> Self {
        tracing::debug!(name = %config.name, "storefront created");
        Self {
            config,
            storage: Storage::new(store),
        }
    }

    /// The configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Typed access to the backing store.
    pub fn storage(&self) -> &Storage<S> {
        &self.storage
    }

    /// Subtotal, tax at the configured rate, and total.
    pub fn cart_totals(&self, items: &[CartItem]) -> CartTotals {
        calculate_cart_total_with_tax(items, self.config.tax_rate)
    }

    /// Free-shipping upsell against the configured threshold.
    pub fn shipping_upgrade(&self, items: &[CartItem]) -> Option<ShippingUpgrade> {
        suggest_shipping_upgrade(
            calculate_cart_total(items),
            self.config.free_shipping_threshold(),
        )
    }

    /// Truncate to the configured length.
    pub fn truncate(&self, text: &str) -> String {
        truncate_text(text, self.config.truncate_length)
    }

    /// A fresh id of the configured length.
    pub fn new_id(&self) -> String {
        generate_id(self.config.id_length)
    }

    /// Debounce `search` by the configured quiet period.
    ///
    /// Must be called from within a tokio runtime.
    pub fn search_debouncer<F>(&self, search: F) -> Result<Debouncer<String>, DebounceError>
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        Debouncer::new(search, self.config.search_debounce())
    }

    /// Persist a cart.
    pub fn save_cart(&self, cart_id: &str, items: &[CartItem]) {
        self.storage.set_item(&storage_key!("cart", cart_id), items);
    }

    /// Load a cart; missing or unreadable carts come back empty.
    pub fn load_cart(&self, cart_id: &str) -> Vec<CartItem> {
        self.storage.get_item(&storage_key!("cart", cart_id), Vec::new())
    }

    /// Forget a cart.
    pub fn clear_cart(&self, cart_id: &str) {
        self.storage.remove_item(&storage_key!("cart", cart_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::Money;
    use shop_storage::MemoryStore;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn cart() -> Vec<CartItem> {
        vec![
            CartItem::new(Money::usd(1000), 2),
            CartItem::new(Money::usd(500), 1),
        ]
    }

    #[test]
    fn test_cart_totals_use_configured_rate() {
        let shop = Storefront::new(
            StorefrontConfig::default().with_tax_rate(0.1),
            MemoryStore::new(),
        );
        let totals = shop.cart_totals(&cart());
        assert_eq!(totals.tax, Money::usd(250));
        assert_eq!(totals.total, Money::usd(2750));
    }

    #[test]
    fn test_shipping_upgrade_uses_configured_threshold() {
        let shop = Storefront::new(
            StorefrontConfig::default().with_free_shipping_threshold(20.0),
            MemoryStore::new(),
        );
        assert_eq!(shop.shipping_upgrade(&cart()), None);

        let shop = Storefront::new(StorefrontConfig::default(), MemoryStore::new());
        let upgrade = shop.shipping_upgrade(&cart()).unwrap();
        assert_eq!(upgrade.needed, Money::usd(2500));
    }

    #[test]
    fn test_truncate_and_ids_follow_config() {
        let shop = Storefront::new(
            StorefrontConfig::default()
                .with_truncate_length(5)
                .with_id_length(12),
            MemoryStore::new(),
        );
        assert_eq!(shop.truncate("Hello, World"), "Hello...");
        assert_eq!(shop.truncate("Hi"), "Hi");
        assert_eq!(shop.new_id().len(), 12);
    }

    #[test]
    fn test_cart_persistence() {
        let store = Arc::new(MemoryStore::new());
        let shop = Storefront::new(StorefrontConfig::default(), Arc::clone(&store));

        let items = vec![CartItem::new(Money::usd(1999), 1)
            .with_stock(3)
            .with_attribute("id", "sku-1")];
        shop.save_cart("guest", &items);
        assert_eq!(store.keys(), vec!["cart:guest".to_string()]);
        assert_eq!(shop.load_cart("guest"), items);

        shop.clear_cart("guest");
        assert!(shop.load_cart("guest").is_empty());
    }

    #[test]
    fn test_missing_cart_is_empty() {
        let shop = Storefront::new(StorefrontConfig::default(), MemoryStore::new());
        assert!(shop.load_cart("nobody").is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_debouncer_uses_configured_wait() {
        let shop = Storefront::new(
            StorefrontConfig::default().with_search_debounce(Duration::from_millis(200)),
            MemoryStore::new(),
        );

        let queries = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&queries);
        let search = shop
            .search_debouncer(move |q| sink.lock().unwrap().push(q))
            .unwrap();
        assert_eq!(search.wait(), Duration::from_millis(200));

        search.call("te".to_string());
        search.call("tee".to_string());
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(*queries.lock().unwrap(), vec!["tee".to_string()]);
    }
}
