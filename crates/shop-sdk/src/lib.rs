//! # Storefront SDK
//!
//! One dependency for storefront pages: the commerce helpers, typed
//! storage and debouncing, plus configuration and logging setup.
//!
//! ## Quick Start
//!
//! ```
//! use shop_sdk::prelude::*;
//!
//! let config = StorefrontConfig::new("outlet").with_tax_rate(0.1);
//! shop_sdk::logging::init(&config.log_filter);
//!
//! let shop = Storefront::new(config, MemoryStore::new());
//! let cart = vec![CartItem::new(Money::usd(2500), 1)];
//! assert_eq!(shop.cart_totals(&cart).total.display(), "$27.50");
//!
//! let listing = safe_sort_products(None, SortKey::PriceAsc);
//! assert!(listing.is_empty());
//! ```
//!
//! ## Crates
//!
//! - `shop_commerce` - money, formatting, text, catalog sorting, cart math
//! - `shop_storage` - JSON values over a string key-value store
//! - `shop_executor` - trailing-edge debouncing on tokio

mod config;
pub mod logging;
pub mod prelude;
mod storefront;

// Re-export member crates
pub use shop_commerce;
pub use shop_executor;
pub use shop_storage;

pub use config::StorefrontConfig;
pub use storefront::Storefront;

pub use shop_commerce::{CommerceError, Currency, Money};
pub use shop_executor::{DebounceError, Debouncer};
pub use shop_storage::{storage_key, KeyValueStore, MemoryStore, Storage, StorageError};
