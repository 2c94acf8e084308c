//! Typed storage for storefront state.
//!
//! Wraps a string-only key-value store (browser storage, or the in-process
//! [`MemoryStore`]) with automatic JSON serialization. Failures are logged
//! and swallowed by default so presentation code never has to handle them.
//!
//! # Example
//!
//! ```
//! use shop_storage::{storage_key, MemoryStore, Storage};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, Default, PartialEq, Debug)]
//! struct Wishlist {
//!     items: Vec<String>,
//! }
//!
//! let storage = Storage::new(MemoryStore::new());
//! let key = storage_key!("wishlist", "user123");
//!
//! storage.set_item(&key, &Wishlist { items: vec!["mug".into()] });
//! let wishlist: Wishlist = storage.get_item(&key, Wishlist::default());
//! assert_eq!(wishlist.items, ["mug"]);
//!
//! storage.remove_item(&key);
//! ```

mod error;
mod kv;
mod storage;

pub use error::StorageError;
pub use kv::{KeyValueStore, MemoryStore};
pub use storage::{Storage, TOKEN_KEY};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{KeyValueStore, MemoryStore, Storage, StorageError, TOKEN_KEY};
}
