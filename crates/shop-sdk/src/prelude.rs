//! Prelude for convenient imports.
//!
//! ```
//! use shop_sdk::prelude::*;
//! ```
//!
//! Brings in the commerce prelude, storage, debouncing and the
//! storefront types.

pub use shop_commerce::prelude::*;

// Storage
pub use shop_storage::{storage_key, KeyValueStore, MemoryStore, Storage, StorageError, TOKEN_KEY};

// Executor
pub use shop_executor::{DebounceError, Debouncer};

// Storefront
pub use crate::{Storefront, StorefrontConfig};
