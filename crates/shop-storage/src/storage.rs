//! Typed storage with automatic JSON serialization.

use crate::{KeyValueStore, StorageError};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Key whose value is an opaque string and is never JSON-encoded.
pub const TOKEN_KEY: &str = "token";

/// Typed view over a [`KeyValueStore`].
///
/// Values are stored as JSON text, except under [`TOKEN_KEY`], which holds
/// the raw token string. The plain `get_item` / `set_item` / `remove_item`
/// never fail: problems are logged and the read falls back to a default or
/// the write is dropped. The `try_` forms report them instead.
///
/// # Example
///
/// ```
/// use shop_storage::{MemoryStore, Storage};
///
/// let storage = Storage::new(MemoryStore::new());
/// storage.set_item("recently_viewed", &vec!["mug", "tee"]);
/// storage.set_item("token", "abc");
///
/// let viewed: Vec<String> = storage.get_item("recently_viewed", Vec::new());
/// assert_eq!(viewed, ["mug", "tee"]);
/// assert_eq!(storage.get_item("token", String::new()), "abc");
/// ```
#[derive(Debug, Default)]
pub struct Storage<S> {
    store: S,
}

impl<S: KeyValueStore> Storage<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the wrapper and return the store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Read a value. Absent keys and empty stored strings yield `Ok(None)`.
    pub fn try_get_item<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, StorageError> {
        let raw = match self.store.get(key)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(None),
        };

        let value = if key == TOKEN_KEY {
            serde_json::from_value(Value::String(raw))?
        } else {
            serde_json::from_str(&raw)?
        };
        Ok(Some(value))
    }

    /// Read a value, returning `default` when it is absent or unreadable.
    pub fn get_item<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_get_item(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                tracing::error!(key, error = %e, "failed to read storage item");
                default
            }
        }
    }

    /// Write a value.
    ///
    /// Under [`TOKEN_KEY`] a string value is stored as-is; any other value
    /// shape is stored as its JSON text.
    pub fn try_set_item<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        let raw = if key == TOKEN_KEY {
            match serde_json::to_value(value)? {
                Value::String(token) => token,
                other => other.to_string(),
            }
        } else {
            serde_json::to_string(value)?
        };
        self.store.set(key, &raw)
    }

    /// Write a value, logging and dropping the write on failure.
    pub fn set_item<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_set_item(key, value) {
            tracing::error!(key, error = %e, "failed to set storage item");
        }
    }

    /// Remove a key.
    pub fn try_remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.store.remove(key)
    }

    /// Remove a key, logging on failure.
    pub fn remove_item(&self, key: &str) {
        if let Err(e) = self.try_remove_item(key) {
            tracing::error!(key, error = %e, "failed to remove storage item");
        }
    }
}
