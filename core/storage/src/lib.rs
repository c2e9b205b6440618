//! FILENAME: core/storage/src/lib.rs
//! Key-value store capability for the dashboard application.
//!
//! The application treats client-side storage as an injected capability
//! rather than an ambient global: anything that wants to persist a
//! session or a preference receives a `KeyValueStore` and calls
//! `get`/`set`/`remove` on it. Two implementations are provided: an
//! in-memory store for tests and ephemeral sessions, and a JSON-file
//! backed store for a desktop deployment.

pub mod error;
pub mod file;
pub mod memory;

pub use error::StorageError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// String-keyed, string-valued storage. Object safe so the application
/// can hold a `Box<dyn KeyValueStore + Send>` and tests can substitute
/// a mock.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Reads `key` and deserializes it from JSON. Missing keys and
/// malformed payloads both read as `None`; a stale or corrupt entry is
/// treated like an absent one.
pub fn get_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    serde_json::from_str(&raw).ok()
}

/// Serializes `value` to JSON and writes it under `key`.
pub fn set_json<T: Serialize>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
