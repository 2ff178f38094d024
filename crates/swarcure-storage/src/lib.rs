//! swarcure-storage
//!
//! Durable key-value storage, injected wherever records are read or written.
//! Ships an in-memory backend and a file-per-key backend.

pub mod error;
pub mod file;
pub mod memory;
pub mod records;
pub mod state;

use error::StorageError;

/// Byte-oriented key-value store.
///
/// Keys are `/`-separated paths built by `swarcure_core::keys`.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    /// Remove a value. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Every key that starts with `prefix`, sorted.
    fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
}
