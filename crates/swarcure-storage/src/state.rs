use serde::{Serialize, de::DeserializeOwned};

use crate::KeyValueStore;
use crate::error::StorageError;

/// Load a JSON value. Missing keys are [`StorageError::NotFound`].
pub fn load_state<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<T, StorageError> {
    load_state_opt(store, key)?.ok_or_else(|| StorageError::NotFound {
        key: key.to_string(),
    })
}

/// Load a JSON value, or `None` if the key has never been written.
pub fn load_state_opt<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}

/// Save a value as pretty-printed JSON.
pub fn save_state<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    store.set(key, body)
}
