use std::sync::Arc;

use tokio::sync::Mutex;

use swarcure_storage::KeyValueStore;
use swarcure_storage::error::StorageError;
use swarcure_storage::file::FileStore;
use swarcure_storage::memory::MemoryStore;

use crate::config::StorageBackend;
use crate::error::ApiError;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    /// Serializes store updates that span more than one write: assessment
    /// saves (history + latest snapshot) and progress journal appends.
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Run a store operation on the blocking pool.
    pub async fn with_store<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        F: FnOnce(&dyn KeyValueStore) -> Result<T, StorageError> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let result = tokio::task::spawn_blocking(move || op(store.as_ref()))
            .await
            .map_err(|e| ApiError::Internal(format!("storage task failed: {e}")))?;
        Ok(result?)
    }
}

pub fn build_store(backend: &StorageBackend) -> Arc<dyn KeyValueStore> {
    match backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File { root } => Arc::new(FileStore::new(root.clone())),
    }
}
