#![forbid(unsafe_code)]

use crate::error::ApiError;
use depot_storage::{SqliteStore, StoreError};
use std::sync::{Arc, Mutex};

/// Shared handler state: the injected store behind a mutex.
///
/// SQLite has a single writer anyway, so a guarded connection is the pool;
/// every call still crosses to the blocking pool so the async runtime never
/// parks on a database statement.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<SqliteStore>>,
}

impl AppState {
    pub fn new(store: SqliteStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub(crate) async fn with_store<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut SqliteStore) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let result = tokio::task::spawn_blocking(move || {
            let mut guard = store.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            op(&mut guard)
        })
        .await
        .map_err(|_| ApiError::Internal("store task aborted"))?;

        result.map_err(ApiError::from)
    }

    /// Recovers the store once the server (and every handler clone) is done
    /// with it, so the binary can close the connection explicitly.
    pub fn into_store(self) -> Option<SqliteStore> {
        Arc::into_inner(self.store)
            .map(|mutex| mutex.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }
}
