//! `window.localStorage` as a counter [`Storage`] backend.

use tally_core::{CounterError, Result, Storage};
use tracing::warn;

/// The page origin's `localStorage`.
///
/// When the browser denies access (sandboxed frames, some private modes) the
/// handle is still created; every call then fails with
/// [`CounterError::Storage`] and the counter keeps working in memory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let inner = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Some(storage),
            Some(Ok(None)) | None => {
                warn!("localStorage is not available; counter will not persist");
                None
            }
            Some(Err(e)) => {
                warn!(error = ?e, "localStorage access denied; counter will not persist");
                None
            }
        };
        Self { inner }
    }

    fn handle(&self) -> Result<&web_sys::Storage> {
        self.inner
            .as_ref()
            .ok_or_else(|| CounterError::Storage("localStorage unavailable".to_string()))
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.handle()?
            .get_item(key)
            .map_err(|e| CounterError::Storage(format!("getItem({}) failed: {:?}", key, e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.handle()?
            .set_item(key, value)
            .map_err(|e| CounterError::Storage(format!("setItem({}) failed: {:?}", key, e)))
    }
}
