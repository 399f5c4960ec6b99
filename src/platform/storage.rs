//! Browser LocalStorage backend

use crate::persistence::{PersistenceError, Storage};

/// `window.localStorage`, or nothing if the browser denies access
/// (private mode, sandboxed iframe). Reads then come back empty and writes
/// fail with [`PersistenceError::Unavailable`].
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let inner = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if inner.is_none() {
            log::warn!("LocalStorage unavailable, scores will not persist");
        }
        Self { inner }
    }
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let storage = self.inner.as_ref().ok_or(PersistenceError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| PersistenceError::WriteRejected {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}
