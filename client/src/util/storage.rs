//! Key-value persistence for settings that must survive a page reload.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login screen persists exactly one raw string (the redirect URL). Pages
//! receive storage as an injected [`KeyValueStore`] so state transitions can be
//! exercised against [`MemoryStore`] without a browser.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage is best-effort: a missing `window`, disabled storage, or a
//! quota failure surfaces as [`StorageError`] on write and as `None` on read.
//! SSR builds never touch `localStorage`, which keeps server output
//! deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Storage key holding the committed redirect URL.
pub const REDIRECT_URL_KEY: &str = "redirectUrl";

/// Failure writing to a [`KeyValueStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("write to `{key}` rejected: {reason}")]
    Rejected { key: String, reason: String },
}

/// Synchronous string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store is unavailable or
    /// refuses the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Shared handle provided to components through Leptos context.
pub type SharedStore = Arc<dyn KeyValueStore + Send + Sync>;

/// Store for the current build: `localStorage` in the browser bundle, an empty
/// per-render [`MemoryStore`] otherwise.
#[must_use]
pub fn default_store() -> SharedStore {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserStore)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryStore::new())
    }
}

/// `window.localStorage`, resolved on every access.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage.set_item(key, value).map_err(|e| StorageError::Rejected {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process store backing server rendering and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
