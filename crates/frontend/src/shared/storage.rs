//! Key-value storage backends.
//!
//! `BrowserStorage` wraps `window.localStorage`. `MemoryStorage` keeps the
//! entries in memory: it stands in when local storage is disabled (private
//! browsing, sandboxed iframes) and it is what the tests run against.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Local storage is not available: {0}")]
    Unavailable(String),

    #[error("Failed to read key '{key}': {message}")]
    Read { key: String, message: String },

    #[error("Failed to write key '{key}': {message}")]
    Write { key: String, message: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Synchronous string key-value store with single-key writes.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites the whole value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> Result<Self, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("No window object".into()))?;
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".into()))?;
        Ok(Self { inner })
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Throws QuotaExceededError when the origin is out of space
        self.inner.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}

/// In-memory storage. Clones share the same entries.
#[derive(Clone, Default, Debug)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

thread_local! {
    static SESSION_FALLBACK: MemoryStorage = MemoryStorage::default();
}

/// Opens local storage, or a per-session in-memory store when the browser
/// refuses access. Every page sees the same fallback instance.
pub fn open_local_storage() -> Box<dyn KeyValueStorage> {
    match BrowserStorage::local() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("{}; data will be kept for this session only", e);
            Box::new(SESSION_FALLBACK.with(MemoryStorage::clone))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_overwrites_and_shares() {
        let storage = MemoryStorage::default();
        let other = storage.clone();
        assert_eq!(storage.get_item("k").unwrap(), None);

        storage.set_item("k", "1").unwrap();
        storage.set_item("k", "2").unwrap();
        assert_eq!(other.get_item("k").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn storage_error_messages() {
        let err = StorageError::Write {
            key: "registrations".into(),
            message: "QuotaExceededError".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write key 'registrations': QuotaExceededError"
        );
    }
}
