//! Key-value persistence capability and browser `localStorage` backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! State stores take a [`KeyValueStore`] at construction instead of reaching
//! for `window.localStorage` directly, so the same code runs against the
//! browser in hydrate builds and against [`MemoryStore`] in tests.
//!
//! ERROR HANDLING
//! ==============
//! Every backend failure comes back as a [`StorageError`]. Callers decide the
//! policy; the accordion store treats all of them as advisory.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed for {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("storage write failed for {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("stored value for {key} is not valid: {source}")]
    Corrupt { key: String, source: serde_json::Error },
    #[error("value for {key} could not be serialized: {source}")]
    Serialize { key: String, source: serde_json::Error },
}

/// String-keyed, string-valued synchronous storage.
pub trait KeyValueStore {
    /// Read the raw value for `key`; `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be reached or refuses the read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw value for `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend is unavailable or rejects the write
    /// (quota exceeded, storage disabled).
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

// =============================================================================
// JSON HELPERS
// =============================================================================

/// Load and decode a JSON value stored under `key`.
///
/// # Errors
///
/// Propagates backend errors and reports undecodable values as
/// [`StorageError::Corrupt`].
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Corrupt { key: key.to_owned(), source })
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Serialize`] if encoding fails, otherwise whatever
/// the backend reports for the write.
pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)
        .map_err(|source| StorageError::Serialize { key: key.to_owned(), source })?;
    store.set(key, &raw)
}

// =============================================================================
// IN-MEMORY BACKEND
// =============================================================================

/// In-process store; stands in for `localStorage` in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    reject_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing write rejection.
    #[must_use]
    pub fn with_raw(mut self, key: &str, raw: &str) -> Self {
        self.entries.insert(key.to_owned(), raw.to_owned());
        self
    }

    /// Make subsequent writes fail the way a full or disabled browser store does.
    pub fn set_reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    /// Raw stored value for `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Write { key: key.to_owned(), reason: "quota exceeded".to_owned() });
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// BROWSER BACKEND
// =============================================================================

/// `window.localStorage`, resolved on every call.
///
/// Outside hydrate builds there is no browser, so every call reports
/// [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        _ => Err(StorageError::Unavailable),
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .get_item(key)
                .map_err(|err| StorageError::Read { key: key.to_owned(), reason: format!("{err:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::Write { key: key.to_owned(), reason: format!("{err:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}
