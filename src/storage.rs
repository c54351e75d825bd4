//! Durable Storage
//!
//! Key/value string storage behind a trait so the task store can run
//! against `window.localStorage` in the browser and an in-memory map in
//! tests.

#[cfg(test)]
use std::cell::{Cell, RefCell};
#[cfg(test)]
use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};

use crate::error::{StorageError, StorageResult};

/// Core storage trait: one string value per key
pub trait StorageBackend {
    /// Read the value stored under `key`, `None` when absent
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`
#[derive(Clone, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> StorageResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(describe_js_error(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(describe_js_error(&e)))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage()?.set_item(key, value).map_err(|e| {
            let message = describe_js_error(&e);
            if is_quota_error(&e) {
                StorageError::QuotaExceeded(message)
            } else {
                StorageError::Write(message)
            }
        })
    }
}

fn is_quota_error(err: &JsValue) -> bool {
    err.dyn_ref::<web_sys::DomException>()
        .map(|ex| ex.name() == "QuotaExceededError" || ex.name() == "NS_ERROR_DOM_QUOTA_REACHED")
        .unwrap_or(false)
}

fn describe_js_error(err: &JsValue) -> String {
    if let Some(ex) = err.dyn_ref::<web_sys::DomException>() {
        return format!("{}: {}", ex.name(), ex.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// In-memory storage with an optional injected write failure
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    failure: RefCell<Option<StorageError>>,
    writes: Cell<usize>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    /// Make every following write fail with `err` (or succeed again with `None`)
    pub fn fail_writes(&self, err: Option<StorageError>) {
        *self.failure.borrow_mut() = err;
    }

    /// Current raw value under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

#[cfg(test)]
impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(err) = self.failure.borrow().clone() {
            return Err(err);
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("todos").unwrap(), None);

        storage.write("todos", "[]").unwrap();
        assert_eq!(storage.read("todos").unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn test_injected_failure_keeps_old_value() {
        let storage = MemoryStorage::with_entry("todos", "[]");
        storage.fail_writes(Some(StorageError::QuotaExceeded("full".to_string())));

        let err = storage.write("todos", "[1]").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded(_)));
        assert_eq!(storage.raw("todos").as_deref(), Some("[]"));

        storage.fail_writes(None);
        storage.write("todos", "[1]").unwrap();
        assert_eq!(storage.raw("todos").as_deref(), Some("[1]"));
    }
}
