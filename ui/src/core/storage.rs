//! Key/value persistence seam over the browser's localStorage.
//!
//! Everything the app persists (the daily quota slot and the premium capture
//! slots) goes through [`KeyValueStore`], so the quota and capture logic can be
//! exercised against an in-memory store in tests and on native targets.

use std::collections::HashMap;
use std::sync::Mutex;

#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;

/// Minimal string-slot store. Reads fail soft (`None`), writes are best-effort;
/// callers treat a missing slot the same as a malformed one.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store used in tests and as the native stand-in for localStorage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.remove(key);
        }
    }
}

/// localStorage-backed store. A detached window or a storage-denied context
/// degrades to the same behaviour as an empty store.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// The store backing the running app: localStorage on web, a process-wide
/// in-memory map elsewhere.
pub fn local_store() -> &'static dyn KeyValueStore {
    #[cfg(target_arch = "wasm32")]
    {
        static STORE: BrowserStore = BrowserStore;
        &STORE
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        static STORE: Lazy<MemoryStore> = Lazy::new(MemoryStore::new);
        &*STORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_removes() {
        let store = MemoryStore::new();
        assert_eq!(store.get("slot"), None);

        store.set("slot", "value");
        assert_eq!(store.get("slot"), Some("value".to_string()));

        store.set("slot", "newer");
        assert_eq!(store.get("slot"), Some("newer".to_string()));

        store.remove("slot");
        assert_eq!(store.get("slot"), None);
    }
}
