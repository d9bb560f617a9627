//! Browser-persisted holder of the session credential. The store is the
//! single source of truth for whether a session is active: absence of a
//! token means logged out, regardless of any profile still held in memory.
//! `set` replaces the previous token wholesale; there is at most one
//! credential at a time.
//!
//! The token lives in origin-scoped `localStorage` under a fixed key, so it
//! survives page reloads but is not shared across browsers or devices.
//! Native builds substitute a thread-local in-memory backend so the store
//! can be exercised in unit tests.

const TOKEN_STORAGE_KEY: &str = "token";

/// Handle over the origin-scoped token storage. Cheap to copy; injected
/// into clients and controllers rather than accessed as an ambient global.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore;

impl SessionStore {
    /// Returns the held credential, or `None` when anonymous.
    pub fn get(self) -> Option<String> {
        backend::read(TOKEN_STORAGE_KEY)
    }

    /// Stores a credential, replacing any previous one.
    pub fn set(self, token: &str) {
        backend::write(TOKEN_STORAGE_KEY, token);
    }

    /// Drops the credential. Called on logout and whenever the service
    /// rejects the token as unauthorized.
    pub fn clear(self) {
        backend::remove(TOKEN_STORAGE_KEY);
    }
}

#[cfg(target_arch = "wasm32")]
mod backend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }

    pub(super) fn read(key: &str) -> Option<String> {
        storage()
            .and_then(|s| s.get_item(key).ok())
            .flatten()
            .filter(|value| !value.is_empty())
    }

    pub(super) fn write(key: &str, value: &str) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, value);
        }
    }

    pub(super) fn remove(key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub(super) fn read(key: &str) -> Option<String> {
        STORE
            .with(|store| store.borrow().get(key).cloned())
            .filter(|value| !value.is_empty())
    }

    pub(super) fn write(key: &str, value: &str) {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub(super) fn remove(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}
