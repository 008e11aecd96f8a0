//! Token persistence.

use std::cell::RefCell;
use std::rc::Rc;

/// Storage key the raw bearer token persists under.
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// Where the raw bearer token lives between page loads.
///
/// The session is the only writer. Implementations are infallible by
/// contract: a store that cannot persist simply behaves as if no token were
/// set, which the session reads as "not logged in".
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn remove(&self);
}

/// In-memory store for native targets and tests.
///
/// Clones share the same slot, so a test can hand one handle to the session
/// and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn remove(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// `window.localStorage`-backed store used by the browser build.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserStore {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        }
    }

    fn remove(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_the_slot() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("tok");
        assert_eq!(other.get().as_deref(), Some("tok"));

        other.remove();
        assert_eq!(store.get(), None);
    }
}
