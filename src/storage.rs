//! Browser token storage
//!
//! `localStorage`-backed `TokenStore`. When storage is unavailable (private
//! mode, sandboxed iframe) every read misses and writes are dropped.

use catalog_client::session::{TokenStore, TOKEN_KEY};
use log::warn;

pub struct LocalStorageTokenStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStorageTokenStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage unavailable, session will not persist");
        }
        Self { storage }
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        self.storage.as_ref()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn set(&self, token: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                warn!("failed to persist token");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
