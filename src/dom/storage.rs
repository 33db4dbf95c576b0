//! `localStorage`-backed key-value store.
//!
//! Storage is best-effort: private browsing modes may deny access, in which
//! case reads return nothing and writes are dropped with a warning.

use web_sys::{Storage, Window};

use crate::theme::KeyValueStore;

pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        match window.local_storage() {
            Ok(storage) => Self { storage },
            Err(err) => {
                log::warn!("storage: localStorage unavailable: {err:?}");
                Self { storage: None }
            }
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("storage: read {key:?} failed: {err:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("storage: write {key:?} failed: {err:?}");
        }
    }
}
