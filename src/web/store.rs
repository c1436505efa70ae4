//! `localStorage`-backed theme preference.

use web_sys::{Storage, Window};

use crate::error::DomError;
use crate::theme::{MemoryStore, PreferenceStore};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Theme preference in `localStorage`, mirrored in memory so the page keeps
/// working for the session when storage is blocked.
pub struct BrowserStore {
    key: String,
    storage: Option<Storage>,
    session: MemoryStore,
}

impl BrowserStore {
    pub fn new(window: &Window, key: &str) -> Self {
        let storage = match window.local_storage() {
            Ok(Some(storage)) => Some(storage),
            Ok(None) => {
                log::warn!("localStorage unavailable; theme preference lasts for this session only");
                None
            }
            Err(err) => {
                log::warn!("localStorage blocked: {}", DomError::from(err));
                None
            }
        };
        let system_dark = match window.match_media(DARK_SCHEME_QUERY) {
            Ok(Some(query)) => query.matches(),
            Ok(None) => false,
            Err(err) => {
                log::debug!("matchMedia failed: {}", DomError::from(err));
                false
            }
        };
        Self { key: key.to_owned(), storage, session: MemoryStore::new(None, system_dark) }
    }
}

impl PreferenceStore for BrowserStore {
    fn load(&self) -> Option<String> {
        let Some(storage) = &self.storage else {
            return self.session.load();
        };
        match storage.get_item(&self.key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("failed to read {:?}: {}", self.key, DomError::from(err));
                self.session.load()
            }
        }
    }

    fn save(&mut self, value: &str) {
        self.session.save(value);
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(&self.key, value) {
                log::warn!("failed to persist {:?}: {}", self.key, DomError::from(err));
            }
        }
    }

    fn system_prefers_dark(&self) -> bool {
        self.session.system_prefers_dark()
    }
}
