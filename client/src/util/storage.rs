//! Browser `localStorage` token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements `session::TokenStore` over `window.localStorage`. SSR builds
//! compile to a no-op store that always reads empty, so server rendering
//! stays in the loading state until the browser bootstraps.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use session::TokenStore;

use crate::config::TOKEN_STORAGE_KEY;

/// Token store writing one key in `localStorage`.
#[derive(Clone, Debug)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for LocalTokenStore {
    fn default() -> Self {
        Self::new(TOKEN_STORAGE_KEY)
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    let Some(window) = web_sys::window() else {
        log::warn!("localStorage unavailable: no window");
        return None;
    };
    match window.local_storage() {
        Ok(Some(storage)) => Some(storage),
        Ok(None) => {
            log::warn!("localStorage unavailable: disabled");
            None
        }
        Err(e) => {
            log::warn!("localStorage unavailable: {e:?}");
            None
        }
    }
}

impl TokenStore for LocalTokenStore {
    fn save(&self, credential: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(e) = storage.set_item(&self.key, credential) {
                log::warn!("failed to persist token: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credential;
        }
    }

    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            match storage.get_item(&self.key) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("failed to read token: {e:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(e) = storage.remove_item(&self.key) {
                log::warn!("failed to clear token: {e:?}");
            }
        }
    }
}
