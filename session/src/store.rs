//! Credential persistence.
//!
//! DESIGN
//! ======
//! A store is plain byte storage under one fixed key. It never inspects the
//! credential; decoding and expiry live in `claims`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key used when none is configured.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Durable key-value slot holding the raw bearer credential.
///
/// Methods take `&self` because the backing storage (browser `localStorage`)
/// is itself shared and interior-mutable.
pub trait TokenStore {
    /// Persist `credential`, replacing any previous value.
    fn save(&self, credential: &str);

    /// Read the stored credential, if any.
    fn load(&self) -> Option<String>;

    /// Remove the stored credential. Removing an absent key is a no-op.
    fn clear(&self);
}

/// In-process store backed by a shared map.
///
/// Clones share the same map, so two sessions built over clones of one store
/// observe each other's writes, which is how a page reload is simulated.
#[derive(Clone, Debug)]
pub struct MemoryTokenStore {
    key: String,
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryTokenStore {
    /// Empty store using [`DEFAULT_TOKEN_KEY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_key(DEFAULT_TOKEN_KEY)
    }

    /// Empty store writing under `key`.
    #[must_use]
    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into(), entries: Rc::new(RefCell::new(HashMap::new())) }
    }

    /// Store pre-seeded with `credential`, as if left over from an earlier visit.
    #[must_use]
    pub fn seeded(credential: &str) -> Self {
        let store = Self::new();
        store.save(credential);
        store
    }

    /// The key this store writes under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw lookup of any key in the shared map.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl Default for MemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, credential: &str) {
        self.entries
            .borrow_mut()
            .insert(self.key.clone(), credential.to_owned());
    }

    fn load(&self) -> Option<String> {
        self.get(&self.key)
    }

    fn clear(&self) {
        self.entries.borrow_mut().remove(&self.key);
    }
}
