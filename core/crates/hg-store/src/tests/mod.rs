mod legacy_layout;

use crate::{KeyValueStore, MemoryStore, PersistError, Result as PersistResult};

use hg_core::UserProfile;

use std::collections::HashSet;
use std::sync::Mutex;

use serde_json::Value;

/// MemoryStore wrapper that fails writes to selected keys.
pub(crate) struct FlakyStore {
    inner: MemoryStore,
    failing_sets: Mutex<HashSet<String>>,
    failing_removes: Mutex<HashSet<String>>,
}

impl FlakyStore {
    pub(crate) fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            failing_sets: Mutex::new(HashSet::new()),
            failing_removes: Mutex::new(HashSet::new()),
        }
    }

    pub(crate) fn fail_set(&self, key: &str) {
        self.failing_sets.lock().unwrap().insert(key.to_string());
    }

    pub(crate) fn fail_remove(&self, key: &str) {
        self.failing_removes.lock().unwrap().insert(key.to_string());
    }

    pub(crate) fn heal(&self) {
        self.failing_sets.lock().unwrap().clear();
        self.failing_removes.lock().unwrap().clear();
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> PersistResult<Option<Value>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: Value) -> PersistResult<()> {
        if self.failing_sets.lock().unwrap().contains(key) {
            return Err(PersistError::write(key, "injected write failure"));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> PersistResult<()> {
        if self.failing_removes.lock().unwrap().contains(key) {
            return Err(PersistError::write(key, "injected remove failure"));
        }
        self.inner.remove(key)
    }

    fn keys(&self) -> PersistResult<Vec<String>> {
        self.inner.keys()
    }
}

pub(crate) fn complete_profile() -> UserProfile {
    UserProfile {
        age: Some(34),
        height_feet: Some(5),
        height_inches: Some(9),
        weight: Some(162.4),
        blood_sugar: Some(98.0),
        cholesterol_total: Some(185.0),
        cholesterol_hdl: Some(60.0),
        cholesterol_ldl: Some(105.5),
        is_completed: true,
    }
}
