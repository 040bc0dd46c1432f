use crate::{KeyValueStore, PersistError, Result as PersistResult};

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

/// In-process store. Nothing survives the process; used by tests and
/// ephemeral contexts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[track_caller]
    fn read(&self, key: &str) -> PersistResult<RwLockReadGuard<'_, BTreeMap<String, Value>>> {
        self.entries
            .read()
            .map_err(|_| PersistError::decode(key, "memory store lock poisoned"))
    }

    #[track_caller]
    fn write(&self, key: &str) -> PersistResult<RwLockWriteGuard<'_, BTreeMap<String, Value>>> {
        self.entries
            .write()
            .map_err(|_| PersistError::write(key, "memory store lock poisoned"))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PersistResult<Option<Value>> {
        Ok(self.read(key)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> PersistResult<()> {
        self.write(key)?.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> PersistResult<()> {
        self.write(key)?.remove(key);
        Ok(())
    }

    fn keys(&self) -> PersistResult<Vec<String>> {
        Ok(self.read("*")?.keys().cloned().collect())
    }
}
