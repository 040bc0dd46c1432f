use crate::Result as PersistResult;

use serde_json::Value;

/// Durable string-keyed storage of JSON values.
///
/// Writes are full-value replacements; concurrent writers to the same key
/// resolve last-writer-wins. Calls may block on I/O, so async callers run
/// them on the blocking pool.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> PersistResult<Option<Value>>;

    fn set(&self, key: &str, value: Value) -> PersistResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> PersistResult<()>;

    fn keys(&self) -> PersistResult<Vec<String>>;
}
