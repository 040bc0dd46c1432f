use crate::keys::BIOMETRIC_ENABLED_KEY;
use crate::{KeyValueStore, PersistError, Result as PersistResult};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{info, warn};
use serde_json::Value;
use tokio::sync::Mutex;

/// Persisted "user opted into biometric unlock" flag with an in-memory cache.
///
/// The flag is stored on its own key, independent of the profile. A missing
/// or malformed stored value reads as disabled.
pub struct BiometricPreference {
    store: Arc<dyn KeyValueStore>,
    enabled: AtomicBool,
    writer: Mutex<()>,
}

impl BiometricPreference {
    /// The cache starts disabled until `load` runs.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            enabled: AtomicBool::new(false),
            writer: Mutex::new(()),
        }
    }

    /// Cached value; no I/O.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Reads the persisted flag into the cache.
    pub async fn load(&self) -> bool {
        let store = Arc::clone(&self.store);
        let stored = tokio::task::spawn_blocking(move || store.get(BIOMETRIC_ENABLED_KEY))
            .await
            .map_err(|e| PersistError::decode(BIOMETRIC_ENABLED_KEY, e.to_string()))
            .and_then(|result| result);

        let enabled = match stored {
            Ok(Some(Value::Bool(enabled))) => enabled,
            Ok(Some(other)) => {
                warn!("'{BIOMETRIC_ENABLED_KEY}' holds {other}, treating as disabled");
                false
            }
            Ok(None) => false,
            Err(e) => {
                warn!("Biometric preference unreadable, treating as disabled: {e}");
                false
            }
        };

        self.enabled.store(enabled, Ordering::SeqCst);
        enabled
    }

    /// Persists the flag. Enabling only takes effect in memory once it is
    /// on disk; disabling takes effect in memory even if the write fails.
    pub async fn set(&self, enabled: bool) -> PersistResult<()> {
        let _writer = self.writer.lock().await;

        if !enabled {
            self.enabled.store(false, Ordering::SeqCst);
        }

        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.set(BIOMETRIC_ENABLED_KEY, Value::Bool(enabled)))
            .await
            .map_err(|e| PersistError::write(BIOMETRIC_ENABLED_KEY, e.to_string()))??;

        self.enabled.store(enabled, Ordering::SeqCst);
        info!(
            "Biometric unlock {}",
            if enabled { "enabled" } else { "disabled" }
        );
        Ok(())
    }
}
