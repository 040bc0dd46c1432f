use crate::{KeyValueStore, PersistError, Result as PersistResult};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use log::{debug, info, warn};
use serde_json::{Map, Value};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Key-value store backed by a single JSON document.
///
/// The whole document is cached in memory. Every mutation rewrites it with
/// the atomic write pattern:
///
/// 1. Writes to temp file
/// 2. Syncs to disk (fsync)
/// 3. Atomic rename to final location
///
/// so a crash mid-write leaves the previous document intact. Mutations are
/// serialized by a writer mutex; reads only take the shared cache lock.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<Map<String, Value>>,
    writer: Mutex<()>,
}

impl FileStore {
    /// Opens the document at `path`, creating parent directories as needed.
    ///
    /// - missing file: empty store (first launch)
    /// - unparseable file: backed up to `<file>.corrupted.<timestamp>`, empty store
    pub fn open(path: impl Into<PathBuf>) -> PersistResult<Self> {
        let path = path.into();
        let display = path.display().to_string();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                PersistError::write(&display, format!("cannot create directory: {e}"))
            })?;
        }

        let entries = if path.exists() {
            let contents = fs::read_to_string(&path)
                .map_err(|e| PersistError::decode(&display, format!("cannot read file: {e}")))?;

            match serde_json::from_str::<Map<String, Value>>(&contents) {
                Ok(entries) => {
                    info!("Opened store {path:?} ({} keys)", entries.len());
                    entries
                }
                Err(e) => {
                    warn!("Store document corrupted at {path:?}: {e}");
                    let backup = Self::backup_corrupted(&path)?;
                    warn!("Backed up corrupted store to {backup:?}, starting empty");
                    Map::new()
                }
            }
        } else {
            info!("No store at {path:?} (first launch)");
            Map::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
            writer: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renames a corrupted document out of the way for later inspection.
    fn backup_corrupted(path: &Path) -> PersistResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("store.json"));
        let backup_path = path.with_file_name(format!("{file_name}.corrupted.{timestamp}"));

        fs::rename(path, &backup_path).map_err(|e| {
            PersistError::write(
                path.display().to_string(),
                format!("cannot back up corrupted file: {e}"),
            )
        })?;

        Ok(backup_path)
    }

    /// Applies `change` to a copy of the document, persists it, then swaps
    /// it into the cache. The cache only changes once the disk write landed.
    fn mutate(&self, key: &str, change: impl FnOnce(&mut Map<String, Value>)) -> PersistResult<()> {
        let _writer = self
            .writer
            .lock()
            .map_err(|_| PersistError::write(key, "store writer lock poisoned"))?;

        let mut next = self
            .entries
            .read()
            .map_err(|_| PersistError::write(key, "store cache lock poisoned"))?
            .clone();
        change(&mut next);

        self.persist(key, &next)?;

        *self
            .entries
            .write()
            .map_err(|_| PersistError::write(key, "store cache lock poisoned"))? = next;

        debug!("Persisted '{key}' to {:?}", self.path);
        Ok(())
    }

    fn persist(&self, key: &str, entries: &Map<String, Value>) -> PersistResult<()> {
        // Pretty printing for debuggability
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| PersistError::encode(key, e.to_string()))?;

        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("store.json"));
        let temp_path = self
            .path
            .with_file_name(format!("{file_name}.tmp.{}", std::process::id()));

        let write_temp = || -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()
        };

        if let Err(e) = write_temp() {
            let _ = fs::remove_file(&temp_path);
            return Err(PersistError::write(
                key,
                format!("cannot write {}: {e}", temp_path.display()),
            ));
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            // Clean up temp file on failure
            let _ = fs::remove_file(&temp_path);
            PersistError::write(
                key,
                format!(
                    "atomic rename {} -> {} failed: {e}",
                    temp_path.display(),
                    self.path.display()
                ),
            )
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> PersistResult<Option<Value>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| PersistError::decode(key, "store cache lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> PersistResult<()> {
        self.mutate(key, |entries| {
            entries.insert(key.to_string(), value);
        })
    }

    fn remove(&self, key: &str) -> PersistResult<()> {
        let present = self.get(key)?.is_some();
        if !present {
            return Ok(());
        }

        self.mutate(key, |entries| {
            entries.remove(key);
        })
    }

    fn keys(&self) -> PersistResult<Vec<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| PersistError::decode("*", "store cache lock poisoned"))?;
        Ok(entries.keys().cloned().collect())
    }
}
