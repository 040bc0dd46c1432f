use crate::keys::{PROFILE_CLEARED_KEY, PROFILE_RECORD_KEY};
use crate::{
    KeyValueStore, PersistError, ProfileRecord, Result as PersistResult, SaveReport,
    legacy_layout,
};

use hg_core::UserProfile;

use std::sync::Arc;

use log::{debug, error, info, warn};
use serde_json::Value;
use tokio::sync::{Mutex, watch};

/// Owner of the user's health profile and both of its persisted layouts.
///
/// Load policy is two-phase: the structured record wins whenever it is
/// present and decodable, otherwise the legacy keys are assembled field by
/// field. Nothing is ever merged between the two, and legacy data is never
/// rewritten into the structured layout except by an explicit `save`.
///
/// Storage calls run on tokio's blocking pool. Mutations are serialized, and
/// the current profile is published on a watch channel so observers see
/// every change.
pub struct ProfileStore {
    store: Arc<dyn KeyValueStore>,
    profile: watch::Sender<UserProfile>,
    mutation: Mutex<()>,
}

impl ProfileStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let (profile, _) = watch::channel(UserProfile::default());
        Self {
            store,
            profile,
            mutation: Mutex::new(()),
        }
    }

    /// Snapshot of the in-memory profile.
    pub fn profile(&self) -> UserProfile {
        self.profile.borrow().clone()
    }

    pub fn is_completed(&self) -> bool {
        self.profile.borrow().is_completed
    }

    pub fn subscribe(&self) -> watch::Receiver<UserProfile> {
        self.profile.subscribe()
    }

    /// Persists `profile` to both layouts.
    ///
    /// Each layout is attempted regardless of the other's outcome. Succeeds
    /// when at least one layout was fully written, with the report naming
    /// anything that failed; errors only when neither was. Invalid profiles
    /// are rejected before anything is written.
    pub async fn save(&self, profile: UserProfile) -> PersistResult<SaveReport> {
        profile
            .validate()
            .map_err(|e| PersistError::encode(PROFILE_RECORD_KEY, e.to_string()))?;

        let _mutation = self.mutation.lock().await;

        let store = Arc::clone(&self.store);
        let to_write = profile.clone();
        let (structured, legacy_failures) =
            tokio::task::spawn_blocking(move || write_layouts(store.as_ref(), &to_write))
                .await
                .map_err(|e| {
                    PersistError::write(PROFILE_RECORD_KEY, format!("save task failed: {e}"))
                })?;

        for (key, e) in &legacy_failures {
            warn!("Legacy write of '{key}' failed: {e}");
        }

        let report = SaveReport {
            structured_written: structured.is_ok(),
            failed_legacy_keys: legacy_failures.iter().map(|(key, _)| *key).collect(),
        };

        if let Err(e) = structured {
            if !report.legacy_written() {
                error!("Profile save failed in both layouts: {e}");
                return Err(e);
            }
            warn!("Structured profile write failed, legacy layout holds the profile: {e}");
        }

        info!(
            "Saved profile (completed: {}, structured: {}, legacy: {})",
            profile.is_completed,
            report.structured_written,
            report.legacy_written()
        );
        self.profile.send_replace(profile);

        Ok(report)
    }

    /// Loads the profile and publishes it. Never fails: undecodable data
    /// degrades to the legacy layout, and that degrades to an empty profile.
    pub async fn load(&self) -> UserProfile {
        let _mutation = self.mutation.lock().await;

        let store = Arc::clone(&self.store);
        let profile = match tokio::task::spawn_blocking(move || read_layouts(store.as_ref())).await
        {
            Ok(profile) => profile,
            Err(e) => {
                error!("Profile load task failed, using empty profile: {e}");
                UserProfile::default()
            }
        };

        self.profile.send_replace(profile.clone());
        profile
    }

    /// Reads only the legacy layout. Diagnostic; does not publish.
    pub async fn load_legacy(&self) -> UserProfile {
        let store = Arc::clone(&self.store);
        match tokio::task::spawn_blocking(move || legacy_layout::read(store.as_ref())).await {
            Ok(profile) => profile,
            Err(e) => {
                error!("Legacy profile read task failed: {e}");
                UserProfile::default()
            }
        }
    }

    /// Logical reset: empties the in-memory profile, drops the structured
    /// record and clears the legacy completion flag. Legacy scalar fields
    /// stay where they are; a cleared marker keeps `load` from reviving them.
    pub async fn clear(&self) {
        let _mutation = self.mutation.lock().await;

        self.profile.send_replace(UserProfile::default());

        let store = Arc::clone(&self.store);
        let outcome = tokio::task::spawn_blocking(move || {
            let marked = store.set(PROFILE_CLEARED_KEY, Value::Bool(true));
            let removed = store.remove(PROFILE_RECORD_KEY);
            let reset = legacy_layout::reset_completion(store.as_ref());
            (marked, removed, reset)
        })
        .await;

        match outcome {
            Ok((marked, removed, reset)) => {
                if let Err(e) = marked {
                    error!("Failed to mark profile as cleared: {e}");
                }
                if let Err(e) = removed {
                    error!("Failed to remove structured profile: {e}");
                }
                if let Err(e) = reset {
                    error!("Failed to reset legacy completion flag: {e}");
                }
                info!("Profile cleared");
            }
            Err(e) => error!("Profile clear task failed: {e}"),
        }
    }
}

fn write_layouts(
    store: &dyn KeyValueStore,
    profile: &UserProfile,
) -> (PersistResult<()>, Vec<(&'static str, PersistError)>) {
    let structured = ProfileRecord::new(profile.clone())
        .encode()
        .and_then(|blob| store.set(PROFILE_RECORD_KEY, blob));

    if structured.is_err()
        && let Err(e) = store.remove(PROFILE_RECORD_KEY)
    {
        // A stale record would shadow the legacy layout on the next load.
        warn!("Could not drop stale structured profile: {e}");
    }

    let mut legacy_failures = legacy_layout::write(store, profile);
    if structured.is_err() {
        // Legacy is now the layout `load` reads; fields cleared since the
        // last save must not come back from it.
        legacy_failures.extend(legacy_layout::remove_absent(store, profile));
    }
    if let Err(e) = store.remove(PROFILE_CLEARED_KEY) {
        legacy_failures.push((PROFILE_CLEARED_KEY, e));
    }

    (structured, legacy_failures)
}

fn read_layouts(store: &dyn KeyValueStore) -> UserProfile {
    match store.get(PROFILE_RECORD_KEY) {
        Ok(Some(value)) => match ProfileRecord::decode(&value) {
            Ok(profile) => {
                debug!("Loaded structured profile");
                return profile;
            }
            Err(e) => warn!("Structured profile undecodable, falling back to legacy layout: {e}"),
        },
        Ok(None) => debug!("No structured profile, falling back to legacy layout"),
        Err(e) => warn!("Structured profile unreadable, falling back to legacy layout: {e}"),
    }

    if let Ok(Some(Value::Bool(true))) = store.get(PROFILE_CLEARED_KEY) {
        debug!("Profile was cleared, ignoring legacy layout");
        return UserProfile::default();
    }

    let profile = legacy_layout::read(store);
    if profile.is_empty() {
        debug!("Legacy layout empty, starting with empty profile");
    } else {
        info!("Loaded profile from legacy layout");
    }
    profile
}
