use serde::Serialize;

/// Outcome of a `ProfileStore::save` that persisted at least one layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SaveReport {
    pub structured_written: bool,
    /// Legacy keys whose write or removal failed. Empty when the legacy
    /// layout is current. When the structured write failed, keys of absent
    /// fields are removed as well, so the legacy layout alone reads back as
    /// the saved profile.
    pub failed_legacy_keys: Vec<&'static str>,
}

impl SaveReport {
    pub fn legacy_written(&self) -> bool {
        self.failed_legacy_keys.is_empty()
    }

    /// Both layouts reflect the saved profile.
    pub fn is_complete(&self) -> bool {
        self.structured_written && self.legacy_written()
    }
}
