use crate::BiometricKind;

use serde::Serialize;

/// Snapshot of what the device can do right now. Recomputed on every query,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct BiometricCapability {
    pub kind: BiometricKind,
    /// Hardware is present AND at least one credential is enrolled.
    pub can_evaluate: bool,
}

impl BiometricCapability {
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn new(kind: BiometricKind, can_evaluate: bool) -> Self {
        // A missing modality can never be evaluated, whatever the platform says.
        Self {
            kind,
            can_evaluate: kind.is_supported() && can_evaluate,
        }
    }

    /// Hardware present but nothing enrolled.
    pub fn needs_enrollment(&self) -> bool {
        self.kind.is_supported() && !self.can_evaluate
    }
}
