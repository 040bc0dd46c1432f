use crate::{BiometricError, BiometricResult};

use hg_core::BiometricKind;

use async_trait::async_trait;

/// Device biometric facility.
///
/// `evaluate` shows a single system prompt and resolves once the user
/// finishes it. Implementations report failures as `UserCancelled`,
/// `NotEnrolled`, `LockedOut` or `SystemError`.
#[async_trait]
pub trait BiometricPlatform: Send + Sync {
    fn capability(&self) -> BiometricKind;

    /// At least one credential is enrolled for `capability()`.
    fn can_evaluate(&self) -> bool;

    async fn evaluate(&self, reason: &str) -> BiometricResult<()>;
}

/// Platform for hosts without biometric hardware.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedPlatform;

#[async_trait]
impl BiometricPlatform for UnsupportedPlatform {
    fn capability(&self) -> BiometricKind {
        BiometricKind::None
    }

    fn can_evaluate(&self) -> bool {
        false
    }

    async fn evaluate(&self, _reason: &str) -> BiometricResult<()> {
        Err(BiometricError::not_available())
    }
}
