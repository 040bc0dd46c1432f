use crate::{BiometricError, BiometricPlatform, BiometricResult, BiometricSettings};

use hg_core::{BiometricCapability, BiometricKind};
use hg_store::BiometricPreference;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use log::{debug, info, warn};

const ENROLL_PERSIST_FAILED: &str = "Biometric unlock could not be saved. Try enabling it again.";

/// Mediates device biometrics: capability checks, single challenges, and the
/// user's opt-in preference.
///
/// At most one challenge is in flight at a time. Overlapping calls are
/// rejected, never queued, so system prompts cannot stack.
pub struct BiometricGate {
    platform: Arc<dyn BiometricPlatform>,
    preference: Arc<BiometricPreference>,
    settings: BiometricSettings,
    in_flight: AtomicBool,
    last_error: RwLock<Option<String>>,
}

impl BiometricGate {
    pub fn new(
        platform: Arc<dyn BiometricPlatform>,
        preference: Arc<BiometricPreference>,
        settings: BiometricSettings,
    ) -> Self {
        Self {
            platform,
            preference,
            settings,
            in_flight: AtomicBool::new(false),
            last_error: RwLock::new(None),
        }
    }

    /// Never fails; missing hardware or enrollment shows up in the result.
    pub fn query_capability(&self) -> BiometricCapability {
        BiometricCapability::new(self.platform.capability(), self.platform.can_evaluate())
    }

    /// Runs one platform challenge with `reason` as the prompt text.
    ///
    /// Cancelling the returned future releases the gate.
    pub async fn evaluate(&self, reason: &str) -> BiometricResult<()> {
        let capability = self.query_capability();
        match capability.kind {
            BiometricKind::None => return Err(BiometricError::not_available()),
            BiometricKind::Face | BiometricKind::Fingerprint | BiometricKind::Iris => {
                if !capability.can_evaluate {
                    return Err(BiometricError::not_enrolled());
                }
            }
        }

        let Some(_in_flight) = InFlightGuard::acquire(&self.in_flight) else {
            debug!("Rejecting overlapping biometric challenge");
            return Err(BiometricError::already_in_progress());
        };

        debug!("Starting {} challenge", capability.kind);
        let timeout = self.settings.evaluate_timeout;
        match tokio::time::timeout(timeout, self.platform.evaluate(reason)).await {
            Ok(result) => result,
            Err(_) => Err(BiometricError::system(format!(
                "challenge did not finish within {}s",
                timeout.as_secs()
            ))),
        }
    }

    /// Challenge prompting the user to unlock an existing session.
    pub async fn unlock(&self) -> BiometricResult<()> {
        self.evaluate(&self.settings.unlock_reason).await
    }

    /// Opts the user into biometric unlock after a successful challenge.
    ///
    /// `Ok(false)` means the challenge passed but the preference could not
    /// be persisted; `last_error` says so.
    pub async fn enroll(&self) -> BiometricResult<bool> {
        if let Err(e) = self.evaluate(&self.settings.enroll_reason).await {
            warn!("Biometric enrollment failed: {e}");
            self.set_last_error(Some(e.recovery_hint().to_string()));
            return Err(e);
        }

        if let Err(e) = self.preference.set(true).await {
            warn!("Biometric enrollment passed but was not persisted: {e}");
            self.set_last_error(Some(ENROLL_PERSIST_FAILED.to_string()));
            return Ok(false);
        }

        self.set_last_error(None);
        info!("Biometric unlock enrolled");
        Ok(true)
    }

    /// Opts out. No challenge required.
    pub async fn disable(&self) {
        if let Err(e) = self.preference.set(false).await {
            warn!("Biometric preference not persisted, disabled for this run only: {e}");
        }
        self.set_last_error(None);
    }

    pub fn is_enabled(&self) -> bool {
        self.preference.is_enabled()
    }

    pub fn is_evaluating(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error
            .read()
            .map(|last_error| last_error.clone())
            .unwrap_or_default()
    }

    pub fn settings(&self) -> &BiometricSettings {
        &self.settings
    }

    fn set_last_error(&self, message: Option<String>) {
        match self.last_error.write() {
            Ok(mut last_error) => *last_error = message,
            Err(e) => warn!("Biometric error slot poisoned: {e}"),
        }
    }
}

/// Holds the in-flight flag; dropping it (including on cancellation) clears it.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
