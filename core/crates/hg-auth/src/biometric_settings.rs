use std::time::Duration;

pub const DEFAULT_UNLOCK_REASON: &str = "Unlock your health profile";
pub const DEFAULT_ENROLL_REASON: &str = "Enable biometric unlock";
pub const DEFAULT_EVALUATE_TIMEOUT: Duration = Duration::from_secs(60);

/// Prompt copy and the safeguard timeout for platform challenges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiometricSettings {
    pub unlock_reason: String,
    pub enroll_reason: String,
    /// Upper bound on a single platform challenge
    pub evaluate_timeout: Duration,
}

impl Default for BiometricSettings {
    fn default() -> Self {
        Self {
            unlock_reason: DEFAULT_UNLOCK_REASON.to_string(),
            enroll_reason: DEFAULT_ENROLL_REASON.to_string(),
            evaluate_timeout: DEFAULT_EVALUATE_TIMEOUT,
        }
    }
}
