use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ENROLL_REASON, DEFAULT_EVALUATE_TIMEOUT_SECS,
    DEFAULT_UNLOCK_REASON, MAX_EVALUATE_TIMEOUT_SECS, MIN_EVALUATE_TIMEOUT_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BiometricConfig {
    /// Prompt shown when unlocking a resumed session
    pub unlock_reason: String,
    /// Prompt shown when opting in to biometric unlock
    pub enroll_reason: String,
    /// Upper bound on a single platform challenge
    pub evaluate_timeout_secs: u64,
}

impl Default for BiometricConfig {
    fn default() -> Self {
        Self {
            unlock_reason: String::from(DEFAULT_UNLOCK_REASON),
            enroll_reason: String::from(DEFAULT_ENROLL_REASON),
            evaluate_timeout_secs: DEFAULT_EVALUATE_TIMEOUT_SECS,
        }
    }
}

impl BiometricConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.unlock_reason.trim().is_empty() {
            return Err(ConfigError::biometric(
                "biometric.unlock_reason cannot be empty",
            ));
        }

        if self.enroll_reason.trim().is_empty() {
            return Err(ConfigError::biometric(
                "biometric.enroll_reason cannot be empty",
            ));
        }

        if !(MIN_EVALUATE_TIMEOUT_SECS..=MAX_EVALUATE_TIMEOUT_SECS)
            .contains(&self.evaluate_timeout_secs)
        {
            return Err(ConfigError::biometric(format!(
                "biometric.evaluate_timeout_secs must be between {} and {}, got {}",
                MIN_EVALUATE_TIMEOUT_SECS, MAX_EVALUATE_TIMEOUT_SECS, self.evaluate_timeout_secs
            )));
        }

        Ok(())
    }
}
