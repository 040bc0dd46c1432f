use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Biometric modality offered by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BiometricKind {
    /// No biometric hardware, or the platform does not expose it
    #[default]
    None,
    Face,
    Fingerprint,
    Iris,
}

impl BiometricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Face => "face",
            Self::Fingerprint => "fingerprint",
            Self::Iris => "iris",
        }
    }

    /// Name shown in prompts ("Unlock with Face ID"-style copy).
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "Passcode",
            Self::Face => "Face Recognition",
            Self::Fingerprint => "Fingerprint",
            Self::Iris => "Iris Scan",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl FromStr for BiometricKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "none" => Ok(Self::None),
            "face" => Ok(Self::Face),
            "fingerprint" => Ok(Self::Fingerprint),
            "iris" => Ok(Self::Iris),
            _ => Err(CoreError::InvalidBiometricKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for BiometricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
