use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why a biometric challenge did not succeed. None of these are fatal; the
/// caller falls back to password sign-in.
#[derive(Error, Debug)]
pub enum BiometricError {
    #[error("Biometric authentication is not available on this device {location}")]
    NotAvailable { location: ErrorLocation },

    #[error("No biometric credential is enrolled {location}")]
    NotEnrolled { location: ErrorLocation },

    #[error("Biometric challenge cancelled by the user {location}")]
    UserCancelled { location: ErrorLocation },

    #[error("Biometric authentication locked out after too many attempts {location}")]
    LockedOut { location: ErrorLocation },

    #[error("A biometric challenge is already in progress {location}")]
    AlreadyInProgress { location: ErrorLocation },

    #[error("No signed-in session is waiting for biometric unlock {location}")]
    NoHeldSession { location: ErrorLocation },

    #[error("Biometric system error: {message} {location}")]
    SystemError {
        message: String,
        location: ErrorLocation,
    },
}

impl BiometricError {
    #[track_caller]
    pub fn not_available() -> Self {
        Self::NotAvailable {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_enrolled() -> Self {
        Self::NotEnrolled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn user_cancelled() -> Self {
        Self::UserCancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn locked_out() -> Self {
        Self::LockedOut {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn already_in_progress() -> Self {
        Self::AlreadyInProgress {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_held_session() -> Self {
        Self::NoHeldSession {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn system(message: impl Into<String>) -> Self {
        Self::SystemError {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_user_initiated(&self) -> bool {
        matches!(self, Self::UserCancelled { .. })
    }

    /// User-facing text for the password fallback.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::NotAvailable { .. } => {
                "This device does not support biometric unlock. Sign in with your password."
            }
            Self::NotEnrolled { .. } => {
                "Set up a face or fingerprint in your device settings, or sign in with your password."
            }
            Self::UserCancelled { .. } => "Biometric unlock was cancelled. Sign in with your password.",
            Self::LockedOut { .. } => {
                "Biometric unlock is locked after too many attempts. Sign in with your password."
            }
            Self::AlreadyInProgress { .. } => "Finish the biometric prompt that is already open.",
            Self::NoHeldSession { .. } => "Sign in with your email and password.",
            Self::SystemError { .. } => {
                "Biometric unlock is unavailable right now. Sign in with your password."
            }
        }
    }
}

pub type BiometricResult<T> = StdResult<T, BiometricError>;
