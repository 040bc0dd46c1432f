use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials: {message} {location}")]
    InvalidCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity provider unreachable: {message} {location}")]
    NetworkFailure {
        message: String,
        location: ErrorLocation,
    },

    #[error("Account already exists for '{email}' {location}")]
    AccountExists {
        email: String,
        location: ErrorLocation,
    },

    #[error("Authentication failed: {message} {location}")]
    Unknown {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkFailure {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn account_exists(email: impl Into<String>) -> Self {
        Self::AccountExists {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Worth offering the user a retry without changing their input.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NetworkFailure { .. })
    }
}

pub type Result<T> = StdResult<T, AuthError>;
