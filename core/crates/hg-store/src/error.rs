use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised while encoding, writing or decoding persisted state.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Failed to encode '{key}': {message} {location}")]
    Encode {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to write '{key}': {message} {location}")]
    Write {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to decode '{key}': {message} {location}")]
    Decode {
        key: String,
        message: String,
        location: ErrorLocation,
    },
}

impl PersistError {
    /// Whether this error is recoverable via retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Write { .. })
    }

    /// Key (or file) the failure relates to.
    pub fn key(&self) -> &str {
        match self {
            Self::Encode { key, .. } | Self::Write { key, .. } | Self::Decode { key, .. } => key,
        }
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::Encode { .. } => {
                "Some profile values are out of range. \
                   Check the entered measurements and try again."
            }
            Self::Write { .. } => {
                "Unable to save to the application data directory. \
                   Check disk space and file permissions."
            }
            Self::Decode { .. } => {
                "Stored data could not be read. \
                   Previously saved values may need to be re-entered."
            }
        }
    }

    /// Creates Encode error at caller location.
    #[track_caller]
    pub fn encode(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Encode {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Write error at caller location.
    #[track_caller]
    pub fn write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Write {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Decode error at caller location.
    #[track_caller]
    pub fn decode(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PersistError>;
