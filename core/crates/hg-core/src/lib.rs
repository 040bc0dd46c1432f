pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::biometric_capability::BiometricCapability;
pub use models::biometric_kind::BiometricKind;
pub use models::credentials::Credentials;
pub use models::identity::Identity;
pub use models::user_profile::UserProfile;

pub use error_location::ErrorLocation;

/// Upper bound accepted for `UserProfile::age`.
pub const MAX_AGE: u32 = 150;
/// Inches roll over into feet at this value.
pub const INCHES_PER_FOOT: u32 = 12;

#[cfg(test)]
mod tests;
