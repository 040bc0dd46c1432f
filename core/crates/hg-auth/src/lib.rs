pub mod auth_session_manager;
pub mod biometric_error;
pub mod biometric_gate;
pub mod biometric_platform;
pub mod biometric_settings;
pub mod error;
pub mod identity_provider;
pub mod session_state;

pub use auth_session_manager::AuthSessionManager;
pub use biometric_error::{BiometricError, BiometricResult};
pub use biometric_gate::BiometricGate;
pub use biometric_platform::{BiometricPlatform, UnsupportedPlatform};
pub use biometric_settings::BiometricSettings;
pub use error::{AuthError, Result};
pub use identity_provider::{IdentityProvider, OfflineIdentityProvider};
pub use session_state::SessionState;

#[cfg(test)]
mod tests;
