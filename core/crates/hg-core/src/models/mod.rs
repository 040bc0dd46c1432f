pub mod biometric_capability;
pub mod biometric_kind;
pub mod credentials;
pub mod identity;
pub mod user_profile;
