mod biometric_kind;
mod credentials;
mod user_profile;
