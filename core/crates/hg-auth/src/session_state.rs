use hg_core::Identity;

/// Published by `AuthSessionManager` on every change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub is_authenticated: bool,
    /// A persisted session exists but must pass a biometric challenge first
    pub requires_biometric_auth: bool,
    pub is_loading: bool,
}
