use crate::{AuthError, Result as AuthErrorResult};

use hg_core::{Credentials, Identity};

use async_trait::async_trait;

/// Remote identity service. Transport and wire format are the
/// implementation's business.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> AuthErrorResult<Identity>;

    async fn sign_up(&self, credentials: &Credentials) -> AuthErrorResult<Identity>;

    /// Session persisted by the provider from an earlier launch, if any.
    async fn current_identity(&self) -> Option<Identity>;

    async fn sign_out(&self) -> AuthErrorResult<()>;
}

/// Provider used when no identity service is configured: there is never a
/// session and every sign-in attempt fails as unreachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineIdentityProvider;

#[async_trait]
impl IdentityProvider for OfflineIdentityProvider {
    async fn sign_in(&self, _credentials: &Credentials) -> AuthErrorResult<Identity> {
        Err(AuthError::network("no identity provider configured"))
    }

    async fn sign_up(&self, _credentials: &Credentials) -> AuthErrorResult<Identity> {
        Err(AuthError::network("no identity provider configured"))
    }

    async fn current_identity(&self) -> Option<Identity> {
        None
    }

    async fn sign_out(&self) -> AuthErrorResult<()> {
        Ok(())
    }
}
