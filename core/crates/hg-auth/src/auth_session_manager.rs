use crate::{
    AuthError, BiometricError, BiometricGate, BiometricResult, IdentityProvider,
    Result as AuthErrorResult, SessionState,
};

use hg_core::{Credentials, Identity};
use hg_store::BiometricPreference;

use std::fmt;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{Mutex, watch};

/// Owns the remote identity session and decides whether a biometric
/// challenge stands between a persisted session and the app.
///
/// State-mutating operations are serialized. `login_with_biometrics` refuses
/// to queue behind another mutation so a second prompt never stacks up.
pub struct AuthSessionManager {
    provider: Arc<dyn IdentityProvider>,
    gate: Arc<BiometricGate>,
    preference: Arc<BiometricPreference>,
    state: watch::Sender<SessionState>,
    mutation: Mutex<()>,
}

impl AuthSessionManager {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        gate: Arc<BiometricGate>,
        preference: Arc<BiometricPreference>,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            provider,
            gate,
            preference,
            state,
            mutation: Mutex::new(()),
        }
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> AuthErrorResult<Identity> {
        self.authenticate(credentials, CredentialFlow::SignIn).await
    }

    pub async fn sign_up(&self, credentials: &Credentials) -> AuthErrorResult<Identity> {
        self.authenticate(credentials, CredentialFlow::SignUp).await
    }

    /// Restores the provider's persisted session at launch. With biometric
    /// unlock enabled the session is held back until a challenge passes.
    pub async fn resume_session(&self) {
        let _mutation = self.mutation.lock().await;
        let _loading = LoadingGuard::start(&self.state);

        let biometric_enabled = self.preference.load().await;
        let identity = self.provider.current_identity().await;

        match identity {
            Some(identity) if biometric_enabled => {
                info!("Resumed session for {}, biometric unlock required", identity.id);
                self.state.send_modify(|state| {
                    state.identity = Some(identity);
                    state.is_authenticated = false;
                    state.requires_biometric_auth = true;
                });
            }
            Some(identity) => {
                info!("Resumed session for {}", identity.id);
                self.state.send_modify(|state| {
                    state.identity = Some(identity);
                    state.is_authenticated = true;
                    state.requires_biometric_auth = false;
                });
            }
            None => {
                debug!("No persisted session");
                self.state.send_modify(clear_session);
            }
        }
    }

    /// Unlocks the held-back session with a biometric challenge. Only a
    /// session restored by `resume_session` for an opted-in user can be
    /// unlocked; anything else is rejected before the device is asked. On
    /// failure the state is left as it was.
    pub async fn login_with_biometrics(&self) -> BiometricResult<()> {
        let Ok(_mutation) = self.mutation.try_lock() else {
            debug!("Biometric login rejected, another session operation is running");
            return Err(BiometricError::already_in_progress());
        };

        let held = {
            let state = self.state.borrow();
            state.requires_biometric_auth && state.identity.is_some()
        };
        if !held {
            warn!("Biometric login rejected, no session is waiting for unlock");
            return Err(BiometricError::no_held_session());
        }

        let _loading = LoadingGuard::start(&self.state);

        if let Err(e) = self.gate.unlock().await {
            warn!("Biometric login failed: {e}");
            return Err(e);
        }

        self.state.send_modify(|state| {
            state.is_authenticated = true;
            state.requires_biometric_auth = false;
        });
        info!("Biometric login succeeded");
        Ok(())
    }

    /// Ends the session. The biometric preference is left alone.
    pub async fn sign_out(&self) {
        let _mutation = self.mutation.lock().await;

        if let Err(e) = self.provider.sign_out().await {
            warn!("Provider sign-out failed, clearing local session anyway: {e}");
        }
        self.state.send_modify(clear_session);
        info!("Signed out");
    }

    pub async fn enable_biometrics(&self) -> BiometricResult<bool> {
        self.gate.enroll().await
    }

    pub async fn disable_biometrics(&self) {
        self.gate.disable().await
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.borrow().identity.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    pub fn requires_biometric_auth(&self) -> bool {
        self.state.borrow().requires_biometric_auth
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn gate(&self) -> &Arc<BiometricGate> {
        &self.gate
    }

    async fn authenticate(
        &self,
        credentials: &Credentials,
        flow: CredentialFlow,
    ) -> AuthErrorResult<Identity> {
        credentials
            .validate()
            .map_err(|e| {
                debug!(
                    "{flow} rejected before reaching the provider, invalid {}",
                    e.field().unwrap_or("input")
                );
                AuthError::invalid_credentials(e.to_string())
            })?;

        let _mutation = self.mutation.lock().await;
        let _loading = LoadingGuard::start(&self.state);

        let result = match flow {
            CredentialFlow::SignIn => self.provider.sign_in(credentials).await,
            CredentialFlow::SignUp => self.provider.sign_up(credentials).await,
        };
        let identity = match result {
            Ok(identity) => identity,
            Err(e) => {
                warn!("{flow} failed: {e}");
                return Err(e);
            }
        };

        // A fresh credential sign-in already proved identity.
        self.state.send_modify(|state| {
            state.identity = Some(identity.clone());
            state.is_authenticated = true;
            state.requires_biometric_auth = false;
        });
        info!("{flow} succeeded for {}", identity.id);
        Ok(identity)
    }
}

#[derive(Debug, Clone, Copy)]
enum CredentialFlow {
    SignIn,
    SignUp,
}

impl fmt::Display for CredentialFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignIn => write!(f, "Sign-in"),
            Self::SignUp => write!(f, "Sign-up"),
        }
    }
}

fn clear_session(state: &mut SessionState) {
    state.identity = None;
    state.is_authenticated = false;
    state.requires_biometric_auth = false;
}

/// Raises `is_loading` for its lifetime. Dropping it on any exit path,
/// cancellation included, lowers the flag again.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<SessionState>,
}

impl<'a> LoadingGuard<'a> {
    fn start(state: &'a watch::Sender<SessionState>) -> Self {
        state.send_modify(|state| state.is_loading = true);
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|state| state.is_loading = false);
    }
}
