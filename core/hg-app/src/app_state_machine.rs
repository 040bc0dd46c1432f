use crate::AppState;

use hg_auth::SessionState;
use hg_core::UserProfile;

use log::debug;
use tokio::sync::watch;

/// Derives the screen state from the session and profile channels. Holds
/// no state of its own.
pub struct AppStateMachine {
    session: watch::Receiver<SessionState>,
    profile: watch::Receiver<UserProfile>,
}

impl AppStateMachine {
    pub fn new(
        session: watch::Receiver<SessionState>,
        profile: watch::Receiver<UserProfile>,
    ) -> Self {
        Self { session, profile }
    }

    pub fn current(&self) -> AppState {
        let (is_authenticated, requires_biometric_auth) = {
            let session = self.session.borrow();
            (session.is_authenticated, session.requires_biometric_auth)
        };
        let profile_completed = self.profile.borrow().is_completed;

        AppState::derive(is_authenticated, profile_completed, requires_biometric_auth)
    }

    pub fn is_onboarding(&self) -> bool {
        self.session.borrow().is_authenticated && !self.profile.borrow().is_completed
    }

    /// Waits for either input to change and returns the recomputed state.
    /// `None` once both publishers are gone.
    pub async fn changed(&mut self) -> Option<AppState> {
        tokio::select! {
            Ok(()) = self.session.changed() => {}
            Ok(()) = self.profile.changed() => {}
            else => return None,
        }

        let state = self.current();
        debug!("App state: {state}");
        Some(state)
    }
}
