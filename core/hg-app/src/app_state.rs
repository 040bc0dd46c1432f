use std::fmt;

use serde::Serialize;

/// Top-level screen state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppState {
    #[default]
    LoggedOut,
    BiometricChallenge,
    /// Authenticated, profile not yet completed
    Onboarding,
    Ready,
}

impl AppState {
    /// Total over its inputs. Authenticated with a complete profile always
    /// wins; a pending biometric challenge only matters otherwise.
    pub fn derive(
        is_authenticated: bool,
        profile_completed: bool,
        requires_biometric_auth: bool,
    ) -> Self {
        if is_authenticated && profile_completed {
            Self::Ready
        } else if requires_biometric_auth {
            Self::BiometricChallenge
        } else if is_authenticated {
            Self::Onboarding
        } else {
            Self::LoggedOut
        }
    }

    /// Onboarding continues the logged-out flow rather than the main app.
    pub fn is_logged_out_branch(&self) -> bool {
        matches!(self, Self::LoggedOut | Self::Onboarding)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoggedOut => "logged_out",
            Self::BiometricChallenge => "biometric_challenge",
            Self::Onboarding => "onboarding",
            Self::Ready => "ready",
        }
    }
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
