#![allow(dead_code)]

use hg_app::AppContext;
use hg_auth::{
    AuthError, BiometricError, BiometricPlatform, BiometricResult, IdentityProvider,
    Result as AuthErrorResult,
};
use hg_config::Config;
use hg_core::{BiometricKind, Credentials, Identity, UserProfile};
use hg_store::KeyValueStore;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

/// Enrolled face unlock whose challenges resolve from a queue (default Ok).
pub struct FacePlatform {
    outcomes: Mutex<VecDeque<BiometricResult<()>>>,
    calls: AtomicUsize,
}

impl FacePlatform {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn cancel_next(&self) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Err(BiometricError::user_cancelled()));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BiometricPlatform for FacePlatform {
    fn capability(&self) -> BiometricKind {
        BiometricKind::Face
    }

    fn can_evaluate(&self) -> bool {
        true
    }

    async fn evaluate(&self, _reason: &str) -> BiometricResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcomes.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

/// Single-account identity service that remembers its session across
/// app launches, like a provider SDK's keychain-backed session.
pub struct SingleUserProvider {
    account: Mutex<Option<(Credentials, Identity)>>,
    current: Mutex<Option<Identity>>,
}

impl SingleUserProvider {
    pub fn new() -> Self {
        Self {
            account: Mutex::new(None),
            current: Mutex::new(None),
        }
    }

    pub fn with_session(identity: Identity) -> Self {
        let provider = Self::new();
        *provider.current.lock().unwrap() = Some(identity);
        provider
    }
}

#[async_trait]
impl IdentityProvider for SingleUserProvider {
    async fn sign_in(&self, credentials: &Credentials) -> AuthErrorResult<Identity> {
        let identity = match self.account.lock().unwrap().as_ref() {
            Some((account, identity))
                if account.email == credentials.email
                    && account.password == credentials.password =>
            {
                identity.clone()
            }
            _ => return Err(AuthError::invalid_credentials("unknown account")),
        };
        *self.current.lock().unwrap() = Some(identity.clone());
        Ok(identity)
    }

    async fn sign_up(&self, credentials: &Credentials) -> AuthErrorResult<Identity> {
        let mut account = self.account.lock().unwrap();
        if account.is_some() {
            return Err(AuthError::account_exists(credentials.email.clone()));
        }
        let identity = Identity {
            id: uuid::Uuid::new_v4().to_string(),
            display_name: credentials.display_name.clone(),
            email: credentials.email.clone(),
        };
        *account = Some((credentials.clone(), identity.clone()));
        *self.current.lock().unwrap() = Some(identity.clone());
        Ok(identity)
    }

    async fn current_identity(&self) -> Option<Identity> {
        self.current.lock().unwrap().clone()
    }

    async fn sign_out(&self) -> AuthErrorResult<()> {
        *self.current.lock().unwrap() = None;
        Ok(())
    }
}

pub struct TestApp {
    pub context: AppContext,
    pub platform: Arc<FacePlatform>,
    pub provider: Arc<SingleUserProvider>,
}

impl TestApp {
    pub fn launch(store: Arc<dyn KeyValueStore>, provider: Arc<SingleUserProvider>) -> Self {
        let platform = Arc::new(FacePlatform::new());
        let context = AppContext::new(
            Config::default(),
            store,
            provider.clone(),
            platform.clone(),
        );
        Self {
            context,
            platform,
            provider,
        }
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("jordan@example.com", "hunter22").with_display_name("Jordan")
}

pub fn returning_identity() -> Identity {
    Identity {
        id: uuid::Uuid::new_v4().to_string(),
        display_name: Some("Jordan".to_string()),
        email: "jordan@example.com".to_string(),
    }
}

pub fn complete_profile() -> UserProfile {
    UserProfile {
        age: Some(41),
        height_feet: Some(5),
        height_inches: Some(11),
        weight: Some(181.0),
        blood_sugar: Some(92.0),
        cholesterol_total: Some(199.0),
        cholesterol_hdl: Some(48.0),
        cholesterol_ldl: Some(128.0),
        is_completed: true,
    }
}
