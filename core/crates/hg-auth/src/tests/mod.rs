
use crate::{
    AuthError, BiometricError, BiometricGate, BiometricPlatform, BiometricResult,
    BiometricSettings, IdentityProvider, Result as AuthErrorResult,
};

use hg_core::{BiometricKind, Credentials, Identity};
use hg_store::{BiometricPreference, KeyValueStore, MemoryStore, PersistError};

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Notify;

/// Platform whose challenges resolve from a script. While `hold` is set,
/// a challenge stays pending until `release` is called.
pub(crate) struct ScriptedPlatform {
    kind: BiometricKind,
    enrolled: bool,
    outcomes: Mutex<VecDeque<BiometricResult<()>>>,
    hold: AtomicBool,
    started: Notify,
    released: Notify,
    calls: AtomicUsize,
}

impl ScriptedPlatform {
    pub(crate) fn new(kind: BiometricKind, enrolled: bool) -> Self {
        Self {
            kind,
            enrolled,
            outcomes: Mutex::new(VecDeque::new()),
            hold: AtomicBool::new(false),
            started: Notify::new(),
            released: Notify::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn face() -> Self {
        Self::new(BiometricKind::Face, true)
    }

    pub(crate) fn push_outcome(&self, outcome: BiometricResult<()>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub(crate) fn hold(&self, hold: bool) {
        self.hold.store(hold, Ordering::SeqCst);
    }

    pub(crate) async fn wait_started(&self) {
        self.started.notified().await;
    }

    pub(crate) fn release(&self) {
        self.released.notify_one();
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BiometricPlatform for ScriptedPlatform {
    fn capability(&self) -> BiometricKind {
        self.kind
    }

    fn can_evaluate(&self) -> bool {
        self.enrolled
    }

    async fn evaluate(&self, _reason: &str) -> BiometricResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();
        if self.hold.load(Ordering::SeqCst) {
            self.released.notified().await;
        }
        self.outcomes.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

struct Account {
    password: String,
    identity: Identity,
}

/// In-memory identity service.
pub(crate) struct FakeIdentityProvider {
    accounts: Mutex<HashMap<String, Account>>,
    current: Mutex<Option<Identity>>,
    offline: AtomicBool,
    calls: AtomicUsize,
}

impl FakeIdentityProvider {
    pub(crate) fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            current: Mutex::new(None),
            offline: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    /// Provider that remembers a session from an earlier launch.
    pub(crate) fn with_session(identity: Identity) -> Self {
        let provider = Self::new();
        *provider.current.lock().unwrap() = Some(identity);
        provider
    }

    pub(crate) fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> AuthErrorResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(AuthError::network("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> AuthErrorResult<Identity> {
        self.check_online()?;
        let identity = self
            .accounts
            .lock()
            .unwrap()
            .get(&credentials.email)
            .filter(|account| account.password == credentials.password)
            .map(|account| account.identity.clone())
            .ok_or_else(|| AuthError::invalid_credentials("unknown email or wrong password"))?;
        *self.current.lock().unwrap() = Some(identity.clone());
        Ok(identity)
    }

    async fn sign_up(&self, credentials: &Credentials) -> AuthErrorResult<Identity> {
        self.check_online()?;
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(&credentials.email) {
            return Err(AuthError::account_exists(credentials.email.clone()));
        }
        let identity = Identity {
            id: uuid::Uuid::new_v4().to_string(),
            display_name: credentials.display_name.clone(),
            email: credentials.email.clone(),
        };
        accounts.insert(
            credentials.email.clone(),
            Account {
                password: credentials.password.clone(),
                identity: identity.clone(),
            },
        );
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

/// Store that reads normally but refuses every write.
pub(crate) struct ReadOnlyStore {
    inner: MemoryStore,
}

impl ReadOnlyStore {
    pub(crate) fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
        }
    }
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> hg_store::Result<Option<Value>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, _value: Value) -> hg_store::Result<()> {
        Err(PersistError::write(key, "read-only volume"))
    }

    fn remove(&self, key: &str) -> hg_store::Result<()> {
        Err(PersistError::write(key, "read-only volume"))
    }

    fn keys(&self) -> hg_store::Result<Vec<String>> {
        self.inner.keys()
    }
}

pub(crate) fn sample_identity() -> Identity {
    Identity {
        id: uuid::Uuid::new_v4().to_string(),
        display_name: Some("Sam Rivera".to_string()),
        email: "sam@example.com".to_string(),
    }
}

pub(crate) fn gate_with(
    platform: Arc<ScriptedPlatform>,
    store: Arc<dyn KeyValueStore>,
) -> (Arc<BiometricGate>, Arc<BiometricPreference>) {
    let preference = Arc::new(BiometricPreference::new(store));
    let gate = Arc::new(BiometricGate::new(
        platform,
        Arc::clone(&preference),
        BiometricSettings::default(),
    ));
    (gate, preference)
}

pub(crate) fn cancelled() -> BiometricResult<()> {
    Err(BiometricError::user_cancelled())
}
