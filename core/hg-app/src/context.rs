use crate::{AppStateMachine, Result as AppErrorResult};

use hg_auth::{
    AuthSessionManager, BiometricGate, BiometricPlatform, BiometricSettings, IdentityProvider,
};
use hg_config::{BiometricConfig, Config};
use hg_store::{BiometricPreference, FileStore, KeyValueStore, ProfileStore};

use std::sync::Arc;
use std::time::Duration;

use log::info;

/// Everything the app needs, wired once at startup and passed to whoever
/// consumes it.
pub struct AppContext {
    config: Config,
    store: Arc<dyn KeyValueStore>,
    profiles: Arc<ProfileStore>,
    preference: Arc<BiometricPreference>,
    gate: Arc<BiometricGate>,
    session: Arc<AuthSessionManager>,
}

impl AppContext {
    pub fn new(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        provider: Arc<dyn IdentityProvider>,
        platform: Arc<dyn BiometricPlatform>,
    ) -> Self {
        let profiles = Arc::new(ProfileStore::new(Arc::clone(&store)));
        let preference = Arc::new(BiometricPreference::new(Arc::clone(&store)));
        let gate = Arc::new(BiometricGate::new(
            platform,
            Arc::clone(&preference),
            biometric_settings(&config.biometric),
        ));
        let session = Arc::new(AuthSessionManager::new(
            provider,
            Arc::clone(&gate),
            Arc::clone(&preference),
        ));

        Self {
            config,
            store,
            profiles,
            preference,
            gate,
            session,
        }
    }

    /// Opens the file-backed store at the configured path.
    pub fn open(
        config: Config,
        provider: Arc<dyn IdentityProvider>,
        platform: Arc<dyn BiometricPlatform>,
    ) -> AppErrorResult<Self> {
        let path = config.storage_path()?;
        info!("Opening store: {}", path.display());
        let store = FileStore::open(path)?;

        Ok(Self::new(config, Arc::new(store), provider, platform))
    }

    /// Restores the session and profile, then hands back the state machine.
    pub async fn start(&self) -> AppStateMachine {
        tokio::join!(self.session.resume_session(), self.profiles.load());

        let machine = self.state_machine();
        info!("App started in state {}", machine.current());
        machine
    }

    pub fn state_machine(&self) -> AppStateMachine {
        AppStateMachine::new(self.session.subscribe(), self.profiles.subscribe())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    pub fn profiles(&self) -> &Arc<ProfileStore> {
        &self.profiles
    }

    pub fn preference(&self) -> &Arc<BiometricPreference> {
        &self.preference
    }

    pub fn gate(&self) -> &Arc<BiometricGate> {
        &self.gate
    }

    pub fn session(&self) -> &Arc<AuthSessionManager> {
        &self.session
    }
}

fn biometric_settings(config: &BiometricConfig) -> BiometricSettings {
    BiometricSettings {
        unlock_reason: config.unlock_reason.clone(),
        enroll_reason: config.enroll_reason.clone(),
        evaluate_timeout: Duration::from_secs(config.evaluate_timeout_secs),
    }
}
