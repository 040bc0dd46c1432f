mod biometric_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

pub use biometric_config::BiometricConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "HG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".hg";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_STORAGE_FILE: &str = "store.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_UNLOCK_REASON: &str = "Unlock your health profile";
const DEFAULT_ENROLL_REASON: &str = "Enable biometric unlock";
const DEFAULT_EVALUATE_TIMEOUT_SECS: u64 = 60;
const MIN_EVALUATE_TIMEOUT_SECS: u64 = 1;
const MAX_EVALUATE_TIMEOUT_SECS: u64 = 300;
