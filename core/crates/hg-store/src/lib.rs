pub mod biometric_preference;
pub mod error;
pub mod file_store;
pub mod key_value_store;
pub mod keys;
pub mod legacy_layout;
pub mod memory_store;
pub mod profile_record;
pub mod profile_store;
pub mod save_report;

pub use biometric_preference::BiometricPreference;
pub use error::{PersistError, Result};
pub use file_store::FileStore;
pub use key_value_store::KeyValueStore;
pub use memory_store::MemoryStore;
pub use profile_record::{PROFILE_RECORD_VERSION, ProfileRecord};
pub use profile_store::ProfileStore;
pub use save_report::SaveReport;

#[cfg(test)]
mod tests;
