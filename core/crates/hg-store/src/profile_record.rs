use crate::keys::PROFILE_RECORD_KEY;
use crate::{PersistError, Result as PersistResult};

use hg_core::UserProfile;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope version written by this build.
pub const PROFILE_RECORD_VERSION: u32 = 1;

/// Structured layout: the whole profile in one versioned envelope, stored
/// as an encoded JSON string under `profile.v1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub version: u32,
    pub profile: UserProfile,
}

impl ProfileRecord {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            version: PROFILE_RECORD_VERSION,
            profile,
        }
    }

    #[track_caller]
    pub fn encode(&self) -> PersistResult<Value> {
        serde_json::to_string(self)
            .map(Value::String)
            .map_err(|e| PersistError::encode(PROFILE_RECORD_KEY, e.to_string()))
    }

    /// Decodes a stored blob. Wrong shape, bad JSON and unknown versions
    /// are all reported as `Decode`.
    #[track_caller]
    pub fn decode(value: &Value) -> PersistResult<UserProfile> {
        let Value::String(blob) = value else {
            return Err(PersistError::decode(
                PROFILE_RECORD_KEY,
                format!("expected encoded string, found {}", json_type(value)),
            ));
        };

        let record: ProfileRecord = serde_json::from_str(blob)
            .map_err(|e| PersistError::decode(PROFILE_RECORD_KEY, e.to_string()))?;

        if record.version != PROFILE_RECORD_VERSION {
            return Err(PersistError::decode(
                PROFILE_RECORD_KEY,
                format!(
                    "unsupported record version {} (expected {})",
                    record.version, PROFILE_RECORD_VERSION
                ),
            ));
        }

        Ok(record.profile)
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
