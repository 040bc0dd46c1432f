//! The pre-envelope layout: one key per profile field plus a separate
//! completion flag. Kept readable as a fallback and kept written so older
//! builds sharing the same store still see current values.

use crate::keys::{
    LEGACY_AGE_KEY, LEGACY_BLOOD_SUGAR_KEY, LEGACY_CHOLESTEROL_HDL_KEY,
    LEGACY_CHOLESTEROL_LDL_KEY, LEGACY_CHOLESTEROL_TOTAL_KEY, LEGACY_COMPLETED_KEY,
    LEGACY_HEIGHT_FEET_KEY, LEGACY_HEIGHT_INCHES_KEY, LEGACY_WEIGHT_KEY,
};
use crate::profile_record::json_type;
use crate::{KeyValueStore, PersistError, Result as PersistResult};

use hg_core::UserProfile;

use log::warn;
use serde_json::Value;

/// Writes every present field, then the completion flag. Absent fields are
/// left untouched. Each key is attempted independently; the failures are
/// returned rather than short-circuiting.
pub fn write(store: &dyn KeyValueStore, profile: &UserProfile) -> Vec<(&'static str, PersistError)> {
    let mut failures = Vec::new();

    for (key, value) in fields(profile) {
        if let Some(value) = value
            && let Err(e) = store.set(key, value)
        {
            failures.push((key, e));
        }
    }

    if let Err(e) = store.set(LEGACY_COMPLETED_KEY, Value::Bool(profile.is_completed)) {
        failures.push((LEGACY_COMPLETED_KEY, e));
    }

    failures
}

/// Removes the key of every field `profile` leaves absent, so this layout
/// alone reads back as `profile`.
pub fn remove_absent(
    store: &dyn KeyValueStore,
    profile: &UserProfile,
) -> Vec<(&'static str, PersistError)> {
    fields(profile)
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .filter_map(|(key, _)| store.remove(key).err().map(|e| (key, e)))
        .collect()
}

/// Assembles a profile from whichever legacy keys are present and well-typed.
pub fn read(store: &dyn KeyValueStore) -> UserProfile {
    UserProfile {
        age: read_u32(store, LEGACY_AGE_KEY),
        height_feet: read_u32(store, LEGACY_HEIGHT_FEET_KEY),
        height_inches: read_u32(store, LEGACY_HEIGHT_INCHES_KEY),
        weight: read_f64(store, LEGACY_WEIGHT_KEY),
        blood_sugar: read_f64(store, LEGACY_BLOOD_SUGAR_KEY),
        cholesterol_total: read_f64(store, LEGACY_CHOLESTEROL_TOTAL_KEY),
        cholesterol_hdl: read_f64(store, LEGACY_CHOLESTEROL_HDL_KEY),
        cholesterol_ldl: read_f64(store, LEGACY_CHOLESTEROL_LDL_KEY),
        is_completed: read_value(store, LEGACY_COMPLETED_KEY, Value::as_bool).unwrap_or(false),
    }
}

fn fields(profile: &UserProfile) -> [(&'static str, Option<Value>); 8] {
    [
        (LEGACY_AGE_KEY, profile.age.map(Value::from)),
        (LEGACY_HEIGHT_FEET_KEY, profile.height_feet.map(Value::from)),
        (LEGACY_HEIGHT_INCHES_KEY, profile.height_inches.map(Value::from)),
        (LEGACY_WEIGHT_KEY, profile.weight.map(Value::from)),
        (LEGACY_BLOOD_SUGAR_KEY, profile.blood_sugar.map(Value::from)),
        (
            LEGACY_CHOLESTEROL_TOTAL_KEY,
            profile.cholesterol_total.map(Value::from),
        ),
        (
            LEGACY_CHOLESTEROL_HDL_KEY,
            profile.cholesterol_hdl.map(Value::from),
        ),
        (
            LEGACY_CHOLESTEROL_LDL_KEY,
            profile.cholesterol_ldl.map(Value::from),
        ),
    ]
}

/// Logical reset: only the completion flag goes back to false.
pub fn reset_completion(store: &dyn KeyValueStore) -> PersistResult<()> {
    store.set(LEGACY_COMPLETED_KEY, Value::Bool(false))
}

fn read_u32(store: &dyn KeyValueStore, key: &str) -> Option<u32> {
    read_value(store, key, |value| {
        value.as_u64().and_then(|n| u32::try_from(n).ok())
    })
}

fn read_f64(store: &dyn KeyValueStore, key: &str) -> Option<f64> {
    read_value(store, key, Value::as_f64).filter(|n| n.is_finite())
}

fn read_value<T>(
    store: &dyn KeyValueStore,
    key: &str,
    convert: impl FnOnce(&Value) -> Option<T>,
) -> Option<T> {
    let value = match store.get(key) {
        Ok(Some(value)) => value,
        Ok(None) => return None,
        Err(e) => {
            warn!("Legacy key '{key}' unreadable, treating as missing: {e}");
            return None;
        }
    };

    let converted = convert(&value);
    if converted.is_none() {
        warn!(
            "Legacy key '{key}' holds unexpected {}, treating as missing",
            json_type(&value)
        );
    }
    converted
}
