use crate::keys::{
    LEGACY_AGE_KEY, LEGACY_COMPLETED_KEY, LEGACY_HEIGHT_INCHES_KEY, LEGACY_WEIGHT_KEY,
};
use crate::tests::{FlakyStore, complete_profile};
use crate::{KeyValueStore, MemoryStore, legacy_layout};

use hg_core::UserProfile;

use serde_json::{Value, json};

#[test]
fn given_partial_profile_when_written_then_only_present_fields_and_flag_stored() {
    // Given
    let store = MemoryStore::new();
    let profile = UserProfile {
        age: Some(28),
        weight: Some(140.0),
        ..UserProfile::default()
    };

    // When
    let failures = legacy_layout::write(&store, &profile);

    // Then
    assert!(failures.is_empty());
    let mut keys = store.keys().unwrap();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            LEGACY_AGE_KEY.to_string(),
            LEGACY_COMPLETED_KEY.to_string(),
            LEGACY_WEIGHT_KEY.to_string()
        ]
    );
    assert_eq!(store.get(LEGACY_COMPLETED_KEY).unwrap(), Some(json!(false)));
}

#[test]
fn given_field_cleared_when_rewritten_then_old_legacy_value_remains() {
    // Given - first save carries an age
    let store = MemoryStore::new();
    legacy_layout::write(&store, &complete_profile());

    // When - second save no longer has one
    let without_age = UserProfile {
        age: None,
        ..complete_profile()
    };
    legacy_layout::write(&store, &without_age);

    // Then - legacy writer only touches present fields
    assert_eq!(legacy_layout::read(&store).age, Some(34));
}

#[test]
fn given_full_profile_when_written_and_read_then_identical() {
    let store = MemoryStore::new();
    let profile = complete_profile();

    legacy_layout::write(&store, &profile);

    assert_eq!(legacy_layout::read(&store), profile);
}

#[test]
fn given_wrongly_typed_values_when_read_then_treated_as_missing() {
    // Given
    let store = MemoryStore::new();
    store.set(LEGACY_AGE_KEY, json!("thirty")).unwrap();
    store.set(LEGACY_HEIGHT_INCHES_KEY, json!(-3)).unwrap();
    store.set(LEGACY_WEIGHT_KEY, json!(150.5)).unwrap();
    store.set(LEGACY_COMPLETED_KEY, json!("yes")).unwrap();

    // When
    let profile = legacy_layout::read(&store);

    // Then
    assert_eq!(profile.age, None);
    assert_eq!(profile.height_inches, None);
    assert_eq!(profile.weight, Some(150.5));
    assert!(!profile.is_completed);
}

#[test]
fn given_failing_key_when_written_then_other_keys_still_written() {
    // Given
    let store = FlakyStore::new();
    store.fail_set(LEGACY_WEIGHT_KEY);

    // When
    let failures = legacy_layout::write(&store, &complete_profile());

    // Then
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, LEGACY_WEIGHT_KEY);
    assert_eq!(store.get(LEGACY_AGE_KEY).unwrap(), Some(json!(34)));
    assert_eq!(
        store.get(LEGACY_COMPLETED_KEY).unwrap(),
        Some(Value::Bool(true))
    );
}

#[test]
fn given_completed_flag_when_reset_then_false_and_scalars_kept() {
    // Given
    let store = MemoryStore::new();
    legacy_layout::write(&store, &complete_profile());

    // When
    legacy_layout::reset_completion(&store).unwrap();

    // Then
    let profile = legacy_layout::read(&store);
    assert!(!profile.is_completed);
    assert_eq!(profile.age, Some(34));
}

#[test]
fn given_field_cleared_when_absent_keys_removed_then_read_matches_profile() {
    // Given
    let store = MemoryStore::new();
    legacy_layout::write(&store, &complete_profile());
    let without_age = UserProfile {
        age: None,
        ..complete_profile()
    };
    legacy_layout::write(&store, &without_age);

    // When
    let failures = legacy_layout::remove_absent(&store, &without_age);

    // Then
    assert!(failures.is_empty());
    assert_eq!(store.get(LEGACY_AGE_KEY).unwrap(), None);
    assert_eq!(legacy_layout::read(&store), without_age);
}
