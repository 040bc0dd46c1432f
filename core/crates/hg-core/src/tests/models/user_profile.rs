use crate::UserProfile;

fn complete_profile() -> UserProfile {
    UserProfile {
        age: Some(42),
        height_feet: Some(5),
        height_inches: Some(11),
        weight: Some(180.5),
        blood_sugar: Some(95.0),
        cholesterol_total: Some(190.0),
        cholesterol_hdl: Some(55.0),
        cholesterol_ldl: Some(110.0),
        is_completed: true,
    }
}

#[test]
fn given_default_profile_when_checked_then_empty_and_incomplete() {
    let profile = UserProfile::default();

    assert!(profile.is_empty());
    assert!(!profile.is_completed);
}

#[test]
fn given_all_fields_without_flag_when_checked_then_not_completed() {
    // Given - every field present but onboarding never marked done
    let profile = UserProfile {
        is_completed: false,
        ..complete_profile()
    };

    // Then
    assert!(!profile.is_completed);
    assert!(!profile.is_empty());
}

#[test]
fn given_feet_and_inches_when_height_total_then_combines() {
    let profile = complete_profile();
    assert_eq!(profile.height_total_inches(), Some(71));
}

#[test]
fn given_only_inches_when_height_total_then_none() {
    let profile = UserProfile {
        height_inches: Some(4),
        ..UserProfile::default()
    };
    assert_eq!(profile.height_total_inches(), None);
}

#[test]
fn given_complete_profile_when_validate_then_ok() {
    assert!(complete_profile().validate().is_ok());
}

#[test]
fn given_inches_at_twelve_when_validate_then_rejected() {
    let profile = UserProfile {
        height_inches: Some(12),
        ..UserProfile::default()
    };

    let err = profile.validate().unwrap_err();
    assert_eq!(err.field(), Some("height_inches"));
}

#[test]
fn given_nan_weight_when_validate_then_rejected() {
    let profile = UserProfile {
        weight: Some(f64::NAN),
        ..UserProfile::default()
    };

    let err = profile.validate().unwrap_err();
    assert_eq!(err.field(), Some("weight"));
}

#[test]
fn given_negative_ldl_when_validate_then_rejected() {
    let profile = UserProfile {
        cholesterol_ldl: Some(-1.0),
        ..UserProfile::default()
    };

    let err = profile.validate().unwrap_err();
    assert_eq!(err.field(), Some("cholesterol_ldl"));
}

#[test]
fn given_age_over_limit_when_validate_then_rejected() {
    let profile = UserProfile {
        age: Some(151),
        ..UserProfile::default()
    };

    assert!(profile.validate().is_err());
}

#[test]
fn given_missing_fields_when_deserialize_then_defaults_to_none() {
    let json = r#"{"age":30}"#;
    let profile: UserProfile = serde_json::from_str(json).unwrap();

    assert_eq!(profile.age, Some(30));
    assert!(profile.weight.is_none());
    assert!(!profile.is_completed);
}
