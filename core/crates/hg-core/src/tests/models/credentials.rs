use crate::{CoreError, Credentials};

#[test]
fn given_valid_credentials_when_validate_then_ok() {
    let credentials = Credentials::new("alice@example.com", "hunter2");
    assert!(credentials.validate().is_ok());
}

#[test]
fn given_email_without_at_when_validate_then_email_error() {
    // Given
    let credentials = Credentials::new("alice.example.com", "hunter2");

    // When
    let err = credentials.validate().unwrap_err();

    // Then
    assert_eq!(err.field(), Some("email"));
}

#[test]
fn given_empty_password_when_validate_then_password_error() {
    let credentials = Credentials::new("alice@example.com", "");

    match credentials.validate() {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field, "password"),
        other => panic!("Expected password validation error, got {other:?}"),
    }
}

#[test]
fn given_credentials_when_debug_formatted_then_password_redacted() {
    // Given
    let credentials =
        Credentials::new("alice@example.com", "super-secret").with_display_name("Alice");

    // When
    let debug = format!("{credentials:?}");

    // Then
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("alice@example.com"));
}
