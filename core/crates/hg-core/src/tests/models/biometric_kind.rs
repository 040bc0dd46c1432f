use crate::{BiometricCapability, BiometricKind};

use std::str::FromStr;

#[test]
fn test_biometric_kind_as_str() {
    assert_eq!(BiometricKind::None.as_str(), "none");
    assert_eq!(BiometricKind::Face.as_str(), "face");
    assert_eq!(BiometricKind::Fingerprint.as_str(), "fingerprint");
    assert_eq!(BiometricKind::Iris.as_str(), "iris");
}

#[test]
fn test_biometric_kind_from_str() {
    assert_eq!(BiometricKind::from_str("face").unwrap(), BiometricKind::Face);
    assert_eq!(
        BiometricKind::from_str("fingerprint").unwrap(),
        BiometricKind::Fingerprint
    );
    assert!(BiometricKind::from_str("retina").is_err());
}

#[test]
fn test_biometric_kind_default() {
    assert_eq!(BiometricKind::default(), BiometricKind::None);
}

#[test]
fn given_no_hardware_when_capability_built_then_cannot_evaluate() {
    // Given / When
    let capability = BiometricCapability::new(BiometricKind::None, true);

    // Then
    assert!(!capability.can_evaluate);
    assert!(!capability.needs_enrollment());
}

#[test]
fn given_hardware_without_enrollment_when_capability_built_then_needs_enrollment() {
    // Given / When
    let capability = BiometricCapability::new(BiometricKind::Fingerprint, false);

    // Then
    assert!(!capability.can_evaluate);
    assert!(capability.needs_enrollment());
}
