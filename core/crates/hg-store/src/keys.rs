//! Stable storage keys. Renaming any of these orphans existing user data.

/// Versioned structured profile envelope.
pub const PROFILE_RECORD_KEY: &str = "profile.v1";

pub const LEGACY_AGE_KEY: &str = "profile.age";
pub const LEGACY_WEIGHT_KEY: &str = "profile.weight";
pub const LEGACY_HEIGHT_FEET_KEY: &str = "profile.height_feet";
pub const LEGACY_HEIGHT_INCHES_KEY: &str = "profile.height_inches";
pub const LEGACY_BLOOD_SUGAR_KEY: &str = "profile.blood_sugar";
pub const LEGACY_CHOLESTEROL_TOTAL_KEY: &str = "profile.cholesterol_total";
pub const LEGACY_CHOLESTEROL_HDL_KEY: &str = "profile.cholesterol_hdl";
pub const LEGACY_CHOLESTEROL_LDL_KEY: &str = "profile.cholesterol_ldl";
pub const LEGACY_COMPLETED_KEY: &str = "profile.completed";

/// Set by `ProfileStore::clear`, removed by the next save. While present the
/// legacy fallback is skipped, so left-behind legacy scalars stay hidden.
pub const PROFILE_CLEARED_KEY: &str = "profile.cleared";

pub const BIOMETRIC_ENABLED_KEY: &str = "biometric.enabled";
