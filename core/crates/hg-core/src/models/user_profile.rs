use crate::{CoreError, INCHES_PER_FOOT, MAX_AGE, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// Health profile collected during onboarding.
///
/// Every measurement is optional until the user supplies it. `is_completed`
/// is set explicitly by the onboarding flow and is never inferred from which
/// fields happen to be present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub age: Option<u32>,
    pub height_feet: Option<u32>,
    pub height_inches: Option<u32>,
    /// Pounds
    pub weight: Option<f64>,
    /// mg/dL
    pub blood_sugar: Option<f64>,
    /// mg/dL
    pub cholesterol_total: Option<f64>,
    /// mg/dL
    pub cholesterol_hdl: Option<f64>,
    /// mg/dL
    pub cholesterol_ldl: Option<f64>,
    pub is_completed: bool,
}

impl UserProfile {
    /// True when nothing has been entered and onboarding is not marked done.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Combined height, if at least the feet component is known.
    pub fn height_total_inches(&self) -> Option<u32> {
        self.height_feet
            .map(|feet| feet * INCHES_PER_FOOT + self.height_inches.unwrap_or(0))
    }

    /// Range checks applied before a profile is persisted.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if let Some(age) = self.age
            && age > MAX_AGE
        {
            return Err(CoreError::validation(
                "age",
                format!("age {age} exceeds maximum of {MAX_AGE}"),
            ));
        }

        if let Some(inches) = self.height_inches
            && inches >= INCHES_PER_FOOT
        {
            return Err(CoreError::validation(
                "height_inches",
                format!("height_inches must be below {INCHES_PER_FOOT}, got {inches}"),
            ));
        }

        for (field, value) in self.measurements() {
            if let Some(value) = value
                && (!value.is_finite() || value < 0.0)
            {
                return Err(CoreError::validation(
                    field,
                    format!("{field} must be a finite, non-negative number, got {value}"),
                ));
            }
        }

        Ok(())
    }

    fn measurements(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("weight", self.weight),
            ("blood_sugar", self.blood_sugar),
            ("cholesterol_total", self.cholesterol_total),
            ("cholesterol_hdl", self.cholesterol_hdl),
            ("cholesterol_ldl", self.cholesterol_ldl),
        ]
    }
}
