use hg_core::UserProfile;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum ProfileCommands {
    /// Load the profile (structured record first, legacy keys as fallback)
    Show,

    /// Read only the legacy per-field keys
    Legacy,

    /// Merge the given fields into the stored profile and save it
    Set(ProfileFields),

    /// Reset the profile (legacy scalar keys are left in place)
    Clear,
}

#[derive(Args)]
pub(crate) struct ProfileFields {
    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    #[arg(long)]
    height_feet: Option<u32>,

    /// Inches past `height_feet` (0-11)
    #[arg(long)]
    height_inches: Option<u32>,

    /// Weight in pounds
    #[arg(long)]
    weight: Option<f64>,

    /// Fasting blood sugar, mg/dL
    #[arg(long)]
    blood_sugar: Option<f64>,

    /// Total cholesterol, mg/dL
    #[arg(long)]
    cholesterol_total: Option<f64>,

    /// HDL cholesterol, mg/dL
    #[arg(long)]
    cholesterol_hdl: Option<f64>,

    /// LDL cholesterol, mg/dL
    #[arg(long)]
    cholesterol_ldl: Option<f64>,

    /// Mark onboarding as finished (true|false)
    #[arg(long)]
    completed: Option<bool>,
}

impl ProfileFields {
    /// Overwrites only the fields that were given on the command line.
    pub(crate) fn apply_to(&self, profile: &mut UserProfile) {
        if self.age.is_some() {
            profile.age = self.age;
        }
        if self.height_feet.is_some() {
            profile.height_feet = self.height_feet;
        }
        if self.height_inches.is_some() {
            profile.height_inches = self.height_inches;
        }
        if self.weight.is_some() {
            profile.weight = self.weight;
        }
        if self.blood_sugar.is_some() {
            profile.blood_sugar = self.blood_sugar;
        }
        if self.cholesterol_total.is_some() {
            profile.cholesterol_total = self.cholesterol_total;
        }
        if self.cholesterol_hdl.is_some() {
            profile.cholesterol_hdl = self.cholesterol_hdl;
        }
        if self.cholesterol_ldl.is_some() {
            profile.cholesterol_ldl = self.cholesterol_ldl;
        }
        if let Some(completed) = self.completed {
            profile.is_completed = completed;
        }
    }
}
