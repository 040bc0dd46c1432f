use crate::{biometric_commands::BiometricCommands, profile_commands::ProfileCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Health profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Biometric unlock preference
    Biometric {
        #[command(subcommand)]
        action: BiometricCommands,
    },

    /// Restore the session and profile and report the resulting app state
    Status,
}
