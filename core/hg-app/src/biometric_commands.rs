use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum BiometricCommands {
    /// Show the persisted preference and what this host supports
    Status,

    /// Turn biometric unlock off. Enrolling needs an interactive device.
    Disable,
}
