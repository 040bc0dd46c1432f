//! hg - Health Gate maintenance CLI
//!
//! Inspects and edits the local profile store without the app.
//!
//! # Examples
//!
//! ```bash
//! # Show the stored profile
//! hg profile show --pretty
//!
//! # Update two fields and mark onboarding done
//! hg profile set --age 42 --weight 171.5 --completed true
//!
//! # Turn off biometric unlock
//! hg biometric disable
//! ```

mod biometric_commands;
mod cli;
mod commands;
mod profile_commands;

use crate::{
    biometric_commands::BiometricCommands, cli::Cli, commands::Commands,
    profile_commands::ProfileCommands,
};

use hg_app::{AppContext, Result as AppErrorResult, logger};
use hg_auth::{OfflineIdentityProvider, UnsupportedPlatform};
use hg_config::Config;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::info;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match open_context() {
        Ok(context) => run(&context, cli.command).await,
        Err(e) => Err(e),
    };

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing output: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn open_context() -> AppErrorResult<AppContext> {
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting hg v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // No identity service or biometric hardware from the command line
    AppContext::open(
        config,
        Arc::new(OfflineIdentityProvider),
        Arc::new(UnsupportedPlatform),
    )
}

async fn run(context: &AppContext, command: Commands) -> AppErrorResult<Value> {
    let profiles = context.profiles();

    let value = match command {
        Commands::Profile { action } => match action {
            ProfileCommands::Show => json!({ "profile": profiles.load().await }),
            ProfileCommands::Legacy => json!({ "profile": profiles.load_legacy().await }),
            ProfileCommands::Set(fields) => {
                let mut profile = profiles.load().await;
                fields.apply_to(&mut profile);
                let report = profiles.save(profile.clone()).await?;
                json!({ "profile": profile, "report": report })
            }
            ProfileCommands::Clear => {
                profiles.clear().await;
                json!({ "cleared": true })
            }
        },

        Commands::Biometric { action } => match action {
            BiometricCommands::Status => json!({
                "enabled": context.preference().load().await,
                "capability": context.gate().query_capability(),
            }),
            BiometricCommands::Disable => {
                context.preference().set(false).await?;
                json!({ "enabled": false })
            }
        },

        Commands::Status => {
            let machine = context.start().await;
            json!({
                "state": machine.current(),
                "onboarding": machine.is_onboarding(),
                "biometric_enabled": context.preference().is_enabled(),
                "profile_completed": profiles.is_completed(),
            })
        }
    };

    Ok(value)
}
