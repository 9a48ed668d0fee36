//! Roomlink CLI - command-line client for the building-device API.
//!
//! Issues REST calls against a configured base URL and renders the
//! results as text or JSON.

mod cli;
mod commands;
mod error;
mod output;

use std::time::Duration;

use clap::Parser;

use cli::{Cli, Commands};
use error::{exit_codes, CliError};
use roomlink_core::ApiClient;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // `version` needs no client; everything else talks to the API.
    if let Commands::Version = cli.command {
        commands::run_version(cli.json);
        return Ok(());
    }

    let api = ApiClient::new(&cli.base_url, Duration::from_millis(cli.timeout))
        .map_err(roomlink_core::CoreError::from)?;

    match cli.command {
        Commands::Version => unreachable!("handled above"),
        Commands::DeviceCount => commands::run_device_count(&api, cli.json).await,
        Commands::TimeoutDevices(args) => {
            commands::run_timeout_devices(&api, args, cli.json).await
        }
        Commands::RegisterDevice(args) => {
            commands::run_register_device(&api, args, cli.json).await
        }
    }
}
