// file: src/main.rs
// version: 1.0.0
// guid: a90c2f5b-7e14-4d83-b6a9-0f3d8e1c5b72

//! ref-arch-setup - main entry point

use anyhow::Context;
use clap::Parser;
use ref_arch_setup::{
    cli::{execute_command, resolve_config, Cli},
    logging::logger,
    BoltHelper,
};
use tokio::signal;
use tracing::{error, warn};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("{}", e);
    }

    let shutdown_signal = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = run(cli) => match result {
            Ok(true) => std::process::exit(0),
            Ok(false) => std::process::exit(1),
            Err(e) => {
                error!("{:#}", e);
                eprintln!("Error: {:#}", e);
                std::process::exit(2);
            }
        },
        _ = shutdown_signal => {
            warn!("Interrupted by user");
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}

/// Resolve configuration and run the Bolt operation off the async runtime
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = resolve_config(&cli).context("Failed to resolve configuration")?;
    let command = cli.command;

    let success = tokio::task::spawn_blocking(move || {
        let helper = BoltHelper::from_config(&config);
        execute_command(&helper, &command)
    })
    .await
    .context("Bolt worker terminated unexpectedly")??;

    Ok(success)
}
