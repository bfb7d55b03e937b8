// file: src/cli/commands.rs
// version: 1.0.0
// guid: 6b3e8f21-d95c-4a70-8e4b-c1f7a20d96e5

//! Command implementations for the CLI

use super::args::{Cli, Commands};
use crate::{
    bolt::{BoltHelper, Console, ProcessExecutor, TaskParams},
    config::{loader::expand_path, BoltConfig, ConfigLoader},
    logging::with_operation_span,
    Result,
};
use tracing::info;

/// Resolve configuration from file and environment, then apply command line flags
pub fn resolve_config(cli: &Cli) -> Result<BoltConfig> {
    let mut config = ConfigLoader::new().load(cli.config.as_deref())?;

    if let Some(bolt) = &cli.bolt {
        config.bolt_binary = bolt.clone();
    }
    if let Some(module_path) = &cli.module_path {
        config.module_path = expand_path(module_path)?;
    }
    if cli.dry_run {
        config.dry_run = true;
    }

    config.validate()?;
    Ok(config)
}

/// Run one subcommand against a helper; returns whether Bolt succeeded
pub fn execute_command<E, C>(helper: &BoltHelper<E, C>, command: &Commands) -> Result<bool>
where
    E: ProcessExecutor,
    C: Console,
{
    match command {
        Commands::MakeDir { path, nodes } => with_operation_span("make-dir", || {
            info!("Ensuring directory {} on {}", path, nodes);
            helper.make_dir(path, nodes)
        }),
        Commands::RunCommand { command, nodes } => with_operation_span("run-command", || {
            info!("Running command on {}", nodes);
            helper.run_cmd(command, nodes)
        }),
        Commands::RunTask { task, env, nodes } => with_operation_span("run-task", || {
            info!("Running task {} on {}", task, nodes);
            let params = TaskParams::new(task.clone(), TaskParams::join_env_vars(env), nodes.clone());
            helper.run_task(&params)
        }),
        Commands::UploadFile {
            source,
            destination,
            nodes,
        } => with_operation_span("upload-file", || {
            info!("Uploading {} to {} on {}", source, destination, nodes);
            helper.upload_file(source, destination, nodes)
        }),
    }
}
