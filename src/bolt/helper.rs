// file: src/bolt/helper.rs
// version: 1.0.0
// guid: e83b47a9-1c6f-4d20-b5e7-0a9f36c2d418

//! Bolt operations against a node selector
//!
//! Every operation renders one command line, runs it to completion and
//! reports on the console in a fixed order:
//!
//! ```text
//! Running: <command line>
//! ERROR: <context>          (only on non-zero exit)
//! Exit status was: <code>
//! Output was: <output>
//! ```
//!
//! A non-zero exit is reported as `Ok(false)`. `Err` is only returned when
//! the command could not be launched.

use super::console::{Console, StdoutConsole};
use super::executor::{DryRunExecutor, ProcessExecutor, ShellExecutor};
use super::invocation::{ensure_dir_snippet, CommandInvocation};
use crate::config::BoltConfig;
use crate::Result;
use tracing::{debug, info, warn};

/// Parameters for a task run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskParams {
    /// Fully qualified task name, e.g. `ref_arch_setup::install_pe`
    pub task: String,
    /// Space separated `VAR=value` assignments, passed through as one string
    pub env_vars: String,
    pub nodes: String,
}

impl TaskParams {
    pub fn new(task: impl Into<String>, env_vars: impl Into<String>, nodes: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            env_vars: env_vars.into(),
            nodes: nodes.into(),
        }
    }

    /// Join individual `VAR=value` pairs into the pre-joined form
    pub fn join_env_vars<I, S>(pairs: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        pairs
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runs Bolt commands, tasks and uploads and reports their outcome
pub struct BoltHelper<E, C> {
    tool: String,
    module_path: String,
    executor: E,
    console: C,
}

impl BoltHelper<Box<dyn ProcessExecutor>, StdoutConsole> {
    /// Helper wired to a real shell (or the dry-run executor) and stdout
    pub fn from_config(config: &BoltConfig) -> Self {
        let executor: Box<dyn ProcessExecutor> = if config.dry_run {
            info!("Dry run enabled, Bolt will not be invoked");
            Box::new(DryRunExecutor)
        } else {
            Box::new(ShellExecutor::new(config.bolt_binary.clone()))
        };
        Self::new(config, executor, StdoutConsole)
    }
}

impl<E: ProcessExecutor, C: Console> BoltHelper<E, C> {
    pub fn new(config: &BoltConfig, executor: E, console: C) -> Self {
        Self {
            tool: config.bolt_binary.clone(),
            module_path: config.module_path.display().to_string(),
            executor,
            console,
        }
    }

    /// Create `dir` (with parents) on `nodes` unless it already exists
    pub fn make_dir(&self, dir: &str, nodes: &str) -> Result<bool> {
        let success = self.run_cmd(&ensure_dir_snippet(dir), nodes)?;
        if !success {
            self.console
                .line(&format!("ERROR: Failed to make dir {} on all nodes", dir));
        }
        Ok(success)
    }

    /// Run an ad-hoc shell command on `nodes`
    pub fn run_cmd(&self, command: &str, nodes: &str) -> Result<bool> {
        let invocation = CommandInvocation::command_run(&self.tool, command, nodes);
        self.run_and_report(&invocation, || "ERROR: bolt command failed!".to_string())
    }

    /// Run a task from the configured module path
    pub fn run_task(&self, params: &TaskParams) -> Result<bool> {
        let invocation = CommandInvocation::task_run(
            &self.tool,
            &params.task,
            &params.env_vars,
            &self.module_path,
            &params.nodes,
        );
        self.run_and_report(&invocation, || "ERROR: bolt task failed!".to_string())
    }

    /// Copy a local file to `destination` on `nodes`
    pub fn upload_file(&self, source: &str, destination: &str, nodes: &str) -> Result<bool> {
        let invocation = CommandInvocation::file_upload(&self.tool, source, destination, nodes);
        self.run_and_report(&invocation, || {
            format!(
                "ERROR: failed to upload file {} to {} on {}",
                source, destination, nodes
            )
        })
    }

    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    fn run_and_report<F>(&self, invocation: &CommandInvocation, failure: F) -> Result<bool>
    where
        F: FnOnce() -> String,
    {
        let command = invocation.render();
        self.console.line(&format!("Running: {}", command));

        let result = self.executor.execute(&command)?;

        if result.success {
            debug!(exit_code = result.exit_code, "Bolt invocation succeeded");
        } else {
            warn!(exit_code = result.exit_code, command = %command, "Bolt invocation failed");
            self.console.line(&failure());
        }
        self.console
            .line(&format!("Exit status was: {}", result.exit_code));
        self.console.line(&format!("Output was: {}", result.output));

        Ok(result.success)
    }
}
