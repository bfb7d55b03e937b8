// file: src/bolt/executor.rs
// version: 1.0.0
// guid: 27c8d5f1-e04a-4b9d-a6c3-5f81b0e94d2c

//! Process execution capability for rendered Bolt command lines

use crate::{RasError, Result};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::process::Command;
use tracing::{debug, error, info};

/// Outcome of one child process run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// stdout followed by stderr
    pub output: String,
    /// Exit code, or -1 when the process was terminated by a signal
    pub exit_code: i32,
    pub success: bool,
}

impl ExecutionResult {
    pub fn new(exit_code: i32, output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            exit_code,
            success: exit_code == 0,
        }
    }
}

/// Trait for running a full shell command line and collecting its result
pub trait ProcessExecutor {
    /// Run `command` to completion, blocking the caller.
    ///
    /// A non-zero exit is returned as an `ExecutionResult`; `Err` means the
    /// process could not be started at all.
    fn execute(&self, command: &str) -> Result<ExecutionResult>;
}

impl<T: ProcessExecutor + ?Sized> ProcessExecutor for &T {
    fn execute(&self, command: &str) -> Result<ExecutionResult> {
        (**self).execute(command)
    }
}

impl<T: ProcessExecutor + ?Sized> ProcessExecutor for Box<T> {
    fn execute(&self, command: &str) -> Result<ExecutionResult> {
        (**self).execute(command)
    }
}

/// Runs command lines through `/bin/sh -c`
pub struct ShellExecutor {
    shell: String,
    tool: String,
}

impl ShellExecutor {
    /// Create an executor for command lines that invoke `tool`
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            shell: "/bin/sh".to_string(),
            tool: tool.into(),
        }
    }

    /// Use a different shell binary
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    fn ensure_tool(&self) -> Result<()> {
        which::which(&self.tool).map(|_| ()).map_err(|e| {
            error!(tool = %self.tool, "Orchestration tool not found: {}", e);
            RasError::tool_not_found(format!("{} ({})", self.tool, e))
        })
    }
}

impl ProcessExecutor for ShellExecutor {
    fn execute(&self, command: &str) -> Result<ExecutionResult> {
        self.ensure_tool()?;
        debug!(shell = %self.shell, "Executing: {}", command);

        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .output()
            .map_err(|e| {
                error!("Failed to launch command: {}", e);
                RasError::process(command, e.to_string())
            })?;

        let exit_code = output.status.code().unwrap_or(-1);
        let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        debug!(exit_code, bytes = combined.len(), "Command finished");
        Ok(ExecutionResult::new(exit_code, combined))
    }
}

/// Logs command lines instead of running them
#[derive(Debug, Default)]
pub struct DryRunExecutor;

impl ProcessExecutor for DryRunExecutor {
    fn execute(&self, command: &str) -> Result<ExecutionResult> {
        info!("DRY RUN: would execute: {}", command);
        Ok(ExecutionResult::new(0, ""))
    }
}

/// Test double that replays scripted results and records every command it receives
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    results: RefCell<VecDeque<ExecutionResult>>,
    received: RefCell<Vec<String>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor that answers every call with the same result
    pub fn returning(exit_code: i32, output: &str) -> Self {
        let executor = Self::new();
        executor.push(exit_code, output);
        executor
    }

    /// Queue a result; the last queued result repeats once the queue runs dry
    pub fn push(&self, exit_code: i32, output: &str) {
        self.results
            .borrow_mut()
            .push_back(ExecutionResult::new(exit_code, output));
    }

    /// Command lines received so far, in call order
    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }
}

impl ProcessExecutor for ScriptedExecutor {
    fn execute(&self, command: &str) -> Result<ExecutionResult> {
        self.received.borrow_mut().push(command.to_string());

        let mut results = self.results.borrow_mut();
        let result = if results.len() > 1 {
            results.pop_front()
        } else {
            results.front().cloned()
        };
        result.ok_or_else(|| RasError::process(command, "no scripted result queued"))
    }
}
