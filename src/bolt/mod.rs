// file: src/bolt/mod.rs
// version: 1.0.0
// guid: 5d9a2c7e-0b48-4e13-8f6a-b21e4c7093d5

//! Puppet Bolt command execution

pub mod console;
pub mod executor;
pub mod helper;
pub mod invocation;

pub use console::{Console, RecordingConsole, StdoutConsole};
pub use executor::{DryRunExecutor, ExecutionResult, ProcessExecutor, ScriptedExecutor, ShellExecutor};
pub use helper::{BoltHelper, TaskParams};
pub use invocation::{CommandInvocation, Verb};
