// file: src/lib.rs
// version: 1.0.0
// guid: 1d7b4e09-a3c5-4f68-9e21-c8b05f3a7d64

//! # ref-arch-setup
//!
//! Helpers that drive Puppet Bolt from Rust: ensure a directory exists on a
//! set of nodes, run an ad-hoc command, run a task with environment
//! parameters, or upload a file. Each call renders one Bolt command line,
//! waits for it to finish and reports the outcome on the console.

pub mod bolt;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use bolt::{BoltHelper, TaskParams};
pub use config::BoltConfig;
pub use error::{RasError, Result};

/// Version information for the helper
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
