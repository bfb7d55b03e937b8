// file: src/cli/mod.rs
// version: 1.0.0
// guid: 8c15b7e3-4f9a-4d02-b6e1-92a0d3c5f718

//! Command line interface for the Bolt helper

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
