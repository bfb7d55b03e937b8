// file: src/logging/mod.rs
// version: 1.0.0
// guid: 3a6d1f08-c7b2-4e95-a0d4-8f2e61b7c935

//! Logging system for the Bolt helper

pub mod logger;

pub use logger::{init_logger, with_operation_span};
