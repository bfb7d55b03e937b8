// file: src/error.rs
// version: 1.0.0
// guid: 4f0c9e2a-8b1d-4c6e-9a37-2d5b7e1f0a84

use thiserror::Error;

/// Result type alias for the helper
pub type Result<T> = std::result::Result<T, RasError>;

/// Error types for the Bolt helper.
///
/// A remote command that exits non-zero is *not* an error; it is reported
/// as `Ok(false)`. These variants cover failures to get a command running
/// at all, and failures in configuration or logging setup.
#[derive(Error, Debug)]
pub enum RasError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Failed to launch '{command}': {message}")]
    ProcessError { command: String, message: String },

    #[error("Logging error: {0}")]
    Logging(String),
}

impl RasError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new tool not found error
    pub fn tool_not_found(msg: impl Into<String>) -> Self {
        Self::ToolNotFound(msg.into())
    }

    /// Create a new process launch error
    pub fn process(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProcessError {
            command: command.into(),
            message: message.into(),
        }
    }

    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
