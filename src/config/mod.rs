// file: src/config/mod.rs
// version: 1.0.0
// guid: 0e7f3b95-a2d4-4c81-9b6e-d84c1a5f2e70

//! Configuration for the Bolt helper
//!
//! Values are resolved once at start-up (defaults, config file, environment,
//! command line) and are read-only afterwards.

pub mod loader;

pub use loader::ConfigLoader;

use crate::{RasError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Module path used when nothing else is configured
pub const DEFAULT_MODULE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/modules");

/// Orchestration binary used when nothing else is configured
pub const DEFAULT_BOLT_BINARY: &str = "bolt";

/// Resolved helper configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoltConfig {
    /// Name or path of the Bolt executable
    pub bolt_binary: String,
    /// Directory Bolt searches for task modules (`--modulepath`)
    pub module_path: PathBuf,
    /// Log command lines instead of running them
    pub dry_run: bool,
}

impl Default for BoltConfig {
    fn default() -> Self {
        Self {
            bolt_binary: DEFAULT_BOLT_BINARY.to_string(),
            module_path: PathBuf::from(DEFAULT_MODULE_PATH),
            dry_run: false,
        }
    }
}

impl BoltConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.bolt_binary.trim().is_empty() {
            return Err(RasError::validation("bolt_binary cannot be empty"));
        }

        if self.module_path.as_os_str().is_empty() {
            return Err(RasError::validation("module_path cannot be empty"));
        }

        Ok(())
    }
}

/// On-disk form; every key is optional and overrides the defaults
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub bolt_binary: Option<String>,
    pub module_path: Option<String>,
    pub dry_run: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BoltConfig::default();

        assert_eq!(config.bolt_binary, "bolt");
        assert!(config.module_path.ends_with("modules"));
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_binary_rejected() {
        let config = BoltConfig {
            bolt_binary: "  ".to_string(),
            ..BoltConfig::default()
        };

        assert!(matches!(config.validate(), Err(RasError::Validation(_))));
    }

    #[test]
    fn test_empty_module_path_rejected() {
        let config = BoltConfig {
            module_path: PathBuf::new(),
            ..BoltConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_rejects_unknown_keys() {
        let parsed: std::result::Result<ConfigFile, _> = toml::from_str("bolt = \"x\"");

        assert!(parsed.is_err());
    }
}
