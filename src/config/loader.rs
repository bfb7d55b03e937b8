// file: src/config/loader.rs
// version: 1.0.0
// guid: 71c4e0b8-9f25-4a3d-86e2-3b0d5f9a1c47

//! Configuration file loading and environment overrides

use super::{BoltConfig, ConfigFile};
use crate::{RasError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const ENV_BOLT_BINARY: &str = "RAS_BOLT_BINARY";
pub const ENV_MODULE_PATH: &str = "RAS_MODULE_PATH";
pub const ENV_DRY_RUN: &str = "RAS_DRY_RUN";

/// Configuration loader layering file and environment values over the defaults
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
    user_config: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader reading the process environment
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
            user_config: Self::user_config_path(),
        }
    }

    /// Create a loader with an explicit environment and no user config file
    pub fn with_env(env_vars: HashMap<String, String>) -> Self {
        Self {
            env_vars,
            user_config: None,
        }
    }

    /// Set environment variable for overrides
    pub fn set_env_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env_vars.insert(key.into(), value.into());
    }

    /// Get the user configuration file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ref-arch-setup").join("config.toml"))
    }

    /// Resolve the configuration.
    ///
    /// An explicit `path` must exist; the user config file is only read when
    /// present.
    pub fn load(&self, path: Option<&Path>) -> Result<BoltConfig> {
        let mut config = BoltConfig::default();

        match path {
            Some(explicit) => {
                info!("Loading configuration from: {}", explicit.display());
                let file = Self::read_file(explicit)?;
                self.apply_file(&mut config, file)?;
            }
            None => {
                if let Some(user) = self.user_config.as_deref().filter(|p| p.exists()) {
                    info!("Loading user configuration from: {}", user.display());
                    let file = Self::read_file(user)?;
                    self.apply_file(&mut config, file)?;
                }
            }
        }

        self.apply_env_overrides(&mut config)?;
        config.validate()?;

        debug!("Final configuration: {:?}", config);
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<ConfigFile> {
        let content = fs::read_to_string(path).map_err(|e| {
            RasError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(toml::from_str(&content)?)
    }

    fn apply_file(&self, config: &mut BoltConfig, file: ConfigFile) -> Result<()> {
        if let Some(binary) = file.bolt_binary {
            config.bolt_binary = binary;
        }
        if let Some(module_path) = file.module_path {
            config.module_path = expand_path(&module_path)?;
        }
        if let Some(dry_run) = file.dry_run {
            config.dry_run = dry_run;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&self, config: &mut BoltConfig) -> Result<()> {
        if let Some(binary) = self.env_vars.get(ENV_BOLT_BINARY) {
            config.bolt_binary = binary.clone();
        }

        if let Some(module_path) = self.env_vars.get(ENV_MODULE_PATH) {
            config.module_path = expand_path(module_path)?;
        }

        if let Some(dry_run) = self.env_vars.get(ENV_DRY_RUN) {
            config.dry_run = parse_flag(dry_run).ok_or_else(|| {
                RasError::config(format!("{} must be a boolean, got '{}'", ENV_DRY_RUN, dry_run))
            })?;
        }

        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand `~` and `$VAR` references in a configured path
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    shellexpand::full(raw)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| RasError::config(format!("Failed to expand path {}: {}", raw, e)))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_without_sources() {
        // Arrange
        let loader = ConfigLoader::with_env(HashMap::new());

        // Act
        let config = loader.load(None).unwrap();

        // Assert
        assert_eq!(config, BoltConfig::default());
    }

    #[test]
    fn test_load_explicit_file() {
        // Arrange
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "bolt_binary = \"/opt/puppetlabs/bin/bolt\"\nmodule_path = \"/srv/ras/modules\"\ndry_run = true\n",
        )
        .unwrap();
        let loader = ConfigLoader::with_env(HashMap::new());

        // Act
        let config = loader.load(Some(&path)).unwrap();

        // Assert
        assert_eq!(config.bolt_binary, "/opt/puppetlabs/bin/bolt");
        assert_eq!(config.module_path, PathBuf::from("/srv/ras/modules"));
        assert!(config.dry_run);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let loader = ConfigLoader::with_env(HashMap::new());

        let result = loader.load(Some(Path::new("/nonexistent/ras/config.toml")));

        assert!(matches!(result, Err(RasError::Config(_))));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "module_path = [").unwrap();
        let loader = ConfigLoader::with_env(HashMap::new());

        let result = loader.load(Some(&path));

        assert!(matches!(result, Err(RasError::TomlParse(_))));
    }

    #[test]
    fn test_env_overrides_file() {
        // Arrange
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "module_path = \"/from/file\"\n").unwrap();
        let mut loader = ConfigLoader::with_env(HashMap::new());
        loader.set_env_var(ENV_MODULE_PATH, "/from/env");
        loader.set_env_var(ENV_BOLT_BINARY, "bolt-test");
        loader.set_env_var(ENV_DRY_RUN, "YES");

        // Act
        let config = loader.load(Some(&path)).unwrap();

        // Assert
        assert_eq!(config.module_path, PathBuf::from("/from/env"));
        assert_eq!(config.bolt_binary, "bolt-test");
        assert!(config.dry_run);
    }

    #[test]
    fn test_invalid_dry_run_value() {
        let mut loader = ConfigLoader::with_env(HashMap::new());
        loader.set_env_var(ENV_DRY_RUN, "maybe");

        assert!(loader.load(None).is_err());
    }

    #[test]
    fn test_empty_binary_from_env_fails_validation() {
        let mut loader = ConfigLoader::with_env(HashMap::new());
        loader.set_env_var(ENV_BOLT_BINARY, "");

        assert!(matches!(loader.load(None), Err(RasError::Validation(_))));
    }

    #[test]
    fn test_expand_path_home() {
        let expanded = expand_path("~/modules").unwrap();

        assert!(expanded.ends_with("modules"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("modules"));
        }
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("On"), Some(true));
        assert_eq!(parse_flag("nah"), None);
    }
}
