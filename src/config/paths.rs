//! Path management for the finance tracker
//!
//! Resolves the per-user configuration directory and the files inside it.
//!
//! ## Path Resolution Order
//!
//! 1. `FINANCE_TRACKER_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories` joined with
//!    `finance-tracker` (`~/.config/finance-tracker` on Linux,
//!    `~/Library/Application Support/finance-tracker` on macOS,
//!    `%APPDATA%\finance-tracker` on Windows)

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{LedgerError, LedgerResult};

/// Application directory name under the platform config directory
pub const APP_NAME: &str = "finance-tracker";

/// Name of the configuration document
pub const CONFIG_FILE: &str = "config.yaml";

/// Name of the log file written by the tracing subscriber
pub const LOG_FILE: &str = "finance-tracker.log";

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "FINANCE_TRACKER_CONFIG_DIR";

/// Manages all paths used by the finance tracker
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    config_dir: PathBuf,
}

impl ConfigPaths {
    /// Resolve the config directory for the current user
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> LedgerResult<Self> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => BaseDirs::new()
                .map(|dirs| dirs.config_dir().join(APP_NAME))
                .ok_or_else(|| {
                    LedgerError::Config("Could not determine user config directory".into())
                })?,
        };

        Ok(Self { config_dir })
    }

    /// Create ConfigPaths rooted at a custom directory (useful for testing)
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the config directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the path to config.yaml
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.config_dir.join(LOG_FILE)
    }

    /// Resolve the configured data file; relative paths live in the config directory
    pub fn data_file(&self, data_file: &str) -> PathBuf {
        let path = Path::new(data_file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.config_dir.join(path)
        }
    }

    /// Create the config directory if it is missing
    pub fn ensure_config_dir(&self) -> LedgerResult<()> {
        std::fs::create_dir_all(&self.config_dir).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to create config directory {}: {}",
                self.config_dir.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_config_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.config_dir(), temp_dir.path());
        assert_eq!(paths.config_file(), temp_dir.path().join("config.yaml"));
        assert_eq!(paths.log_file(), temp_dir.path().join("finance-tracker.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());
        let paths = ConfigPaths::new().unwrap();
        std::env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.config_dir(), temp_dir.path());
    }

    #[test]
    fn test_relative_data_file_lives_in_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_config_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.data_file("transactions.json"),
            temp_dir.path().join("transactions.json")
        );

        let absolute = temp_dir.path().join("elsewhere").join("ledger.json");
        assert_eq!(paths.data_file(absolute.to_str().unwrap()), absolute);
    }

    #[test]
    fn test_ensure_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("finance-tracker");
        let paths = ConfigPaths::with_config_dir(nested.clone());

        paths.ensure_config_dir().unwrap();
        assert!(nested.is_dir());
    }
}
