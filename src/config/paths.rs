//! Path management for Runway
//!
//! ## Path Resolution Order
//!
//! 1. `RUNWAY_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for the application
//!    (`~/.config/runway` on Linux, `~/Library/Application Support/runway` on
//!    macOS, `%APPDATA%\runway\config` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::RunwayError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "RUNWAY_DATA_DIR";

/// Manages all paths used by Runway
#[derive(Debug, Clone)]
pub struct RunwayPaths {
    base_dir: PathBuf,
}

impl RunwayPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, RunwayError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "runway")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    RunwayError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Use an explicit base directory (tests, `--data-dir`)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn accounts_file(&self) -> PathBuf {
        self.data_dir().join("accounts.json")
    }

    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), RunwayError> {
        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            RunwayError::Io(format!(
                "Failed to create data directory {}: {}",
                self.data_dir().display(),
                e
            ))
        })
    }
}
