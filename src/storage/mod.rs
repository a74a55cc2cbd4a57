//! Storage layer for Runway
//!
//! Stands in for the data-access collaborator: it hands the projection engine
//! plain account and expense records and performs inserts, updates and
//! deletes. Data lives in JSON files written atomically.

pub mod accounts;
pub mod expenses;
pub mod file_io;

pub use accounts::AccountRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use tracing::info;

use crate::config::paths::RunwayPaths;
use crate::error::RunwayError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: RunwayPaths,
    pub accounts: AccountRepository,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: RunwayPaths) -> Result<Self, RunwayError> {
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &RunwayPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), RunwayError> {
        self.accounts.load()?;
        self.expenses.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), RunwayError> {
        self.accounts.save()?;
        self.expenses.save()?;
        Ok(())
    }

    /// Write empty data files if this is a fresh data directory
    pub fn initialize(&self) -> Result<(), RunwayError> {
        if !self.paths.accounts_file().exists() {
            self.accounts.save()?;
        }
        if !self.paths.expenses_file().exists() {
            self.expenses.save()?;
        }
        info!(data_dir = %self.paths.data_dir().display(), "initialized storage");
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.accounts_file().exists() && self.paths.expenses_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RunwayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_initialize_writes_empty_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RunwayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        storage.initialize().unwrap();
        assert!(storage.is_initialized());

        storage.load_all().unwrap();
        assert_eq!(storage.accounts.count().unwrap(), 0);
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }
}
