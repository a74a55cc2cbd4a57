//! Account repository for JSON storage
//!
//! Keeps accounts in memory and persists them to accounts.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::RunwayError;
use crate::models::{Account, AccountId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AccountData {
    accounts: Vec<Account>,
}

/// Repository for account persistence
pub struct AccountRepository {
    path: PathBuf,
    data: RwLock<HashMap<AccountId, Account>>,
}

impl AccountRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<AccountId, Account>>, RunwayError> {
        self.data
            .read()
            .map_err(|e| RunwayError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<AccountId, Account>>, RunwayError> {
        self.data
            .write()
            .map_err(|e| RunwayError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load accounts from disk, replacing anything in memory
    pub fn load(&self) -> Result<(), RunwayError> {
        let file_data: AccountData = read_json(&self.path)?;
        let mut data = self.write()?;

        data.clear();
        for account in file_data.accounts {
            data.insert(account.id, account);
        }

        debug!(count = data.len(), "loaded accounts");
        Ok(())
    }

    /// Save accounts to disk
    pub fn save(&self) -> Result<(), RunwayError> {
        let file_data = AccountData {
            accounts: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: AccountId) -> Result<Option<Account>, RunwayError> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// All accounts, oldest start date first, then by name
    pub fn get_all(&self) -> Result<Vec<Account>, RunwayError> {
        let mut accounts: Vec<_> = self.read()?.values().cloned().collect();
        accounts.sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.name.cmp(&b.name)));
        Ok(accounts)
    }

    /// Find an account by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Account>, RunwayError> {
        let name_lower = name.trim().to_lowercase();
        Ok(self
            .read()?
            .values()
            .find(|a| a.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Accounts whose id starts with the short form `short` (as printed)
    pub fn get_by_short_id(&self, short: &str) -> Result<Vec<Account>, RunwayError> {
        Ok(self
            .read()?
            .values()
            .filter(|a| a.id.matches_short(short))
            .cloned()
            .collect())
    }

    /// Insert or update an account
    pub fn upsert(&self, account: Account) -> Result<(), RunwayError> {
        self.write()?.insert(account.id, account);
        Ok(())
    }

    /// Remove an account, returning whether it existed
    pub fn delete(&self, id: AccountId) -> Result<bool, RunwayError> {
        Ok(self.write()?.remove(&id).is_some())
    }

    pub fn exists(&self, id: AccountId) -> Result<bool, RunwayError> {
        Ok(self.read()?.contains_key(&id))
    }

    /// Check if an account name is already taken by another account
    pub fn name_exists(
        &self,
        name: &str,
        exclude_id: Option<AccountId>,
    ) -> Result<bool, RunwayError> {
        let name_lower = name.trim().to_lowercase();
        Ok(self
            .read()?
            .values()
            .any(|a| a.name.to_lowercase() == name_lower && Some(a.id) != exclude_id))
    }

    pub fn count(&self) -> Result<usize, RunwayError> {
        Ok(self.read()?.len())
    }
}
