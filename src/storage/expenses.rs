//! Expense repository for JSON storage
//!
//! Persists expenses to expenses.json. Account links are weak: nothing here
//! checks that a referenced account exists.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::RunwayError;
use crate::models::{AccountId, Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
}

fn by_due_date(a: &Expense, b: &Expense) -> std::cmp::Ordering {
    a.due_date.cmp(&b.due_date).then(a.name.cmp(&b.name))
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<ExpenseId, Expense>>, RunwayError> {
        self.data
            .read()
            .map_err(|e| RunwayError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<ExpenseId, Expense>>, RunwayError> {
        self.data
            .write()
            .map_err(|e| RunwayError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load expenses from disk, replacing anything in memory
    pub fn load(&self) -> Result<(), RunwayError> {
        let file_data: ExpenseData = read_json(&self.path)?;
        let mut data = self.write()?;

        data.clear();
        for expense in file_data.expenses {
            data.insert(expense.id, expense);
        }

        debug!(count = data.len(), "loaded expenses");
        Ok(())
    }

    pub fn save(&self) -> Result<(), RunwayError> {
        let file_data = ExpenseData {
            expenses: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, RunwayError> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// All expenses, earliest due date first
    pub fn get_all(&self) -> Result<Vec<Expense>, RunwayError> {
        let mut expenses: Vec<_> = self.read()?.values().cloned().collect();
        expenses.sort_by(by_due_date);
        Ok(expenses)
    }

    /// Expenses linked to one account, earliest due date first
    pub fn get_by_account(&self, account_id: AccountId) -> Result<Vec<Expense>, RunwayError> {
        let mut expenses: Vec<_> = self
            .read()?
            .values()
            .filter(|e| e.belongs_to(account_id))
            .cloned()
            .collect();
        expenses.sort_by(by_due_date);
        Ok(expenses)
    }

    /// Find an expense by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Expense>, RunwayError> {
        let name_lower = name.trim().to_lowercase();
        Ok(self
            .read()?
            .values()
            .find(|e| e.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Every expense with this name (case-insensitive), earliest due date first
    pub fn get_all_by_name(&self, name: &str) -> Result<Vec<Expense>, RunwayError> {
        let name_lower = name.trim().to_lowercase();
        let mut expenses: Vec<_> = self
            .read()?
            .values()
            .filter(|e| e.name.to_lowercase() == name_lower)
            .cloned()
            .collect();
        expenses.sort_by(by_due_date);
        Ok(expenses)
    }

    /// Expenses whose id starts with the short form `short` (as printed)
    pub fn get_by_short_id(&self, short: &str) -> Result<Vec<Expense>, RunwayError> {
        let mut expenses: Vec<_> = self
            .read()?
            .values()
            .filter(|e| e.id.matches_short(short))
            .cloned()
            .collect();
        expenses.sort_by(by_due_date);
        Ok(expenses)
    }

    pub fn upsert(&self, expense: Expense) -> Result<(), RunwayError> {
        self.write()?.insert(expense.id, expense);
        Ok(())
    }

    pub fn delete(&self, id: ExpenseId) -> Result<bool, RunwayError> {
        Ok(self.write()?.remove(&id).is_some())
    }

    pub fn exists(&self, id: ExpenseId) -> Result<bool, RunwayError> {
        Ok(self.read()?.contains_key(&id))
    }

    /// Clear the account link on every expense drawn from `account_id`
    ///
    /// Returns how many expenses were detached.
    pub fn detach_account(&self, account_id: AccountId) -> Result<usize, RunwayError> {
        let mut data = self.write()?;
        let mut detached = 0;
        for expense in data.values_mut().filter(|e| e.belongs_to(account_id)) {
            expense.account_id = None;
            expense.touch();
            detached += 1;
        }
        Ok(detached)
    }

    pub fn count(&self) -> Result<usize, RunwayError> {
        Ok(self.read()?.len())
    }
}
