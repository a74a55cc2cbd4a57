//! Account service
//!
//! Account CRUD with form-level validation, plus the per-account headline
//! figures computed by the projection engine.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{RunwayError, RunwayResult};
use crate::models::{Account, AccountId, Money};
use crate::projection::{self, AccountStanding, ScheduleRow};
use crate::storage::Storage;

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
}

/// Fields of a new account as entered by the user
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    pub name: String,
    pub start_date: NaiveDate,
    pub initial_amount: Money,
    pub monthly_contribution: Option<Money>,
    pub annual_return_rate: Option<f64>,
    pub reinvest_dividends: bool,
}

/// Changes to an existing account; `None` leaves a field alone
///
/// The nested options on the nullable fields distinguish "leave alone"
/// (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct UpdateAccountInput {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub initial_amount: Option<Money>,
    pub monthly_contribution: Option<Option<Money>>,
    pub annual_return_rate: Option<Option<f64>>,
    pub reinvest_dividends: Option<bool>,
}

impl UpdateAccountInput {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.start_date.is_none()
            && self.initial_amount.is_none()
            && self.monthly_contribution.is_none()
            && self.annual_return_rate.is_none()
            && self.reinvest_dividends.is_none()
    }
}

/// An account together with its headline figures
#[derive(Debug, Clone)]
pub struct AccountSummary {
    pub account: Account,
    pub standing: AccountStanding,
    /// Projected balance before expenses
    pub gross: f64,
}

impl<'a> AccountService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new account
    pub fn create(&self, input: CreateAccountInput) -> RunwayResult<Account> {
        let name = input.name.trim();

        if self.storage.accounts.name_exists(name, None)? {
            return Err(RunwayError::Duplicate {
                entity_type: "Account",
                identifier: name.to_string(),
            });
        }

        let mut account = Account::new(name, input.start_date, input.initial_amount)
            .with_reinvest_dividends(input.reinvest_dividends);
        account.monthly_contribution = input.monthly_contribution;
        account.annual_return_rate = input.annual_return_rate;

        account
            .validate()
            .map_err(|e| RunwayError::Validation(e.to_string()))?;

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        info!(account = %account.id, name = %account.name, "created account");
        Ok(account)
    }

    pub fn get(&self, id: AccountId) -> RunwayResult<Option<Account>> {
        self.storage.accounts.get(id)
    }

    /// Find an account by name, full ID or the short ID printed by the CLI
    pub fn find(&self, identifier: &str) -> RunwayResult<Option<Account>> {
        if let Some(account) = self.storage.accounts.get_by_name(identifier)? {
            return Ok(Some(account));
        }

        if let Ok(id) = identifier.parse::<AccountId>() {
            return self.storage.accounts.get(id);
        }

        let mut matches = self.storage.accounts.get_by_short_id(identifier)?;
        match matches.len() {
            0 | 1 => Ok(matches.pop()),
            n => Err(RunwayError::ambiguous("Account", identifier, n)),
        }
    }

    /// Like [`AccountService::find`] but missing accounts are an error
    pub fn require(&self, identifier: &str) -> RunwayResult<Account> {
        self.find(identifier)?
            .ok_or_else(|| RunwayError::account_not_found(identifier))
    }

    pub fn list(&self) -> RunwayResult<Vec<Account>> {
        self.storage.accounts.get_all()
    }

    /// Headline figures for one account as of `today`
    pub fn summary(&self, account: &Account, today: NaiveDate) -> RunwayResult<AccountSummary> {
        let expenses = self.storage.expenses.get_by_account(account.id)?;
        Ok(AccountSummary {
            account: account.clone(),
            standing: projection::account_standing(account, &expenses, today),
            gross: projection::project_balance(account, today),
        })
    }

    /// Headline figures for every account as of `today`
    pub fn list_with_summaries(&self, today: NaiveDate) -> RunwayResult<Vec<AccountSummary>> {
        self.list()?
            .iter()
            .map(|account| self.summary(account, today))
            .collect()
    }

    /// Month-by-month projection starting at `from`
    pub fn schedule(
        &self,
        account: &Account,
        from: NaiveDate,
        months: u32,
    ) -> RunwayResult<Vec<ScheduleRow>> {
        let expenses = self.storage.expenses.get_by_account(account.id)?;
        Ok(projection::projection_schedule(account, &expenses, from, months))
    }

    /// Update an account
    pub fn update(&self, id: AccountId, changes: UpdateAccountInput) -> RunwayResult<Account> {
        let mut account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| RunwayError::account_not_found(id.to_string()))?;

        if let Some(name) = changes.name {
            let name = name.trim().to_string();
            if self.storage.accounts.name_exists(&name, Some(id))? {
                return Err(RunwayError::Duplicate {
                    entity_type: "Account",
                    identifier: name,
                });
            }
            account.name = name;
        }

        if let Some(start_date) = changes.start_date {
            self.ensure_no_expense_before(id, start_date)?;
            account.start_date = start_date;
        }
        if let Some(initial_amount) = changes.initial_amount {
            account.initial_amount = initial_amount;
        }
        if let Some(contribution) = changes.monthly_contribution {
            account.monthly_contribution = contribution;
        }
        if let Some(rate) = changes.annual_return_rate {
            account.annual_return_rate = rate;
        }
        if let Some(reinvest) = changes.reinvest_dividends {
            account.reinvest_dividends = reinvest;
        }

        account
            .validate()
            .map_err(|e| RunwayError::Validation(e.to_string()))?;
        account.touch();

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        info!(account = %account.id, "updated account");
        Ok(account)
    }

    /// Delete an account and detach the expenses that referenced it
    ///
    /// The expenses themselves are kept and become unassigned.
    pub fn delete(&self, id: AccountId) -> RunwayResult<Account> {
        let account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| RunwayError::account_not_found(id.to_string()))?;

        self.storage.accounts.delete(id)?;
        let detached = self.storage.expenses.detach_account(id)?;
        self.storage.save_all()?;

        info!(account = %id, detached, "deleted account");
        Ok(account)
    }

    fn ensure_no_expense_before(&self, id: AccountId, start_date: NaiveDate) -> RunwayResult<()> {
        let expenses = self.storage.expenses.get_by_account(id)?;
        match expenses.iter().find(|e| e.due_date < start_date) {
            Some(early) => Err(RunwayError::Validation(format!(
                "Expense '{}' is due on {}, before the new start date {}.",
                early.name, early.due_date, start_date
            ))),
            None => Ok(()),
        }
    }
}
