//! Expense service
//!
//! Owns the submit flow for expenses: field validation, the account start
//! date rule and the affordability check all run before anything is saved.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::{RunwayError, RunwayResult};
use crate::models::{Account, AccountId, Expense, ExpenseId, Money};
use crate::projection::{self, Affordability, Candidate};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Expense fields as submitted by the user
#[derive(Debug, Clone)]
pub struct ExpenseInput {
    pub name: String,
    pub amount: Money,
    pub due_date: NaiveDate,
    pub account_id: Option<AccountId>,
    pub is_recurring: bool,
}

impl ExpenseInput {
    /// Prefill from a stored expense, for edits that change only some fields
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            name: expense.name.clone(),
            amount: expense.amount,
            due_date: expense.due_date,
            account_id: expense.account_id,
            is_recurring: expense.is_recurring,
        }
    }
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and save a new expense
    pub fn create(&self, input: ExpenseInput) -> RunwayResult<Expense> {
        let mut expense = Expense::new(input.name.trim(), input.amount, input.due_date);
        expense.account_id = input.account_id;
        expense.is_recurring = input.is_recurring;

        self.validate(&expense)?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        info!(expense = %expense.id, name = %expense.name, "created expense");
        Ok(expense)
    }

    /// Validate and save changes to an existing expense
    pub fn update(&self, id: ExpenseId, input: ExpenseInput) -> RunwayResult<Expense> {
        let mut expense = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| RunwayError::expense_not_found(id.to_string()))?;

        expense.name = input.name.trim().to_string();
        expense.amount = input.amount;
        expense.due_date = input.due_date;
        expense.account_id = input.account_id;
        expense.is_recurring = input.is_recurring;

        self.validate(&expense)?;
        expense.touch();

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        info!(expense = %expense.id, "updated expense");
        Ok(expense)
    }

    pub fn delete(&self, id: ExpenseId) -> RunwayResult<Expense> {
        let expense = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| RunwayError::expense_not_found(id.to_string()))?;

        self.storage.expenses.delete(id)?;
        self.storage.expenses.save()?;

        info!(expense = %id, "deleted expense");
        Ok(expense)
    }

    /// Find an expense by full ID, name or the short ID printed by the CLI
    ///
    /// Names are not unique; a name or short ID shared by several expenses
    /// is an error rather than an arbitrary pick.
    pub fn find(&self, identifier: &str) -> RunwayResult<Option<Expense>> {
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return self.storage.expenses.get(id);
        }

        let mut named = self.storage.expenses.get_all_by_name(identifier)?;
        match named.len() {
            0 => {}
            1 => return Ok(named.pop()),
            n => return Err(RunwayError::ambiguous("Expense", identifier, n)),
        }

        let mut matches = self.storage.expenses.get_by_short_id(identifier)?;
        match matches.len() {
            0 | 1 => Ok(matches.pop()),
            n => Err(RunwayError::ambiguous("Expense", identifier, n)),
        }
    }

    pub fn require(&self, identifier: &str) -> RunwayResult<Expense> {
        self.find(identifier)?
            .ok_or_else(|| RunwayError::expense_not_found(identifier))
    }

    pub fn list(&self) -> RunwayResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    pub fn list_for_account(&self, account_id: AccountId) -> RunwayResult<Vec<Expense>> {
        self.storage.expenses.get_by_account(account_id)
    }

    /// Headroom for a single expense on `account` due on `due_date`
    ///
    /// `ignore` excludes the expense being edited.
    pub fn max_affordable(
        &self,
        account: &Account,
        due_date: NaiveDate,
        ignore: Option<ExpenseId>,
    ) -> RunwayResult<f64> {
        let expenses = self.storage.expenses.get_by_account(account.id)?;
        Ok(projection::max_affordable(account, &expenses, due_date, ignore))
    }

    /// Run the affordability check without saving anything
    ///
    /// Returns `None` for expenses with no account, or whose account no
    /// longer exists.
    pub fn check(&self, expense: &Expense) -> RunwayResult<Option<Affordability>> {
        let Some(account_id) = expense.account_id else {
            return Ok(None);
        };
        let Some(account) = self.storage.accounts.get(account_id)? else {
            return Ok(None);
        };

        let expenses = self.storage.expenses.get_by_account(account_id)?;
        Ok(Some(projection::check_candidate(
            &account,
            &expenses,
            &Candidate::from_expense(expense),
        )))
    }

    fn validate(&self, expense: &Expense) -> RunwayResult<()> {
        expense
            .validate()
            .map_err(|e| RunwayError::Validation(e.to_string()))?;

        let Some(account_id) = expense.account_id else {
            return Ok(());
        };

        let account = self
            .storage
            .accounts
            .get(account_id)?
            .ok_or_else(|| RunwayError::account_not_found(account_id.to_string()))?;

        let expenses = self.storage.expenses.get_by_account(account_id)?;
        let candidate = Candidate::from_expense(expense);
        match projection::check_candidate(&account, &expenses, &candidate) {
            Affordability::Affordable { .. } => Ok(()),
            Affordability::BeforeAccountStart { start_date } => {
                Err(RunwayError::Validation(format!(
                    "This account starts on {}. Expense date must be on or after that.",
                    start_date
                )))
            }
            Affordability::WouldGoNegative { projected, date } => {
                warn!(
                    account = %account.name,
                    projected,
                    %date,
                    "expense rejected, account would go negative"
                );
                Err(RunwayError::WouldGoNegative {
                    account: account.name,
                    balance: projected,
                    date,
                })
            }
        }
    }
}
