//! Expense model
//!
//! A dated cost, optionally drawn from an account and optionally repeating
//! every month from its due date onward.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, ExpenseId};
use super::money::Money;

/// A planned one-time or monthly expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Display name (e.g., "Car insurance")
    pub name: String,

    /// Amount per occurrence, always positive
    pub amount: Money,

    /// Date of the first (or only) occurrence
    pub due_date: NaiveDate,

    /// Account the expense is paid from; may dangle after the account is removed
    #[serde(default)]
    pub account_id: Option<AccountId>,

    /// Repeats every month from `due_date`, with no end date
    #[serde(default)]
    pub is_recurring: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new unassigned one-time expense
    pub fn new(name: impl Into<String>, amount: Money, due_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            due_date,
            account_id: None,
            is_recurring: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn for_account(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    pub fn recurring(mut self) -> Self {
        self.is_recurring = true;
        self
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// True when the first occurrence falls on or before `date`
    pub fn is_due_by(&self, date: NaiveDate) -> bool {
        self.due_date <= date
    }

    /// True when the expense is drawn from the given account
    pub fn belongs_to(&self, account_id: AccountId) -> bool {
        self.account_id == Some(account_id)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if name.len() > 100 {
            return Err(ExpenseValidationError::NameTooLong(name.len()));
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cadence = if self.is_recurring { "monthly from" } else { "due" };
        write!(f, "{} {} {} {}", self.name, self.amount, cadence, self.due_date)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NameTooLong(usize),
    NonPositiveAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Please enter an expense name."),
            Self::NameTooLong(len) => {
                write!(f, "Expense name too long ({} chars, max 100)", len)
            }
            Self::NonPositiveAmount => write!(f, "Enter a positive amount."),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
