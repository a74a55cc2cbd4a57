//! Affordability of a new or edited expense
//!
//! These checks are planning guidance computed from the user's own records.
//! They say nothing about what a real bank account will hold.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Account, Expense, ExpenseId, Money};

use super::balance::project_balance;
use super::expenses::occurrences_by;

/// An expense the user is about to save
///
/// `id` is set when editing so the stored version is replaced rather than
/// counted twice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub id: Option<ExpenseId>,
    pub amount: Money,
    pub due_date: NaiveDate,
    pub is_recurring: bool,
}

impl Candidate {
    pub fn new(amount: Money, due_date: NaiveDate, is_recurring: bool) -> Self {
        Self {
            id: None,
            amount,
            due_date,
            is_recurring,
        }
    }

    pub fn replacing(mut self, id: ExpenseId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            id: Some(expense.id),
            amount: expense.amount,
            due_date: expense.due_date,
            is_recurring: expense.is_recurring,
        }
    }
}

/// Outcome of checking a candidate against its account
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Affordability {
    /// The account stays at or above zero on the due date
    Affordable { projected: f64 },
    /// The account does not exist yet on the due date
    BeforeAccountStart { start_date: NaiveDate },
    /// The account would be below zero on the due date
    WouldGoNegative { projected: f64, date: NaiveDate },
}

impl Affordability {
    pub fn is_affordable(&self) -> bool {
        matches!(self, Self::Affordable { .. })
    }
}

/// Quick headroom estimate for a single expense due on `due_date`
///
/// Everything else on the account due by that date is counted once, without
/// recurring expansion. `ignore` excludes the expense being edited. Clamped to
/// zero; use [`check_candidate`] for the accept/reject decision.
pub fn max_affordable(
    account: &Account,
    expenses: &[Expense],
    due_date: NaiveDate,
    ignore: Option<ExpenseId>,
) -> f64 {
    let gross = project_balance(account, due_date);

    let spent_before: f64 = expenses
        .iter()
        .filter(|e| e.belongs_to(account.id) && Some(e.id) != ignore && e.is_due_by(due_date))
        .map(|e| e.amount.as_f64())
        .sum();

    (gross - spent_before).max(0.0)
}

/// Fully expanded balance on the candidate's due date with the candidate in place
///
/// The result is signed.
pub fn balance_with_candidate(
    account: &Account,
    expenses: &[Expense],
    candidate: &Candidate,
) -> f64 {
    let at = candidate.due_date;

    let others: f64 = expenses
        .iter()
        .filter(|e| e.belongs_to(account.id) && candidate.id != Some(e.id))
        .map(|e| e.amount.as_f64() * f64::from(occurrences_by(e, at)))
        .sum();

    // By its own due date the candidate has occurred exactly once, recurring or not
    project_balance(account, at) - others - candidate.amount.as_f64()
}

/// Decide whether `candidate` can be charged to `account`
///
/// The decision is taken on the balance rounded to whole cents, so float noise
/// around zero never turns an exact payoff into a rejection.
pub fn check_candidate(
    account: &Account,
    expenses: &[Expense],
    candidate: &Candidate,
) -> Affordability {
    if candidate.due_date < account.start_date {
        return Affordability::BeforeAccountStart {
            start_date: account.start_date,
        };
    }

    let projected = balance_with_candidate(account, expenses, candidate);
    if Money::from_f64_rounded(projected).is_negative() {
        Affordability::WouldGoNegative {
            projected,
            date: candidate.due_date,
        }
    } else {
        Affordability::Affordable { projected }
    }
}
