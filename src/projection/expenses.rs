//! Expense aggregation against a projected balance
//!
//! An expense is "past" once its due date is on or before the as-of date, so
//! something due today already counts against today's balance. Past recurring
//! expenses are expanded to one deduction per elapsed month including the
//! first. Future expenses are only reported as a one-occurrence "upcoming" sum.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Account, Expense, Money};

use super::balance::project_balance;
use super::dates::months_between;

/// How many times `expense` has come due by `as_of`
pub fn occurrences_by(expense: &Expense, as_of: NaiveDate) -> u32 {
    if !expense.is_due_by(as_of) {
        0
    } else if expense.is_recurring {
        months_between(expense.due_date, as_of) + 1
    } else {
        1
    }
}

/// Total drawn from `account` by `as_of`, with recurring expenses expanded
///
/// Expenses linked to other accounts, unassigned expenses and expenses whose
/// account no longer exists are all ignored.
pub fn expanded_expense_total(account: &Account, expenses: &[Expense], as_of: NaiveDate) -> f64 {
    expenses
        .iter()
        .filter(|e| e.belongs_to(account.id))
        .map(|e| e.amount.as_f64() * f64::from(occurrences_by(e, as_of)))
        .sum()
}

/// Subtract everything `account` has paid out by `as_of` from `balance`
///
/// The result keeps its sign; a negative value is a shortfall.
pub fn apply_expenses(
    balance: f64,
    account: &Account,
    expenses: &[Expense],
    as_of: NaiveDate,
) -> f64 {
    balance - expanded_expense_total(account, expenses, as_of)
}

/// Sum of expenses on `account` still in the future, one occurrence each
pub fn upcoming_total(account: &Account, expenses: &[Expense], as_of: NaiveDate) -> f64 {
    expenses
        .iter()
        .filter(|e| e.belongs_to(account.id) && !e.is_due_by(as_of))
        .map(|e| e.amount.as_f64())
        .sum()
}

/// The three headline figures shown for an account
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccountStanding {
    /// Projected balance today minus everything already paid out
    pub current: f64,
    /// Future expenses, one occurrence each
    pub upcoming: f64,
    /// `current - upcoming`; negative signals a planned shortfall
    pub net_after: f64,
}

impl AccountStanding {
    /// True when `net_after` is below zero once rounded to cents
    pub fn has_shortfall(&self) -> bool {
        Money::from_f64_rounded(self.net_after).is_negative()
    }
}

/// Compute the headline figures for `account` as of `today`
pub fn account_standing(
    account: &Account,
    expenses: &[Expense],
    today: NaiveDate,
) -> AccountStanding {
    let current = apply_expenses(project_balance(account, today), account, expenses, today);
    let upcoming = upcoming_total(account, expenses, today);

    AccountStanding {
        current,
        upcoming,
        net_after: current - upcoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn flat_account(initial: i64) -> Account {
        Account::new("Checking", date(2024, 1, 1), Money::from_dollars(initial))
    }

    #[test]
    fn test_one_time_expense_counts_once() {
        let account = flat_account(1000);
        let expenses = vec![
            Expense::new("Laptop", Money::from_dollars(300), date(2024, 2, 1))
                .for_account(account.id),
        ];
        assert_eq!(apply_expenses(1000.0, &account, &expenses, date(2025, 1, 1)), 700.0);
    }

    #[test]
    fn test_recurring_expense_includes_first_occurrence() {
        let account = flat_account(1000);
        let expenses = vec![Expense::new("Gym", Money::from_dollars(100), date(2024, 1, 1))
            .for_account(account.id)
            .recurring()];

        let as_of = date(2024, 4, 1);
        let balance = project_balance(&account, as_of);
        assert_eq!(apply_expenses(balance, &account, &expenses, as_of), 600.0);
    }

    #[test]
    fn test_due_today_is_past_not_upcoming() {
        let account = flat_account(500);
        let today = date(2024, 6, 1);
        let expenses = vec![
            Expense::new("Due today", Money::from_dollars(50), today).for_account(account.id),
            Expense::new("Tomorrow", Money::from_dollars(20), date(2024, 6, 2))
                .for_account(account.id),
        ];

        let standing = account_standing(&account, &expenses, today);
        assert_eq!(standing.current, 450.0);
        assert_eq!(standing.upcoming, 20.0);
        assert_eq!(standing.net_after, 430.0);
    }

    #[test]
    fn test_upcoming_counts_recurring_once() {
        let account = flat_account(500);
        let expenses = vec![Expense::new("Streaming", Money::from_dollars(15), date(2024, 9, 1))
            .for_account(account.id)
            .recurring()];

        assert_eq!(upcoming_total(&account, &expenses, date(2024, 6, 1)), 15.0);
    }

    #[test]
    fn test_net_after_keeps_sign() {
        let account = flat_account(100);
        let expenses = vec![
            Expense::new("Trip", Money::from_dollars(400), date(2024, 12, 1))
                .for_account(account.id),
        ];

        let standing = account_standing(&account, &expenses, date(2024, 6, 1));
        assert_eq!(standing.net_after, -300.0);
        assert!(standing.has_shortfall());
    }

    #[test]
    fn test_unassigned_and_dangling_expenses_are_ignored() {
        let account = flat_account(1000);
        let expenses = vec![
            Expense::new("Unassigned", Money::from_dollars(100), date(2024, 2, 1)),
            Expense::new("Deleted account", Money::from_dollars(100), date(2024, 2, 1))
                .for_account(AccountId::new()),
        ];

        let standing = account_standing(&account, &expenses, date(2024, 6, 1));
        assert_eq!(standing.current, 1000.0);
        assert_eq!(standing.upcoming, 0.0);
    }

    #[test]
    fn test_occurrences_by() {
        let expense = Expense::new("Rent", Money::from_dollars(1), date(2024, 1, 31)).recurring();
        assert_eq!(occurrences_by(&expense, date(2024, 1, 30)), 0);
        assert_eq!(occurrences_by(&expense, date(2024, 1, 31)), 1);
        assert_eq!(occurrences_by(&expense, date(2024, 2, 29)), 1);
        assert_eq!(occurrences_by(&expense, date(2024, 3, 31)), 3);
    }
}
