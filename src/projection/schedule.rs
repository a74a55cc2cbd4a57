//! Month-by-month projection rows for one account

use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::models::{Account, Expense};

use super::balance::project_balance;
use super::expenses::expanded_expense_total;

/// One point on an account's projected path
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub date: NaiveDate,
    /// Projected balance before expenses
    pub gross: f64,
    /// Expenses paid out by `date`, recurring ones expanded
    pub expenses_to_date: f64,
    /// `gross - expenses_to_date`, signed
    pub net: f64,
}

/// Project `account` at `from` and at each of the following `months` month steps
///
/// Steps that land past the end of a shorter month are pinned to its last day.
pub fn projection_schedule(
    account: &Account,
    expenses: &[Expense],
    from: NaiveDate,
    months: u32,
) -> Vec<ScheduleRow> {
    (0..=months)
        .filter_map(|step| from.checked_add_months(Months::new(step)))
        .map(|date| {
            let gross = project_balance(account, date);
            let expenses_to_date = expanded_expense_total(account, expenses, date);
            ScheduleRow {
                date,
                gross,
                expenses_to_date,
                net: gross - expenses_to_date,
            }
        })
        .collect()
}
