//! Dashboard report
//!
//! Totals across all accounts as of one date: what is there now, what is
//! already planned, and what is left after the plan. Also lists unassigned
//! spending and the share each account holds.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::settings::Settings;
use crate::display::{fmt_amount, fmt_date};
use crate::error::RunwayResult;
use crate::models::{Account, AccountId, Expense, ExpenseId, Money};
use crate::projection::{self, AccountStanding};
use crate::storage::Storage;

/// Accounts at or below this current balance are left out of the allocation
const ALLOCATION_FLOOR: f64 = 0.01;

/// One account's row on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardRow {
    pub account_id: AccountId,
    pub account_name: String,
    pub standing: AccountStanding,
}

/// Share of the positive current balance held by one account
#[derive(Debug, Clone, Serialize)]
pub struct AllocationSlice {
    pub account_name: String,
    pub current: f64,
    /// Fraction of the allocation total, 0.0-1.0
    pub share: f64,
}

/// A future expense as listed on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingExpense {
    pub expense_id: ExpenseId,
    pub name: String,
    pub amount: Money,
    pub due_date: NaiveDate,
    pub is_recurring: bool,
    /// `None` when unassigned or the account no longer exists
    pub account_name: Option<String>,
}

/// Dashboard totals
#[derive(Debug, Clone, Serialize)]
pub struct DashboardTotals {
    pub total_current: f64,
    pub total_upcoming: f64,
    pub net_after: f64,
    /// Expenses due by today that no existing account pays for
    pub unassigned_due: f64,
    /// Future expenses that no existing account pays for, one occurrence each
    pub unassigned_upcoming: f64,
}

/// The dashboard as of one date
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub as_of: NaiveDate,
    pub rows: Vec<DashboardRow>,
    pub totals: DashboardTotals,
    pub allocation: Vec<AllocationSlice>,
    pub upcoming: Vec<UpcomingExpense>,
}

impl DashboardReport {
    /// Generate the dashboard from storage
    pub fn generate(storage: &Storage, as_of: NaiveDate) -> RunwayResult<Self> {
        let accounts = storage.accounts.get_all()?;
        let expenses = storage.expenses.get_all()?;
        Ok(Self::from_records(&accounts, &expenses, as_of))
    }

    /// Build the dashboard from an in-memory snapshot
    pub fn from_records(accounts: &[Account], expenses: &[Expense], as_of: NaiveDate) -> Self {
        let rows: Vec<DashboardRow> = accounts
            .iter()
            .map(|account| DashboardRow {
                account_id: account.id,
                account_name: account.name.clone(),
                standing: projection::account_standing(account, expenses, as_of),
            })
            .collect();

        let total_current: f64 = rows.iter().map(|r| r.standing.current).sum();
        let total_upcoming: f64 = rows.iter().map(|r| r.standing.upcoming).sum();

        let known: HashSet<AccountId> = accounts.iter().map(|a| a.id).collect();
        let is_unassigned =
            |e: &Expense| e.account_id.map_or(true, |id| !known.contains(&id));

        let unassigned_due = expenses
            .iter()
            .filter(|e| is_unassigned(e))
            .map(|e| e.amount.as_f64() * f64::from(projection::occurrences_by(e, as_of)))
            .sum();
        let unassigned_upcoming = expenses
            .iter()
            .filter(|e| is_unassigned(e) && !e.is_due_by(as_of))
            .map(|e| e.amount.as_f64())
            .sum();

        let totals = DashboardTotals {
            total_current,
            total_upcoming,
            net_after: total_current - total_upcoming,
            unassigned_due,
            unassigned_upcoming,
        };

        Self {
            as_of,
            allocation: allocation(&rows),
            upcoming: upcoming(accounts, expenses, as_of),
            rows,
            totals,
        }
    }

    /// Accounts whose planned expenses exceed what they will hold
    pub fn shortfalls(&self) -> impl Iterator<Item = &DashboardRow> {
        self.rows.iter().filter(|r| r.standing.has_shortfall())
    }

    /// Format the report for terminal display
    ///
    /// Uses the currency symbol, date format and upcoming-list length from
    /// `settings`.
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let currency = settings.currency_symbol.as_str();
        let upcoming_limit = settings.upcoming_limit;
        let date = |d: NaiveDate| fmt_date(d, &settings.date_format);
        let fmt = |v: f64| fmt_amount(v, currency);
        let mut output = String::new();

        output.push_str(&format!("Dashboard as of {}\n", date(self.as_of)));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.rows.is_empty() {
            output
                .push_str("No accounts yet. Add an account to see balances and projections.\n");
        } else {
            let totals = &self.totals;
            output.push_str(&format!("Total current:   {:>15}\n", fmt(totals.total_current)));
            output.push_str(&format!("Total upcoming:  {:>15}\n", fmt(totals.total_upcoming)));
            output.push_str(&"-".repeat(33));
            output.push('\n');
            output.push_str(&format!("Net after:       {:>15}\n", fmt(totals.net_after)));
            output.push('\n');

            output.push_str(&format!(
                "{:<28} {:>11} {:>11} {:>11}\n",
                "Account", "Current", "Upcoming", "Net after"
            ));
            output.push_str(&"-".repeat(64));
            output.push('\n');
            for row in &self.rows {
                let flag = if row.standing.has_shortfall() { "!" } else { " " };
                output.push_str(&format!(
                    "{}{:<27} {:>11} {:>11} {:>11}\n",
                    flag,
                    row.account_name,
                    fmt(row.standing.current),
                    fmt(row.standing.upcoming),
                    fmt(row.standing.net_after),
                ));
            }
        }

        if self.totals.unassigned_due > 0.0 || self.totals.unassigned_upcoming > 0.0 {
            output.push('\n');
            output.push_str(&format!(
                "Unassigned: {} due so far, {} upcoming\n",
                fmt(self.totals.unassigned_due),
                fmt(self.totals.unassigned_upcoming)
            ));
        }

        if !self.allocation.is_empty() {
            output.push_str("\nAllocation\n");
            for slice in &self.allocation {
                output.push_str(&format!(
                    "  {:<27} {:>11} {:>6.1}%\n",
                    slice.account_name,
                    fmt(slice.current),
                    slice.share * 100.0
                ));
            }
        }

        if !self.upcoming.is_empty() {
            output.push_str("\nUpcoming expenses\n");
            for expense in self.upcoming.iter().take(upcoming_limit) {
                output.push_str(&format!(
                    "  {:10}  {:<24} {:>11}  {}{}\n",
                    date(expense.due_date),
                    expense.name,
                    expense.amount.format_with_symbol(currency),
                    expense.account_name.as_deref().unwrap_or("(unassigned)"),
                    if expense.is_recurring { "  monthly" } else { "" },
                ));
            }
            if self.upcoming.len() > upcoming_limit {
                output.push_str(&format!(
                    "  ... and {} more\n",
                    self.upcoming.len() - upcoming_limit
                ));
            }
        }

        if self.shortfalls().next().is_some() {
            output.push_str("\n! planned expenses exceed this account's projected balance\n");
        }
        output.push_str("Projections are planning estimates, not a ledger.\n");

        output
    }
}

fn allocation(rows: &[DashboardRow]) -> Vec<AllocationSlice> {
    let positive: Vec<&DashboardRow> = rows
        .iter()
        .filter(|r| r.standing.current > ALLOCATION_FLOOR)
        .collect();
    let total: f64 = positive.iter().map(|r| r.standing.current).sum();

    positive
        .into_iter()
        .map(|r| AllocationSlice {
            account_name: r.account_name.clone(),
            current: r.standing.current,
            share: r.standing.current / total,
        })
        .collect()
}

fn upcoming(
    accounts: &[Account],
    expenses: &[Expense],
    as_of: NaiveDate,
) -> Vec<UpcomingExpense> {
    let mut upcoming: Vec<UpcomingExpense> = expenses
        .iter()
        .filter(|e| !e.is_due_by(as_of))
        .map(|e| UpcomingExpense {
            expense_id: e.id,
            name: e.name.clone(),
            amount: e.amount,
            due_date: e.due_date,
            is_recurring: e.is_recurring,
            account_name: e
                .account_id
                .and_then(|id| accounts.iter().find(|a| a.id == id))
                .map(|a| a.name.clone()),
        })
        .collect();
    upcoming.sort_by(|a, b| a.due_date.cmp(&b.due_date).then(a.name.cmp(&b.name)));
    upcoming
}
