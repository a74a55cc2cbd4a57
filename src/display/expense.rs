//! Expense display formatting

use crate::config::settings::Settings;
use crate::models::{Account, Expense};

use super::{fmt_date, truncate};

fn account_label(expense: &Expense, accounts: &[Account]) -> String {
    match expense.account_id {
        None => "(unassigned)".to_string(),
        Some(id) => accounts
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.name.clone())
            .unwrap_or_else(|| "(missing account)".to_string()),
    }
}

/// Format expenses as a table, resolving account names from `accounts`
pub fn format_expense_list(
    expenses: &[Expense],
    accounts: &[Account],
    settings: &Settings,
) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let currency = settings.currency_symbol.as_str();
    let mut output = String::new();
    output.push_str(&format!(
        "{:12}  {:10}  {:24}  {:>12}  {:8}  {}\n",
        "ID", "Due", "Name", "Amount", "Repeats", "Account"
    ));
    output.push_str(&"-".repeat(86));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format!(
            "{:12}  {:10}  {}  {:>12}  {:8}  {}\n",
            expense.id.to_string(),
            fmt_date(expense.due_date, &settings.date_format),
            truncate(&expense.name, 24),
            expense.amount.format_with_symbol(currency),
            if expense.is_recurring { "monthly" } else { "once" },
            account_label(expense, accounts),
        ));
    }

    output
}

/// Format a single expense
pub fn format_expense_details(
    expense: &Expense,
    accounts: &[Account],
    settings: &Settings,
) -> String {
    let currency = settings.currency_symbol.as_str();
    let mut output = String::new();
    output.push_str(&format!("Expense: {}\n", expense.name));
    output.push_str(&format!("  ID:       {}\n", expense.id));
    output.push_str(&format!(
        "  Amount:   {}\n",
        expense.amount.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Due:      {}\n",
        fmt_date(expense.due_date, &settings.date_format)
    ));
    output.push_str(&format!(
        "  Repeats:  {}\n",
        if expense.is_recurring { "monthly" } else { "no" }
    ));
    output.push_str(&format!("  Account:  {}\n", account_label(expense, accounts)));
    output
}
