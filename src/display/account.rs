//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::config::settings::Settings;
use crate::models::{Expense, Money};
use crate::services::account::AccountSummary;

use super::{fmt_amount, fmt_date};

/// Format a list of accounts with their headline figures as a table
pub fn format_account_list(summaries: &[AccountSummary], settings: &Settings) -> String {
    if summaries.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let currency = settings.currency_symbol.as_str();

    let name_width = summaries
        .iter()
        .map(|s| s.account.name.len())
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<10}  {:>12}  {:>12}  {:>12}\n",
        "Name",
        "Since",
        "Current",
        "Upcoming",
        "Net after",
        name_width = name_width,
    ));

    let separator = format!(
        "{:-<name_width$}  {:-<10}  {:->12}  {:->12}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    );
    output.push_str(&separator);

    for summary in summaries {
        let standing = &summary.standing;
        output.push_str(&format!(
            "{:<name_width$}  {:<10}  {:>12}  {:>12}  {:>12}{}\n",
            summary.account.name,
            fmt_date(summary.account.start_date, &settings.date_format),
            fmt_amount(standing.current, currency),
            fmt_amount(standing.upcoming, currency),
            fmt_amount(standing.net_after, currency),
            if standing.has_shortfall() { "  shortfall" } else { "" },
            name_width = name_width,
        ));
    }

    let total_current: f64 = summaries.iter().map(|s| s.standing.current).sum();
    let total_upcoming: f64 = summaries.iter().map(|s| s.standing.upcoming).sum();

    output.push_str(&separator);
    output.push_str(&format!(
        "{:<name_width$}  {:<10}  {:>12}  {:>12}  {:>12}\n",
        "TOTAL",
        "",
        fmt_amount(total_current, currency),
        fmt_amount(total_upcoming, currency),
        fmt_amount(total_current - total_upcoming, currency),
        name_width = name_width,
    ));

    output
}

/// Format a single account's details, including its linked expenses
pub fn format_account_details(
    summary: &AccountSummary,
    expenses: &[Expense],
    settings: &Settings,
) -> String {
    let currency = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();
    let account = &summary.account;
    let standing = &summary.standing;

    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  ID:             {}\n", account.id));
    output.push_str(&format!(
        "  Start date:     {}\n",
        fmt_date(account.start_date, date_format)
    ));
    output.push_str(&format!(
        "  Initial amount: {}\n",
        account.initial_amount.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Contribution:   {}\n",
        account
            .monthly_contribution
            .map(|m| format!("{} / month", m.format_with_symbol(currency)))
            .unwrap_or_else(|| "none".to_string())
    ));
    output.push_str(&format!(
        "  Annual return:  {}\n",
        account
            .annual_return_rate
            .map(|r| format!("{}%", r))
            .unwrap_or_else(|| "none".to_string())
    ));
    output.push_str(&format!(
        "  Growth:         {}\n",
        if account.reinvest_dividends {
            "compounded monthly"
        } else {
            "simple interest"
        }
    ));

    output.push('\n');
    let figures = [
        ("Projected:", summary.gross),
        ("Current:", standing.current),
        ("Upcoming:", standing.upcoming),
        ("Net after:", standing.net_after),
    ];
    for (label, value) in figures {
        output.push_str(&format!("  {:<11} {:>12}\n", label, fmt_amount(value, currency)));
    }
    if standing.has_shortfall() {
        output.push_str("  Planned expenses exceed the projected balance.\n");
    }

    if !expenses.is_empty() {
        output.push('\n');
        output.push_str(&format!("  Expenses ({}):\n", expenses.len()));
        for expense in expenses {
            output.push_str(&format!(
                "    {}  {:<24} {:>12}{}\n",
                fmt_date(expense.due_date, date_format),
                expense.name,
                expense.amount.format_with_symbol(currency),
                if expense.is_recurring { "  monthly" } else { "" }
            ));
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        account.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        account.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

/// Headroom line printed by `expense afford`
pub fn format_headroom(account_name: &str, headroom: f64, currency: &str) -> String {
    format!(
        "{} can cover up to {} on that date.\n",
        account_name,
        Money::from_f64_rounded(headroom).format_with_symbol(currency)
    )
}
