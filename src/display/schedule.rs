//! Projection schedule formatting

use crate::config::settings::Settings;
use crate::models::Money;
use crate::projection::ScheduleRow;

use super::{fmt_amount, fmt_date};

/// Format month-by-month projection rows
pub fn format_schedule(account_name: &str, rows: &[ScheduleRow], settings: &Settings) -> String {
    let currency = settings.currency_symbol.as_str();
    let mut output = String::new();
    output.push_str(&format!("Projection: {}\n", account_name));
    output.push_str(&format!(
        "{:10}  {:>14}  {:>14}  {:>14}\n",
        "Date", "Projected", "Expenses", "Net"
    ));
    output.push_str(&"-".repeat(58));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{:10}  {:>14}  {:>14}  {:>14}{}\n",
            fmt_date(row.date, &settings.date_format),
            fmt_amount(row.gross, currency),
            fmt_amount(row.expenses_to_date, currency),
            fmt_amount(row.net, currency),
            if Money::from_f64_rounded(row.net).is_negative() {
                "  !"
            } else {
                ""
            }
        ));
    }

    output
}
