//! Display formatting for terminal output
//!
//! Plain-text tables for accounts, expenses and projection schedules. Engine
//! figures arrive as `f64` dollars and are rounded to cents here.

pub mod account;
pub mod expense;
pub mod schedule;

pub use account::{format_account_details, format_account_list, format_headroom};
pub use expense::{format_expense_details, format_expense_list};
pub use schedule::format_schedule;

use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::Money;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Round an engine figure to cents and print it with `currency`
pub(crate) fn fmt_amount(value: f64, currency: &str) -> String {
    Money::from_f64_rounded(value).format_with_symbol(currency)
}

/// Format `date` with the user's strftime pattern
///
/// An invalid pattern falls back to `YYYY-MM-DD`.
pub(crate) fn fmt_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.format(FALLBACK_DATE_FORMAT).to_string();
    }
    out
}

/// Pad or cut `s` to exactly `max_len` characters
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
