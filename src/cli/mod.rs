//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod dashboard;
pub mod expense;

pub use account::{handle_account_command, AccountCommands};
pub use dashboard::handle_dashboard_command;
pub use expense::{handle_expense_command, ExpenseCommands};

use chrono::NaiveDate;

use crate::error::{RunwayError, RunwayResult};
use crate::models::Money;

/// Parse a `YYYY-MM-DD` argument
pub fn parse_date(value: &str) -> RunwayResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        RunwayError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", value))
    })
}

/// Parse an amount argument such as "1000", "12.50" or "$1,200"
pub fn parse_money(value: &str) -> RunwayResult<Money> {
    Money::parse(value).map_err(|e| {
        RunwayError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '1000.00' or '1000'. Error: {}",
            value, e
        ))
    })
}

/// Arguments that clear an optional field when passed to `edit`
fn is_clear_keyword(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "" | "none")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(parse_date("03/01/2024").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("1,200.50").unwrap(), Money::from_cents(120_050));
        assert!(parse_money("abc").is_err());
    }

    #[test]
    fn test_clear_keyword() {
        assert!(is_clear_keyword("none"));
        assert!(is_clear_keyword("None"));
        assert!(!is_clear_keyword("HYSA"));
    }
}
