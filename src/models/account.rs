//! Account model
//!
//! An account is a pool of money (HYSA, brokerage, travel fund) that starts on
//! a given date with an initial amount and optionally grows through monthly
//! contributions and an annual return rate.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// A savings, investment, or goal account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Display name (e.g., "Travel Fund")
    pub name: String,

    /// Date the projection starts from; expenses may not be due before it
    pub start_date: NaiveDate,

    /// Balance on `start_date`
    pub initial_amount: Money,

    /// Amount added at every monthly step; `None` means no contribution
    #[serde(default)]
    pub monthly_contribution: Option<Money>,

    /// Annual return in percent (0-100); `None` means no growth
    #[serde(default)]
    pub annual_return_rate: Option<f64>,

    /// Compound monthly when true, flat simple interest when false
    #[serde(default)]
    pub reinvest_dividends: bool,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    pub updated_at: DateTime<Utc>,
}

/// Growth parameters with all optional fields resolved to concrete numbers
///
/// Every projection works from these, so a missing contribution or rate is
/// decided exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthTerms {
    pub initial_amount: f64,
    pub monthly_contribution: f64,
    /// Annual rate as a fraction (12% -> 0.12)
    pub annual_rate: f64,
    pub reinvest_dividends: bool,
}

impl GrowthTerms {
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 12.0
    }
}

impl Account {
    /// Create a new account with no contribution and no growth
    pub fn new(name: impl Into<String>, start_date: NaiveDate, initial_amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            name: name.into(),
            start_date,
            initial_amount,
            monthly_contribution: None,
            annual_return_rate: None,
            reinvest_dividends: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_monthly_contribution(mut self, contribution: Money) -> Self {
        self.monthly_contribution = Some(contribution);
        self
    }

    pub fn with_annual_return_rate(mut self, percent: f64) -> Self {
        self.annual_return_rate = Some(percent);
        self
    }

    pub fn with_reinvest_dividends(mut self, reinvest: bool) -> Self {
        self.reinvest_dividends = reinvest;
        self
    }

    /// Mark the account as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Resolve the optional growth fields to concrete values
    pub fn growth_terms(&self) -> GrowthTerms {
        GrowthTerms {
            initial_amount: self.initial_amount.as_f64(),
            monthly_contribution: self
                .monthly_contribution
                .map(|m| m.as_f64())
                .unwrap_or(0.0),
            annual_rate: self.annual_return_rate.unwrap_or(0.0) / 100.0,
            reinvest_dividends: self.reinvest_dividends,
        }
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(name.len()));
        }

        if self.initial_amount.is_negative() {
            return Err(AccountValidationError::NegativeInitialAmount);
        }

        if self
            .monthly_contribution
            .is_some_and(|m| m.is_negative())
        {
            return Err(AccountValidationError::NegativeContribution);
        }

        if let Some(rate) = self.annual_return_rate {
            if !(0.0..=100.0).contains(&rate) {
                return Err(AccountValidationError::RateOutOfRange(rate));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (since {})", self.name, self.start_date)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeInitialAmount,
    NegativeContribution,
    RateOutOfRange(f64),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Please enter an account name."),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
            Self::NegativeInitialAmount => {
                write!(f, "Initial amount must be zero or positive.")
            }
            Self::NegativeContribution => {
                write!(f, "Monthly contribution must be zero or positive.")
            }
            Self::RateOutOfRange(rate) => write!(
                f,
                "Annual return rate must be between 0 and 100 (got {}).",
                rate
            ),
        }
    }
}

impl std::error::Error for AccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_account_has_no_growth() {
        let account = Account::new("HYSA", date(2024, 1, 15), Money::from_dollars(1000));
        assert_eq!(account.name, "HYSA");
        assert!(account.monthly_contribution.is_none());
        assert!(account.annual_return_rate.is_none());
        assert!(!account.reinvest_dividends);
    }

    #[test]
    fn test_growth_terms_resolve_missing_fields_to_zero() {
        let account = Account::new("HYSA", date(2024, 1, 15), Money::from_dollars(1000));
        let terms = account.growth_terms();
        assert_eq!(terms.initial_amount, 1000.0);
        assert_eq!(terms.monthly_contribution, 0.0);
        assert_eq!(terms.annual_rate, 0.0);
    }

    #[test]
    fn test_growth_terms_convert_percent() {
        let account = Account::new("Brokerage", date(2024, 1, 1), Money::from_dollars(1000))
            .with_monthly_contribution(Money::from_dollars(100))
            .with_annual_return_rate(12.0)
            .with_reinvest_dividends(true);
        let terms = account.growth_terms();
        assert_eq!(terms.monthly_contribution, 100.0);
        assert_eq!(terms.annual_rate, 0.12);
        assert!((terms.monthly_rate() - 0.01).abs() < 1e-15);
        assert!(terms.reinvest_dividends);
    }

    #[test]
    fn test_validation() {
        let mut account = Account::new("Valid", date(2024, 1, 1), Money::zero());
        assert!(account.validate().is_ok());

        account.name = "   ".into();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyName));

        account.name = "a".repeat(101);
        assert!(matches!(
            account.validate(),
            Err(AccountValidationError::NameTooLong(101))
        ));

        account.name = "Valid".into();
        account.initial_amount = Money::from_cents(-1);
        assert_eq!(
            account.validate(),
            Err(AccountValidationError::NegativeInitialAmount)
        );

        account.initial_amount = Money::zero();
        account.monthly_contribution = Some(Money::from_cents(-500));
        assert_eq!(
            account.validate(),
            Err(AccountValidationError::NegativeContribution)
        );

        account.monthly_contribution = None;
        account.annual_return_rate = Some(100.5);
        assert!(matches!(
            account.validate(),
            Err(AccountValidationError::RateOutOfRange(_))
        ));

        account.annual_return_rate = Some(100.0);
        assert!(account.validate().is_ok());
    }

    #[test]
    fn test_serialization_defaults_optional_fields() {
        let account = Account::new("Test", date(2024, 6, 1), Money::from_dollars(50));
        let mut json: serde_json::Value = serde_json::to_value(&account).unwrap();
        let obj = json.as_object_mut().unwrap();
        obj.remove("monthly_contribution");
        obj.remove("annual_return_rate");
        obj.remove("reinvest_dividends");

        let back: Account = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, account.id);
        assert!(back.monthly_contribution.is_none());
        assert!(!back.reinvest_dividends);
    }

    #[test]
    fn test_display() {
        let account = Account::new("Travel", date(2024, 6, 1), Money::zero());
        assert_eq!(account.to_string(), "Travel (since 2024-06-01)");
    }
}
