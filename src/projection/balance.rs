//! Gross balance projection
//!
//! Projects an account forward from its start date under monthly
//! contributions and interest, before any expenses are taken out.

use chrono::NaiveDate;

use crate::models::{Account, GrowthTerms};

use super::dates::months_between;

/// Projected balance of `account` on `as_of`, ignoring expenses
///
/// With `reinvest_dividends` each elapsed month adds the contribution and then
/// compounds at the monthly rate. Without it the contributions are summed and a
/// single simple-interest adjustment is applied over the whole period. The two
/// paths intentionally diverge after the first month.
///
/// Dates before the start date return the initial amount. The result is never
/// negative.
pub fn project_balance(account: &Account, as_of: NaiveDate) -> f64 {
    let terms = account.growth_terms();
    if as_of < account.start_date {
        return terms.initial_amount;
    }

    let months = months_between(account.start_date, as_of);
    let balance = if terms.reinvest_dividends {
        compounded(&terms, months)
    } else {
        simple_interest(&terms, months)
    };

    balance.max(0.0)
}

fn compounded(terms: &GrowthTerms, months: u32) -> f64 {
    let monthly_rate = terms.monthly_rate();
    let mut balance = terms.initial_amount;

    for _ in 0..months {
        balance += terms.monthly_contribution;
        if monthly_rate > 0.0 {
            balance *= 1.0 + monthly_rate;
        }
    }

    balance
}

fn simple_interest(terms: &GrowthTerms, months: u32) -> f64 {
    let months = f64::from(months);
    let mut balance = terms.initial_amount + terms.monthly_contribution * months;

    if terms.annual_rate > 0.0 {
        balance += balance * terms.annual_rate * (months / 12.0);
    }

    balance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn growth_account(reinvest: bool) -> Account {
        Account::new("Brokerage", date(2024, 1, 1), Money::from_dollars(1000))
            .with_monthly_contribution(Money::from_dollars(100))
            .with_annual_return_rate(12.0)
            .with_reinvest_dividends(reinvest)
    }

    #[test]
    fn test_flat_account_never_changes() {
        let account = Account::new("Cash", date(2024, 1, 1), Money::from_cents(123456));
        for as_of in [date(2024, 1, 1), date(2024, 7, 9), date(2030, 12, 31)] {
            assert_eq!(project_balance(&account, as_of), 1234.56);
        }
    }

    #[test]
    fn test_before_start_returns_initial_amount() {
        let account = growth_account(true);
        assert_eq!(project_balance(&account, date(2023, 12, 31)), 1000.0);
        assert_eq!(project_balance(&account, date(2000, 1, 1)), 1000.0);
    }

    #[test]
    fn test_compounding_adds_then_grows() {
        let account = growth_account(true);
        assert_relative_eq!(
            project_balance(&account, date(2024, 2, 1)),
            1111.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            project_balance(&account, date(2024, 3, 1)),
            1223.11,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_simple_interest_is_one_flat_adjustment() {
        let account = growth_account(false);
        assert_relative_eq!(
            project_balance(&account, date(2024, 2, 1)),
            1111.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            project_balance(&account, date(2024, 3, 1)),
            1224.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_growth_models_diverge_after_first_month() {
        let compounding = project_balance(&growth_account(true), date(2024, 3, 1));
        let simple = project_balance(&growth_account(false), date(2024, 3, 1));
        assert!((simple - compounding - 0.89).abs() < 1e-9);
    }

    #[test]
    fn test_partial_month_is_not_projected() {
        let account = growth_account(true);
        assert_eq!(
            project_balance(&account, date(2024, 1, 31)),
            project_balance(&account, date(2024, 1, 1))
        );
    }

    #[test]
    fn test_contribution_without_rate() {
        let account = Account::new("Goal", date(2024, 1, 10), Money::zero())
            .with_monthly_contribution(Money::from_dollars(250))
            .with_reinvest_dividends(true);
        assert_eq!(project_balance(&account, date(2025, 1, 10)), 3000.0);
    }

    #[test]
    fn test_projection_is_repeatable() {
        let account = growth_account(true);
        let as_of = date(2031, 6, 15);
        assert_eq!(
            project_balance(&account, as_of).to_bits(),
            project_balance(&account, as_of).to_bits()
        );
    }
}
