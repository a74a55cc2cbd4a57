//! Projection engine
//!
//! Pure functions that project account balances, apply planned expenses and
//! decide whether a new expense is affordable. Nothing here reads the clock,
//! touches storage or mutates its inputs; callers pass the as-of date
//! explicitly and get plain numbers back.
//!
//! Two conventions run through the module:
//!
//! - [`project_balance`] and [`max_affordable`] clamp at zero because they are
//!   display figures.
//! - [`AccountStanding::net_after`], [`balance_with_candidate`] and
//!   [`Affordability::WouldGoNegative`] keep their sign, since a negative value
//!   there is exactly the shortfall the checks exist to surface.

mod affordability;
mod balance;
mod dates;
mod expenses;
mod schedule;

pub use affordability::{
    balance_with_candidate, check_candidate, max_affordable, Affordability, Candidate,
};
pub use balance::project_balance;
pub use dates::months_between;
pub use expenses::{
    account_standing, apply_expenses, expanded_expense_total, occurrences_by, upcoming_total,
    AccountStanding,
};
pub use schedule::{projection_schedule, ScheduleRow};
