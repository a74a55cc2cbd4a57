//! Core data models for Runway
//!
//! Accounts, expenses and the supporting id and money types. These are the
//! plain records the projection engine consumes.

pub mod account;
pub mod expense;
pub mod ids;
pub mod money;

pub use account::{Account, AccountValidationError, GrowthTerms};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::{AccountId, ExpenseId};
pub use money::{Money, MoneyParseError};
