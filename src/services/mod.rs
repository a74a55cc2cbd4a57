//! Service layer for Runway
//!
//! The service layer sits between the CLI and storage. It validates user
//! input, delegates every balance figure to the projection engine and
//! persists the result.

pub mod account;
pub mod expense;

pub use account::{AccountService, AccountSummary, CreateAccountInput, UpdateAccountInput};
pub use expense::{ExpenseInput, ExpenseService};
