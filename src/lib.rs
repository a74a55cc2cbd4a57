//! Runway - savings projections and expense planning
//!
//! This library projects the balance of savings accounts over time from an
//! initial amount, monthly contributions and an annual return, applies
//! planned one-off and monthly expenses against those projections, and
//! checks whether a new expense would take an account below zero.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `projection`: the pure projection engine (no I/O, no clock)
//! - `models`: accounts, expenses, money and ids
//! - `storage`: JSON file storage layer
//! - `services`: validation and the expense submit flow
//! - `reports`: the cross-account dashboard
//! - `display`: plain-text formatting
//! - `cli`: clap command handlers
//! - `config`: paths and settings
//! - `error`: custom error types
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use runway::models::{Account, Money};
//! use runway::projection::project_balance;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let account = Account::new("Goal", start, Money::from_dollars(1000))
//!     .with_monthly_contribution(Money::from_dollars(100));
//!
//! let as_of = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! assert_eq!(project_balance(&account, as_of), 1200.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod projection;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{RunwayError, RunwayResult};
