//! Reports module for Runway
//!
//! Cross-account summaries built on the projection engine.

pub mod dashboard;

pub use dashboard::{
    AllocationSlice, DashboardReport, DashboardRow, DashboardTotals, UpcomingExpense,
};
