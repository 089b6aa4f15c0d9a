//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for the menu: the
//! transaction history register and the balance and summary reports.

pub mod report;
pub mod transaction;

pub use report::{format_balance, format_monthly_summary, format_totals};
pub use transaction::{format_history, format_transaction_row};
