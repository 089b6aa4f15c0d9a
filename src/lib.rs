//! finance-ledger - PIN-protected personal finance ledger
//!
//! This library records income, expense and saving transactions for
//! PIN-protected accounts and answers balance and summary queries. Data is
//! kept in flat, line-oriented text files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, PINs, money, transactions)
//! - `ledger`: The in-memory, capacity-bounded transaction sequence
//! - `storage`: Flat-file storage layer
//! - `services`: PIN gate, transaction entry and aggregate queries
//! - `audit`: Audit logging system
//! - `app`: Application state shared by every operation
//! - `cli`: The interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_ledger::app::App;
//! use finance_ledger::config::paths::LedgerPaths;
//!
//! let mut app = App::open(LedgerPaths::new()?)?;
//! app.accounts().create("alice", "1234")?;
//! let balance = app.summary().balance("alice");
//! ```

pub mod app;
pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod services;
pub mod storage;

#[cfg(test)]
mod test_support;

pub use error::{LedgerError, LedgerResult};
