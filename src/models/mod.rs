//! Core data models for the finance ledger
//!
//! This module contains the data structures of the ledger domain: accounts,
//! PINs, money amounts, monthly periods and transactions.

pub mod account;
pub mod money;
pub mod period;
pub mod pin;
pub mod transaction;

pub use account::Account;
pub use money::{Money, MoneyParseError};
pub use period::Period;
pub use pin::Pin;
pub use transaction::{Transaction, TransactionKind};
