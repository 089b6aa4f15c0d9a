//! Custom error types for the finance ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every menu action recovers from these
//! locally; only startup failures reach `main`.

use thiserror::Error;

use crate::models::Money;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors (unreadable or unwritable ledger files)
    #[error("Storage error: {0}")]
    Storage(String),

    /// PIN hashing errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Generic validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// PIN is not exactly four decimal digits
    #[error("Invalid PIN: must be exactly 4 digits")]
    InvalidPin,

    /// Transaction type is not income, expense or saving
    #[error("Invalid type '{0}': expected income, expense or saving")]
    InvalidType(String),

    /// Period is not a valid YYYY-MM month
    #[error("Invalid date '{0}': expected YYYY-MM with month 01-12")]
    InvalidDate(String),

    /// Amount could not be parsed or is negative
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    /// The named account does not exist
    #[error("Authentication failed: unknown account '{0}'")]
    AuthenticationFailure(String),

    /// The supplied PIN did not match
    #[error("Wrong PIN")]
    WrongPin,

    /// The retry budget for PIN entry was exhausted
    #[error("Too many attempts ({attempts}); access denied")]
    TooManyAttempts { attempts: u32 },

    /// An expense would drive the main balance below zero
    #[error("Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Money, available: Money },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// The ledger has reached its configured maximum record count
    #[error("Ledger is full: capacity of {capacity} transactions reached")]
    CapacityExceeded { capacity: usize },
}

impl LedgerError {
    /// Create a "duplicate" error for accounts
    pub fn duplicate_account(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Check if this error came from malformed user input
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::InvalidPin
                | Self::InvalidType(_)
                | Self::InvalidDate(_)
                | Self::InvalidAmount(_)
        )
    }

    /// Check if this error denied access to an account
    pub fn is_authentication(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailure(_) | Self::WrongPin | Self::TooManyAttempts { .. }
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_duplicate_account_error() {
        let err = LedgerError::duplicate_account("alice");
        assert_eq!(err.to_string(), "Account already exists: alice");
    }

    #[test]
    fn test_insufficient_balance_error() {
        let err = LedgerError::InsufficientBalance {
            needed: Money::from_cents(50000),
            available: Money::from_cents(30000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance: need $500.00, have $300.00"
        );
    }

    #[test]
    fn test_classification() {
        assert!(LedgerError::InvalidPin.is_input());
        assert!(LedgerError::InvalidDate("2024-13".into()).is_input());
        assert!(!LedgerError::WrongPin.is_input());

        assert!(LedgerError::WrongPin.is_authentication());
        assert!(LedgerError::TooManyAttempts { attempts: 3 }.is_authentication());
        assert!(LedgerError::AuthenticationFailure("bob".into()).is_authentication());
        assert!(!LedgerError::CapacityExceeded { capacity: 500 }.is_authentication());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
