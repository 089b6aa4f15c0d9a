//! Account model
//!
//! An account is a username paired with the hash of its four-digit PIN.

use std::fmt;

use crate::crypto::{hash_pin, verify_pin_hash};
use crate::error::{LedgerError, LedgerResult};

use super::pin::Pin;

/// A PIN-protected ledger account
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    /// Unique account name
    pub username: String,

    /// Salted Argon2id hash of the PIN (PHC string)
    pin_hash: String,
}

impl Account {
    /// Create a new account, hashing the PIN
    pub fn new(username: impl Into<String>, pin: &Pin) -> LedgerResult<Self> {
        let username = username.into();
        Self::validate_username(&username)?;

        Ok(Self {
            username,
            pin_hash: hash_pin(pin)?,
        })
    }

    /// Rebuild an account from its stored form
    pub fn from_stored(username: impl Into<String>, pin_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            pin_hash: pin_hash.into(),
        }
    }

    pub fn pin_hash(&self) -> &str {
        &self.pin_hash
    }

    /// Check a supplied PIN; never mutates the account
    pub fn verify_pin(&self, supplied: &str) -> bool {
        Pin::is_valid(supplied) && verify_pin_hash(supplied, &self.pin_hash)
    }

    /// Replace the stored PIN hash
    pub fn set_pin(&mut self, pin: &Pin) -> LedgerResult<()> {
        self.pin_hash = hash_pin(pin)?;
        Ok(())
    }

    /// Validate a username
    pub fn validate_username(username: &str) -> LedgerResult<()> {
        if username.trim().is_empty() {
            return Err(LedgerError::Validation("Username cannot be empty".into()));
        }
        if username.trim() != username {
            return Err(LedgerError::Validation(
                "Username cannot start or end with whitespace".into(),
            ));
        }
        if username.chars().any(char::is_control) {
            return Err(LedgerError::Validation(
                "Username cannot contain control characters".into(),
            ));
        }
        Ok(())
    }
}

// Never print the hash
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(s: &str) -> Pin {
        Pin::parse(s).unwrap()
    }

    #[test]
    fn test_new_account_verifies_its_pin() {
        let account = Account::new("alice", &pin("1234")).unwrap();
        assert_eq!(account.username, "alice");
        assert!(account.verify_pin("1234"));
        assert!(!account.verify_pin("4321"));
        assert!(!account.verify_pin("12345"));
    }

    #[test]
    fn test_pin_is_not_stored_in_plaintext() {
        let account = Account::new("alice", &pin("1234")).unwrap();
        assert!(!account.pin_hash().contains("1234"));
    }

    #[test]
    fn test_set_pin() {
        let mut account = Account::new("bob", &pin("1111")).unwrap();
        account.set_pin(&pin("2222")).unwrap();
        assert!(account.verify_pin("2222"));
        assert!(!account.verify_pin("1111"));
    }

    #[test]
    fn test_username_validation() {
        assert!(Account::validate_username("alice").is_ok());
        assert!(Account::validate_username("mary jane").is_ok());
        assert!(Account::validate_username("").is_err());
        assert!(Account::validate_username("   ").is_err());
        assert!(Account::validate_username(" alice").is_err());
        assert!(Account::validate_username("al\nice").is_err());
    }

    #[test]
    fn test_debug_hides_hash() {
        let account = Account::new("alice", &pin("1234")).unwrap();
        let debug = format!("{:?}", account);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("argon2"));
    }
}
