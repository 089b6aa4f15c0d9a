//! Validated four-digit PIN

use std::fmt;

use crate::crypto::SecureString;
use crate::error::LedgerError;

/// Number of digits every PIN must have
pub const PIN_LENGTH: usize = 4;

/// A PIN known to be exactly four ASCII digits
///
/// The digits live in a [`SecureString`] and are wiped when the PIN is
/// dropped.
#[derive(Clone)]
pub struct Pin(SecureString);

impl Pin {
    /// Validate raw input as a PIN
    pub fn parse(raw: &str) -> Result<Self, LedgerError> {
        if Self::is_valid(raw) {
            Ok(Self(SecureString::new(raw)))
        } else {
            Err(LedgerError::InvalidPin)
        }
    }

    pub fn is_valid(raw: &str) -> bool {
        raw.len() == PIN_LENGTH && raw.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<SecureString> for Pin {
    type Error = LedgerError;

    fn try_from(raw: SecureString) -> Result<Self, Self::Error> {
        if Self::is_valid(raw.as_str()) {
            Ok(Self(raw))
        } else {
            Err(LedgerError::InvalidPin)
        }
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}
