//! PIN hashing using Argon2id
//!
//! Each hash carries its own random salt and parameters in the PHC string
//! format (`$argon2id$v=19$...`), so the account store needs no extra
//! columns for them.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Pin;

/// Hash a validated PIN with a fresh random salt
pub fn hash_pin(pin: &Pin) -> LedgerResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(pin.as_str().as_bytes(), &salt)
        .map_err(|e| LedgerError::Crypto(format!("PIN hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Check a supplied PIN against a stored PHC hash
///
/// Returns `false` for a malformed hash rather than an error; a corrupt
/// credential must never grant access.
pub fn verify_pin_hash(supplied: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(supplied.as_bytes(), &parsed)
        .is_ok()
}

/// Check whether a string is a well-formed PHC hash
pub fn is_pin_hash(candidate: &str) -> bool {
    PasswordHash::new(candidate).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(s: &str) -> Pin {
        Pin::parse(s).unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_pin(&pin("1234")).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_pin_hash("1234", &hash));
        assert!(!verify_pin_hash("1235", &hash));
    }

    #[test]
    fn test_same_pin_different_salt() {
        let first = hash_pin(&pin("0000")).unwrap();
        let second = hash_pin(&pin("0000")).unwrap();
        assert_ne!(first, second);
        assert!(verify_pin_hash("0000", &first));
        assert!(verify_pin_hash("0000", &second));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_pin_hash("1234", "1234"));
        assert!(!verify_pin_hash("1234", ""));
        assert!(!is_pin_hash("8237462384762"));
    }

    #[test]
    fn test_is_pin_hash() {
        let hash = hash_pin(&pin("9876")).unwrap();
        assert!(is_pin_hash(&hash));
    }
}
