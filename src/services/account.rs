//! Account service
//!
//! The PIN gate: account creation, PIN verification with a bounded retry
//! budget, and PIN reset. Every successful change rewrites the account file
//! and is recorded in the audit log.

use log::{info, warn};

use crate::audit::EntityType;
use crate::config::Settings;
use crate::crypto::SecureString;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, Pin};
use crate::storage::Storage;

/// Source of PIN entries for the interactive flows
pub trait PinSource {
    /// Read one PIN entry; an exhausted source yields an empty entry
    fn read_pin(&mut self, prompt: &str) -> LedgerResult<SecureString>;

    /// Tell the user why an entry was rejected
    fn notify(&mut self, _message: &str) -> LedgerResult<()> {
        Ok(())
    }
}

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a mut Storage,
    settings: &'a Settings,
}

impl<'a> AccountService<'a> {
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    pub fn find(&self, username: &str) -> Option<&Account> {
        self.storage.accounts.get(username)
    }

    /// Create a new account with an already-entered PIN
    pub fn create(&mut self, username: &str, pin: &str) -> LedgerResult<Account> {
        self.ensure_available(username)?;
        let pin = Pin::parse(pin)?;
        self.insert_account(username, &pin)
    }

    /// Create a new account, prompting for the PIN
    ///
    /// The username is checked before any PIN is requested. A malformed PIN
    /// is re-requested until the retry budget runs out.
    pub fn create_interactive(
        &mut self,
        username: &str,
        pins: &mut dyn PinSource,
    ) -> LedgerResult<Account> {
        self.ensure_available(username)?;
        let pin = self.read_valid_pin(pins, "Set 4-digit PIN: ")?;
        self.insert_account(username, &pin)
    }

    /// Prompt for the PIN of `username` until it matches or the budget runs out
    pub fn authenticate(&self, username: &str, pins: &mut dyn PinSource) -> LedgerResult<Account> {
        let account = self
            .storage
            .accounts
            .get(username)
            .ok_or_else(|| LedgerError::AuthenticationFailure(username.to_string()))?;

        let max_attempts = self.settings.max_pin_attempts;
        for attempt in 1..=max_attempts {
            let supplied = pins.read_pin("Enter PIN: ")?;
            if account.verify_pin(&supplied) {
                info!("Authenticated '{}'", username);
                return Ok(account.clone());
            }

            warn!(
                "Failed PIN attempt {}/{} for '{}'",
                attempt, max_attempts, username
            );
            if attempt < max_attempts {
                pins.notify(&format!(
                    "Wrong PIN ({} attempt(s) left)",
                    max_attempts - attempt
                ))?;
            }
        }

        Err(LedgerError::TooManyAttempts {
            attempts: max_attempts,
        })
    }

    /// Replace the PIN of `username` after verifying the old one
    pub fn reset_pin(&mut self, username: &str, old_pin: &str, new_pin: &str) -> LedgerResult<()> {
        self.check_old_pin(username, old_pin)?;
        let new_pin = Pin::parse(new_pin)?;
        self.store_new_pin(username, &new_pin)
    }

    /// Interactive PIN reset
    ///
    /// The old PIN gets a single attempt; the new PIN is re-requested while
    /// it is malformed, within the retry budget.
    pub fn reset_pin_interactive(
        &mut self,
        username: &str,
        pins: &mut dyn PinSource,
    ) -> LedgerResult<()> {
        if self.find(username).is_none() {
            return Err(LedgerError::AuthenticationFailure(username.to_string()));
        }
        let old_pin = pins.read_pin("Enter current PIN: ")?;
        self.check_old_pin(username, &old_pin)?;

        let new_pin = self.read_valid_pin(pins, "Enter new 4-digit PIN: ")?;
        self.store_new_pin(username, &new_pin)
    }

    fn ensure_available(&self, username: &str) -> LedgerResult<()> {
        Account::validate_username(username)?;
        if self.storage.accounts.exists(username) {
            return Err(LedgerError::duplicate_account(username));
        }
        Ok(())
    }

    fn read_valid_pin(&self, pins: &mut dyn PinSource, prompt: &str) -> LedgerResult<Pin> {
        let max_attempts = self.settings.max_pin_attempts;
        for attempt in 1..=max_attempts {
            match Pin::try_from(pins.read_pin(prompt)?) {
                Ok(pin) => return Ok(pin),
                Err(e) => {
                    warn!("Rejected malformed PIN (attempt {}/{})", attempt, max_attempts);
                    pins.notify(&e.to_string())?;
                }
            }
        }
        Err(LedgerError::InvalidPin)
    }

    fn insert_account(&mut self, username: &str, pin: &Pin) -> LedgerResult<Account> {
        let account = Account::new(username, pin)?;
        self.storage.accounts.insert(account.clone())?;

        if let Err(e) = self.storage.accounts.save() {
            self.storage.accounts.remove(username);
            return Err(e);
        }

        info!("Created account '{}'", username);
        if let Err(e) = self.storage.log_create::<()>(
            EntityType::Account,
            username,
            None,
            Some("account created".to_string()),
        ) {
            warn!("Failed to write audit entry: {}", e);
        }

        Ok(account)
    }

    fn check_old_pin(&self, username: &str, old_pin: &str) -> LedgerResult<()> {
        let account = self
            .find(username)
            .ok_or_else(|| LedgerError::AuthenticationFailure(username.to_string()))?;

        if !account.verify_pin(old_pin) {
            warn!("PIN reset for '{}' refused: wrong PIN", username);
            return Err(LedgerError::WrongPin);
        }
        Ok(())
    }

    fn store_new_pin(&mut self, username: &str, new_pin: &Pin) -> LedgerResult<()> {
        let account = self
            .storage
            .accounts
            .get_mut(username)
            .ok_or_else(|| LedgerError::AuthenticationFailure(username.to_string()))?;

        let previous = account.clone();
        account.set_pin(new_pin)?;

        if let Err(e) = self.storage.accounts.save() {
            if let Some(account) = self.storage.accounts.get_mut(username) {
                *account = previous;
            }
            return Err(e);
        }

        info!("Reset PIN for '{}'", username);
        if let Err(e) = self
            .storage
            .log_update(EntityType::Account, username, "PIN reset")
        {
            warn!("Failed to write audit entry: {}", e);
        }
        Ok(())
    }
}
