//! Account store
//!
//! Manages loading and saving accounts to `account.txt`, one
//! `username|pin_hash` line per account. The whole file is rewritten on
//! every save.

use std::path::PathBuf;

use log::{debug, warn};

use crate::crypto::is_pin_hash;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Account;

use super::codec::{decode_line, encode_line, CodecError};
use super::file_io::{read_lines, write_lines_atomic};

const ACCOUNT_FIELDS: usize = 2;

/// Store for account persistence
pub struct AccountStore {
    path: PathBuf,
    accounts: Vec<Account>,
}

impl AccountStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            accounts: Vec::new(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load accounts from disk
    ///
    /// Malformed lines, lines without an Argon2 hash and repeated usernames
    /// are skipped with a warning.
    pub fn load(&mut self) -> LedgerResult<()> {
        let lines = read_lines(&self.path)?;
        let mut accounts: Vec<Account> = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match decode_account(line) {
                Ok(account) if accounts.iter().any(|a| a.username == account.username) => {
                    warn!(
                        "Skipping duplicate account '{}' at {}:{}",
                        account.username,
                        self.path.display(),
                        index + 1
                    );
                }
                Ok(account) => accounts.push(account),
                Err(e) => warn!(
                    "Skipping malformed account line {}:{}: {}",
                    self.path.display(),
                    index + 1,
                    e
                ),
            }
        }

        debug!("Loaded {} accounts from {}", accounts.len(), self.path.display());
        self.accounts = accounts;
        Ok(())
    }

    /// Overwrite the account file with every account
    pub fn save(&self) -> LedgerResult<()> {
        write_lines_atomic(&self.path, self.accounts.iter().map(encode_account))?;
        debug!("Saved {} accounts to {}", self.accounts.len(), self.path.display());
        Ok(())
    }

    pub fn get(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username == username)
    }

    pub fn get_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.username == username)
    }

    pub fn exists(&self, username: &str) -> bool {
        self.get(username).is_some()
    }

    /// Add a new account; usernames are unique
    pub fn insert(&mut self, account: Account) -> LedgerResult<()> {
        if self.exists(&account.username) {
            return Err(LedgerError::duplicate_account(account.username));
        }
        self.accounts.push(account);
        Ok(())
    }

    /// Drop an account whose creation could not be persisted
    pub(crate) fn remove(&mut self, username: &str) -> Option<Account> {
        let index = self.accounts.iter().position(|a| a.username == username)?;
        Some(self.accounts.remove(index))
    }

    pub fn all(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

fn encode_account(account: &Account) -> String {
    encode_line([account.username.as_str(), account.pin_hash()])
}

fn decode_account(line: &str) -> Result<Account, CodecError> {
    let fields = decode_line(line, ACCOUNT_FIELDS)?;
    let [username, pin_hash]: [String; ACCOUNT_FIELDS] = fields
        .try_into()
        .map_err(|_| CodecError::FieldCount {
            expected: ACCOUNT_FIELDS,
            found: 0,
        })?;

    Account::validate_username(&username).map_err(|e| CodecError::InvalidField {
        field: "username",
        reason: e.to_string(),
    })?;
    if !is_pin_hash(&pin_hash) {
        return Err(CodecError::InvalidField {
            field: "pin_hash",
            reason: "not an Argon2 PHC string".into(),
        });
    }

    Ok(Account::from_stored(username, pin_hash))
}
