//! User settings for the finance ledger
//!
//! Manages ledger capacity, the PIN retry budget and the overdraft policy.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Upper bound for `max_transactions`; transaction ids are `u32`
pub const MAX_TRANSACTIONS_LIMIT: usize = u32::MAX as usize - 1;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Maximum number of transactions the ledger will hold
    #[serde(default = "default_max_transactions")]
    pub max_transactions: usize,

    /// How many PIN entries are allowed before access is denied
    #[serde(default = "default_max_pin_attempts")]
    pub max_pin_attempts: u32,

    /// Reject expenses larger than the current main balance
    #[serde(default = "default_block_overdraft")]
    pub block_overdraft: bool,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_max_transactions() -> usize {
    500
}

fn default_max_pin_attempts() -> u32 {
    3
}

fn default_block_overdraft() -> bool {
    true
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            max_transactions: default_max_transactions(),
            max_pin_attempts: default_max_pin_attempts(),
            block_overdraft: default_block_overdraft(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings: Settings = read_json(paths.settings_file()).map_err(|e| {
            LedgerError::Config(format!("Failed to load settings: {}", e))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Reject settings that would make the ledger unusable
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.max_transactions == 0 {
            return Err(LedgerError::Config(
                "max_transactions must be at least 1".into(),
            ));
        }
        if self.max_transactions > MAX_TRANSACTIONS_LIMIT {
            return Err(LedgerError::Config(format!(
                "max_transactions must be at most {}",
                MAX_TRANSACTIONS_LIMIT
            )));
        }
        if self.max_pin_attempts == 0 {
            return Err(LedgerError::Config(
                "max_pin_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
