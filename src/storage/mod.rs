//! Storage layer for the finance ledger
//!
//! Flat text files with an escaped `|`-delimited line layout, atomic
//! whole-file rewrites and single-line appends. Files are never held open
//! between operations.
//!
//! Only one running instance is assumed; two processes writing the same
//! data directory interleave their writes unpredictably.

pub mod accounts;
pub mod codec;
pub mod file_io;
pub mod init;
pub mod transactions;

pub use accounts::AccountStore;
pub use init::initialize_storage;
pub use transactions::TransactionStore;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Main storage coordinator that provides access to all stores
pub struct Storage {
    paths: LedgerPaths,
    pub accounts: AccountStore,
    pub transactions: TransactionStore,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance holding at most `capacity` transactions
    pub fn new(paths: LedgerPaths, capacity: usize) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountStore::new(paths.account_file()),
            transactions: TransactionStore::new(paths.finance_file(), capacity),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), LedgerError> {
        self.accounts.load()?;
        self.transactions.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), LedgerError> {
        self.accounts.save()?;
        self.transactions.save()?;
        Ok(())
    }

    /// Record a created entity in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        snapshot: Option<&T>,
        summary: Option<String>,
    ) -> Result<(), LedgerError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, snapshot, summary))
    }

    /// Record a modified entity in the audit log
    pub fn log_update(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        summary: impl Into<String>,
    ) -> Result<(), LedgerError> {
        self.audit
            .log(&AuditEntry::update(entity_type, entity_id, summary))
    }
}
