//! Application state
//!
//! One explicit value owning the resolved paths, the settings and the
//! loaded stores. Every operation borrows it instead of reaching for
//! globals.

use log::debug;

use crate::config::{paths::LedgerPaths, settings::Settings};
use crate::error::LedgerResult;
use crate::services::{AccountService, SummaryService, TransactionService};
use crate::storage::{initialize_storage, Storage};

pub struct App {
    paths: LedgerPaths,
    settings: Settings,
    storage: Storage,
}

impl App {
    /// Load settings and all stored data from the data directory
    ///
    /// A fresh directory is initialized with default settings and empty
    /// stores.
    pub fn open(paths: LedgerPaths) -> LedgerResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        initialize_storage(&paths, &settings)?;
        Self::with_settings(paths, settings)
    }

    /// Load stored data using the given settings instead of the settings file
    pub fn with_settings(paths: LedgerPaths, settings: Settings) -> LedgerResult<Self> {
        settings.validate()?;

        let mut storage = Storage::new(paths.clone(), settings.max_transactions)?;
        storage.load_all()?;
        debug!(
            "Opened ledger at {} ({} accounts, {} transactions)",
            paths.base_dir().display(),
            storage.accounts.len(),
            storage.transactions.ledger().len()
        );

        Ok(Self {
            paths,
            settings,
            storage,
        })
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn accounts(&mut self) -> AccountService<'_> {
        AccountService::new(&mut self.storage, &self.settings)
    }

    pub fn transactions(&mut self) -> TransactionService<'_> {
        TransactionService::new(&mut self.storage, &self.settings)
    }

    pub fn summary(&self) -> SummaryService<'_> {
        SummaryService::new(self.storage.transactions.ledger())
    }

    /// Rewrite both stores from memory
    pub fn save_all(&self) -> LedgerResult<()> {
        self.storage.save_all()
    }
}
