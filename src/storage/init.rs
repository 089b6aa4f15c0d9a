//! Storage initialization
//!
//! Handles first-run setup of the data directory.

use log::info;

use crate::config::{paths::LedgerPaths, settings::Settings};
use crate::error::LedgerError;

use super::file_io::write_lines_atomic;

/// Initialize storage for a fresh installation
///
/// Writes the settings file and empty account and transaction files when
/// they don't exist yet. Existing files are left untouched. Returns whether
/// anything was created.
pub fn initialize_storage(paths: &LedgerPaths, settings: &Settings) -> Result<bool, LedgerError> {
    paths.ensure_directories()?;
    let mut created = false;

    if !paths.settings_file().exists() {
        settings.save(paths)?;
        created = true;
    }

    for file in [paths.account_file(), paths.finance_file()] {
        if !file.exists() {
            write_lines_atomic(&file, std::iter::empty::<&str>())?;
            created = true;
        }
    }

    if created {
        info!("Initialized ledger data directory at {}", paths.base_dir().display());
    }
    Ok(created)
}
