//! Audit trail for the finance ledger
//!
//! Records account creation, PIN resets and appended transactions in an
//! append-only log (`audit.log`), one JSON object per line.
//!
//! - `AuditEntry`: timestamp, operation, entity information and an
//!   optional snapshot of the entity.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//!
//! Account snapshots are never recorded; the log must not contain PIN
//! hashes.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
