//! Service layer for the finance ledger
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, the PIN gate and aggregate queries.

pub mod account;
pub mod summary;
pub mod transaction;

pub use account::{AccountService, PinSource};
pub use summary::{Balance, MonthlySummary, SummaryService, Totals};
pub use transaction::{AddTransactionInput, TransactionService};
