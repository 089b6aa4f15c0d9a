//! Transaction service
//!
//! Validates and appends transactions for an account owner, enforcing the
//! overdraft policy and persisting each record as it is added.

use log::{info, warn};

use crate::audit::EntityType;
use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::NewTransaction;
use crate::models::{Money, Period, Transaction, TransactionKind};
use crate::storage::Storage;

use super::summary::Totals;

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct AddTransactionInput {
    pub kind: TransactionKind,
    pub amount: Money,
    pub note: String,
    pub period: Period,
}

impl AddTransactionInput {
    /// Build an input from raw text fields
    ///
    /// Fails with `InvalidType`, `InvalidAmount` or `InvalidDate` for the
    /// first field that doesn't parse.
    pub fn parse(kind: &str, amount: &str, note: &str, period: &str) -> LedgerResult<Self> {
        let kind = TransactionKind::parse(kind)?;
        let amount = parse_amount(amount)?;
        let period = Period::parse(period.trim())?;

        Ok(Self {
            kind,
            amount,
            note: note.to_string(),
            period,
        })
    }
}

/// Parse a non-negative transaction amount no larger than
/// [`Transaction::MAX_AMOUNT`]
pub fn parse_amount(raw: &str) -> LedgerResult<Money> {
    let amount =
        Money::parse(raw).map_err(|_| LedgerError::InvalidAmount(raw.trim().to_string()))?;
    if amount.is_negative() || amount > Transaction::MAX_AMOUNT {
        return Err(LedgerError::InvalidAmount(raw.trim().to_string()));
    }
    Ok(amount)
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a mut Storage,
    settings: &'a Settings,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Append a transaction owned by `owner`
    ///
    /// When overdraft blocking is enabled, an expense larger than the
    /// owner's main balance fails with `InsufficientBalance`.
    pub fn add(&mut self, owner: &str, input: AddTransactionInput) -> LedgerResult<Transaction> {
        if !self.storage.accounts.exists(owner) {
            return Err(LedgerError::AuthenticationFailure(owner.to_string()));
        }
        if input.amount.is_negative() || input.amount > Transaction::MAX_AMOUNT {
            return Err(LedgerError::InvalidAmount(input.amount.to_string()));
        }

        if input.kind == TransactionKind::Expense && self.settings.block_overdraft {
            let available = Totals::for_owner(self.storage.transactions.ledger(), owner).main_balance();
            if input.amount > available {
                return Err(LedgerError::InsufficientBalance {
                    needed: input.amount,
                    available,
                });
            }
        }

        let record = self.storage.transactions.append(NewTransaction {
            owner: owner.to_string(),
            kind: input.kind,
            amount: input.amount,
            note: input.note,
            period: input.period,
        })?;

        info!(
            "Added transaction {} ({} {}) for '{}'",
            record.id, record.kind, record.amount, owner
        );
        if let Err(e) = self.storage.log_create(
            EntityType::Transaction,
            record.id.to_string(),
            Some(&record),
            Some(format!("{} {} {}", record.kind, record.amount, record.period)),
        ) {
            warn!("Failed to write audit entry: {}", e);
        }

        Ok(record)
    }
}
