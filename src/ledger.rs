//! In-memory transaction ledger
//!
//! An ordered, capacity-bounded sequence of transactions. Ids are assigned
//! sequentially, one past the highest id held, so a clean ledger gives the
//! n-th record id n. The ledger performs no I/O; persistence is handled by
//! [`crate::storage::TransactionStore`].

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Period, Transaction, TransactionKind};

/// Fields of a transaction before it is given an id
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub owner: String,
    pub kind: TransactionKind,
    pub amount: Money,
    pub note: String,
    pub period: Period,
}

/// Ordered sequence of transactions with an explicit capacity
#[derive(Debug, Clone)]
pub struct Ledger {
    records: Vec<Transaction>,
    capacity: usize,
    next_id: u32,
}

impl Ledger {
    /// Create an empty ledger holding at most `capacity` records
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
            next_id: 1,
        }
    }

    /// Build a ledger from already-persisted records
    ///
    /// Records keep their stored ids. Numbering continues after the highest
    /// stored id, which may leave gaps where records were lost.
    pub fn from_records(records: Vec<Transaction>, capacity: usize) -> LedgerResult<Self> {
        if records.len() > capacity {
            return Err(LedgerError::CapacityExceeded { capacity });
        }
        let next_id = records
            .iter()
            .map(|t| t.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(LedgerError::CapacityExceeded { capacity })?;

        Ok(Self {
            records,
            capacity,
            next_id,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// The id the next appended record will receive
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Append a record, assigning the next sequential id
    pub fn append(&mut self, new: NewTransaction) -> LedgerResult<&Transaction> {
        if self.is_full() {
            return Err(LedgerError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if new.amount.is_negative() || new.amount > Transaction::MAX_AMOUNT {
            return Err(LedgerError::InvalidAmount(new.amount.to_string()));
        }
        let following = self
            .next_id
            .checked_add(1)
            .ok_or(LedgerError::CapacityExceeded {
                capacity: self.capacity,
            })?;

        let record = Transaction {
            id: self.next_id,
            owner: new.owner,
            kind: new.kind,
            amount: new.amount,
            note: new.note,
            period: new.period,
        };
        self.records.push(record);
        self.next_id = following;

        Ok(&self.records[self.records.len() - 1])
    }

    /// Take back the most recent record when persisting it failed
    pub(crate) fn pop_last(&mut self) -> Option<Transaction> {
        let record = self.records.pop()?;
        self.next_id = record.id;
        Some(record)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.records.iter()
    }

    /// Records belonging to one owner, in ledger order
    pub fn for_owner<'a>(&'a self, owner: &'a str) -> impl Iterator<Item = &'a Transaction> + 'a {
        self.records.iter().filter(move |t| t.is_owned_by(owner))
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.records
    }
}
