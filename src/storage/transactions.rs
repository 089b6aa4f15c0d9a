//! Transaction store
//!
//! Owns the in-memory [`Ledger`] and mirrors it to `finance.txt`, one
//! `owner|id|kind|amount|note|period` line per record. New records are
//! appended one line at a time; [`TransactionStore::save`] rewrites the
//! whole file. Lines that fail to parse on load are kept verbatim and
//! written back in place, so a rewrite never drops them.

use std::path::PathBuf;

use log::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{Ledger, NewTransaction};
use crate::models::{Money, Period, Transaction, TransactionKind};

use super::codec::{decode_line, encode_line, CodecError};
use super::file_io::{append_line, read_lines, write_lines_atomic};

const TRANSACTION_FIELDS: usize = 6;

/// Store for transaction persistence
pub struct TransactionStore {
    path: PathBuf,
    ledger: Ledger,
    /// Unparseable lines with the number of records that preceded them
    skipped: Vec<(usize, String)>,
}

impl TransactionStore {
    pub fn new(path: PathBuf, capacity: usize) -> Self {
        Self {
            path,
            ledger: Ledger::new(capacity),
            skipped: Vec::new(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Parse the transaction file into the ledger
    ///
    /// Malformed lines are left out of the ledger with a warning. More
    /// records than the ledger capacity is an error.
    pub fn load(&mut self) -> LedgerResult<()> {
        let lines = read_lines(&self.path)?;
        let mut records = Vec::with_capacity(lines.len());
        let mut skipped = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match decode_transaction(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(
                        "Skipping malformed transaction line {}:{}: {}",
                        self.path.display(),
                        index + 1,
                        e
                    );
                    skipped.push((records.len(), line));
                }
            }
        }

        self.ledger = Ledger::from_records(records, self.ledger.capacity())?;
        self.skipped = skipped;
        debug!(
            "Loaded {} transactions from {} ({} skipped)",
            self.ledger.len(),
            self.path.display(),
            self.skipped.len()
        );
        Ok(())
    }

    /// Number of lines left out of the ledger by the last load
    pub fn skipped_lines(&self) -> usize {
        self.skipped.len()
    }

    /// Rewrite the whole transaction file from the ledger
    pub fn save(&self) -> LedgerResult<()> {
        write_lines_atomic(&self.path, self.file_lines())?;
        debug!(
            "Saved {} transactions to {}",
            self.ledger.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Encoded records with the skipped lines restored at their positions
    fn file_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.ledger.len() + self.skipped.len());
        let mut skipped = self.skipped.iter().peekable();

        for (index, record) in self.ledger.iter().enumerate() {
            while let Some((_, raw)) = skipped.next_if(|(position, _)| *position == index) {
                lines.push(raw.clone());
            }
            lines.push(encode_transaction(record));
        }
        lines.extend(skipped.map(|(_, raw)| raw.clone()));

        lines
    }

    /// Append a record to the ledger and its line to the file
    ///
    /// If the file cannot be written the record is taken back out of the
    /// ledger, so memory and disk stay in step.
    pub fn append(&mut self, new: NewTransaction) -> LedgerResult<Transaction> {
        let record = self.ledger.append(new)?.clone();

        if let Err(e) = append_line(&self.path, &encode_transaction(&record)) {
            self.ledger.pop_last();
            return Err(e);
        }
        Ok(record)
    }
}

fn encode_transaction(record: &Transaction) -> String {
    encode_line([
        record.owner.clone(),
        record.id.to_string(),
        record.kind.to_string(),
        record.amount.to_plain_string(),
        record.note.clone(),
        record.period.to_string(),
    ])
}

fn decode_transaction(line: &str) -> Result<Transaction, CodecError> {
    let fields = decode_line(line, TRANSACTION_FIELDS)?;
    let [owner, id, kind, amount, note, period]: [String; TRANSACTION_FIELDS] =
        fields.try_into().map_err(|_| CodecError::FieldCount {
            expected: TRANSACTION_FIELDS,
            found: 0,
        })?;

    let invalid = |field: &'static str, reason: String| CodecError::InvalidField { field, reason };

    if owner.is_empty() {
        return Err(invalid("owner", "empty".into()));
    }
    let id: u32 = id
        .parse()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| invalid("id", format!("'{}' is not a positive integer", id)))?;
    let kind = TransactionKind::parse(&kind).map_err(|e| invalid("kind", e.to_string()))?;
    let amount = Money::parse(&amount).map_err(|e| invalid("amount", e.to_string()))?;
    if amount.is_negative() || amount > Transaction::MAX_AMOUNT {
        return Err(invalid("amount", LedgerError::InvalidAmount(amount.to_string()).to_string()));
    }
    let period = Period::parse(&period).map_err(|e| invalid("period", e.to_string()))?;

    Ok(Transaction {
        id,
        owner,
        kind,
        amount,
        note,
        period,
    })
}
