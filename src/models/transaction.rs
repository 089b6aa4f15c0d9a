//! Transaction model
//!
//! Represents a single income, expense or saving entry in the ledger.
//! Transactions are immutable once appended.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

use super::money::Money;
use super::period::Period;

/// Kind of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in; raises the main balance
    Income,
    /// Money going out; lowers the main balance
    Expense,
    /// Money set aside; counts only toward the total balance
    Saving,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 3] = [Self::Income, Self::Expense, Self::Saving];

    /// Parse a kind from user input or the stored layout
    ///
    /// Surrounding whitespace and letter case are ignored.
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "saving" => Ok(Self::Saving),
            _ => Err(LedgerError::InvalidType(s.trim().to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Saving => "saving",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sequential identifier, starting at 1
    pub id: u32,

    /// Username of the owning account
    pub owner: String,

    pub kind: TransactionKind,

    /// Non-negative amount
    pub amount: Money,

    /// Free-text note (may be empty)
    #[serde(default)]
    pub note: String,

    /// Month the transaction belongs to
    pub period: Period,
}

impl Transaction {
    /// Largest amount a single record may carry (one trillion units)
    pub const MAX_AMOUNT: Money = Money::from_units(1_000_000_000_000);

    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.owner == owner
    }

    /// Amount signed by its effect on the main balance
    ///
    /// Savings do not touch the main balance and contribute zero.
    pub fn main_balance_effect(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
            TransactionKind::Saving => Money::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(kind: TransactionKind, cents: i64) -> Transaction {
        Transaction {
            id: 1,
            owner: "alice".into(),
            kind,
            amount: Money::from_cents(cents),
            note: String::new(),
            period: Period::parse("2024-01").unwrap(),
        }
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(TransactionKind::parse("income").unwrap(), TransactionKind::Income);
        assert_eq!(TransactionKind::parse("Expense").unwrap(), TransactionKind::Expense);
        assert_eq!(TransactionKind::parse(" saving ").unwrap(), TransactionKind::Saving);
        assert!(matches!(
            TransactionKind::parse("transfer"),
            Err(LedgerError::InvalidType(ref s)) if s == "transfer"
        ));
    }

    #[test]
    fn test_kind_display_round_trips() {
        for kind in TransactionKind::ALL {
            assert_eq!(TransactionKind::parse(&kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn test_main_balance_effect() {
        assert_eq!(txn(TransactionKind::Income, 500).main_balance_effect().cents(), 500);
        assert_eq!(txn(TransactionKind::Expense, 500).main_balance_effect().cents(), -500);
        assert!(txn(TransactionKind::Saving, 500).main_balance_effect().is_zero());
    }

    #[test]
    fn test_ownership() {
        let t = txn(TransactionKind::Income, 100);
        assert!(t.is_owned_by("alice"));
        assert!(!t.is_owned_by("Alice"));
    }

    #[test]
    fn test_serialization() {
        let t = txn(TransactionKind::Saving, 2500);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["kind"], "saving");
        assert_eq!(json["period"], "2024-01");
        assert_eq!(json["amount"], 2500);
    }
}
