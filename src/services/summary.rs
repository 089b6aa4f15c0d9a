//! Aggregation queries
//!
//! Single-pass filter-and-sum queries over the ledger, each scoped to one
//! owner. The ledger is small and bounded, so nothing is cached or indexed.

use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::{Money, Period, Transaction, TransactionKind};

/// Sums of each transaction kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    pub saving: Money,
    /// Number of records summed
    pub count: usize,
}

impl Totals {
    /// Sum any sequence of records
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        records.into_iter().fold(Self::default(), |mut totals, t| {
            match t.kind {
                TransactionKind::Income => totals.income += t.amount,
                TransactionKind::Expense => totals.expense += t.amount,
                TransactionKind::Saving => totals.saving += t.amount,
            }
            totals.count += 1;
            totals
        })
    }

    pub fn for_owner(ledger: &Ledger, owner: &str) -> Self {
        Self::from_records(ledger.for_owner(owner))
    }

    /// Income minus expense
    pub fn main_balance(&self) -> Money {
        self.income - self.expense
    }

    /// Main balance plus savings
    pub fn total_balance(&self) -> Money {
        self.main_balance() + self.saving
    }
}

/// Balance view for one owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    pub main: Money,
    pub savings: Money,
    pub total: Money,
}

impl From<Totals> for Balance {
    fn from(totals: Totals) -> Self {
        Self {
            main: totals.main_balance(),
            savings: totals.saving,
            total: totals.total_balance(),
        }
    }
}

/// Income and expense for one owner in one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySummary {
    pub period: Period,
    pub income: Money,
    pub expense: Money,
    /// Income minus expense; savings are not counted
    pub balance: Money,
    /// Number of records in the month, savings included
    pub count: usize,
}

/// Read-only queries over a ledger
pub struct SummaryService<'a> {
    ledger: &'a Ledger,
}

impl<'a> SummaryService<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    pub fn totals(&self, owner: &str) -> Totals {
        Totals::for_owner(self.ledger, owner)
    }

    pub fn balance(&self, owner: &str) -> Balance {
        self.totals(owner).into()
    }

    pub fn main_balance(&self, owner: &str) -> Money {
        self.totals(owner).main_balance()
    }

    pub fn total_balance(&self, owner: &str) -> Money {
        self.totals(owner).total_balance()
    }

    pub fn total_income(&self, owner: &str) -> Money {
        self.sum_kind(owner, TransactionKind::Income)
    }

    pub fn total_expense(&self, owner: &str) -> Money {
        self.sum_kind(owner, TransactionKind::Expense)
    }

    pub fn total_saving(&self, owner: &str) -> Money {
        self.sum_kind(owner, TransactionKind::Saving)
    }

    /// Summarize one month, validating the period text like an append does
    pub fn monthly_summary(&self, owner: &str, period: &str) -> LedgerResult<MonthlySummary> {
        let period = Period::parse(period.trim())?;
        Ok(self.monthly_summary_for(owner, period))
    }

    pub fn monthly_summary_for(&self, owner: &str, period: Period) -> MonthlySummary {
        let totals = Totals::from_records(
            self.ledger
                .for_owner(owner)
                .filter(|t| t.period == period),
        );

        MonthlySummary {
            period,
            income: totals.income,
            expense: totals.expense,
            balance: totals.main_balance(),
            count: totals.count,
        }
    }

    /// The owner's records in ledger order
    pub fn history(&self, owner: &str) -> Vec<&'a Transaction> {
        self.ledger.iter().filter(|t| t.is_owned_by(owner)).collect()
    }

    /// Months with at least one record, oldest first
    pub fn periods(&self, owner: &str) -> Vec<Period> {
        let mut periods: Vec<Period> = self.ledger.for_owner(owner).map(|t| t.period).collect();
        periods.sort();
        periods.dedup();
        periods
    }

    fn sum_kind(&self, owner: &str, kind: TransactionKind) -> Money {
        self.ledger
            .for_owner(owner)
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }
}
