//! Monthly period representation
//!
//! A period is a calendar month written `YYYY-MM`. It is both a transaction
//! attribute and the filter for monthly summaries, so parsing is strict and
//! shared by both.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// A calendar month such as "2024-05"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: u16,
    month: u8,
}

impl Period {
    /// Create a period, validating the month
    pub fn new(year: u16, month: u8) -> Result<Self, LedgerError> {
        if !(1..=12).contains(&month) || year > 9999 {
            return Err(LedgerError::InvalidDate(format!("{:04}-{:02}", year, month)));
        }
        Ok(Self { year, month })
    }

    /// Parse a `YYYY-MM` string
    ///
    /// The input must be exactly 7 bytes with '-' at index 4, ASCII digits
    /// elsewhere, and a month between 01 and 12.
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        let invalid = || LedgerError::InvalidDate(s.to_string());
        let bytes = s.as_bytes();

        if bytes.len() != 7 || bytes[4] != b'-' {
            return Err(invalid());
        }

        let (year, month) = (&s[..4], &s[5..]);
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(year) || !all_digits(month) {
            return Err(invalid());
        }

        let year: u16 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }

    /// Check a string without building a period
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// The period containing today's local date
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year().clamp(0, 9999) as u16,
            month: today.month() as u8,
        }
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Period {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}
