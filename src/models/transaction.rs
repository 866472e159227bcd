//! Transaction model
//!
//! Ledger rows for borrows and returns. A borrow and its matching return are
//! two separate rows, linked only by user, book and order in the ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential transaction identifier ("T001", "T002", ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Build the identifier for the given 1-based sequence number
    pub fn sequential(number: usize) -> Self {
        Self(format!("T{:03}", number))
    }

    /// Wrap an identifier loaded from disk as-is
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A date column in the ledger
///
/// Text that is not an ISO date is kept verbatim so the row still counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LedgerDate {
    Day(NaiveDate),
    Unparsed(String),
}

impl LedgerDate {
    /// Parse a `YYYY-MM-DD` field, keeping anything else as text
    pub fn parse(field: &str) -> Self {
        match NaiveDate::parse_from_str(field, "%Y-%m-%d") {
            Ok(day) => Self::Day(day),
            Err(_) => Self::Unparsed(field.to_string()),
        }
    }
}

impl From<NaiveDate> for LedgerDate {
    fn from(day: NaiveDate) -> Self {
        Self::Day(day)
    }
}

impl fmt::Display for LedgerDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(day) => write!(f, "{}", day.format("%Y-%m-%d")),
            Self::Unparsed(text) => f.write_str(text),
        }
    }
}

/// Kind of ledger row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Borrow,
    Return,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Borrow => write!(f, "Borrow"),
            Self::Return => write!(f, "Return"),
        }
    }
}

/// A single ledger row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// Username of the borrower
    pub username: String,

    /// Catalog identifier of the book
    pub book_id: String,

    /// Set on borrow rows
    pub date_borrowed: Option<LedgerDate>,

    /// Set on return rows
    pub date_returned: Option<LedgerDate>,
}

impl Transaction {
    /// Create a borrow row
    pub fn borrow(
        id: TransactionId,
        username: impl Into<String>,
        book_id: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            book_id: book_id.into(),
            date_borrowed: Some(date.into()),
            date_returned: None,
        }
    }

    /// Create a return row
    pub fn return_of(
        id: TransactionId,
        username: impl Into<String>,
        book_id: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            book_id: book_id.into(),
            date_borrowed: None,
            date_returned: Some(date.into()),
        }
    }

    /// A row with no return date counts against the borrow limit
    pub fn is_open(&self) -> bool {
        self.date_returned.is_none()
    }

    pub fn kind(&self) -> TransactionKind {
        if self.date_returned.is_some() {
            TransactionKind::Return
        } else {
            TransactionKind::Borrow
        }
    }
}
