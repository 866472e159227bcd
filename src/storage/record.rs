//! Flat-file record format
//!
//! Each store file holds one comma-separated record per line with no header
//! and no quoting. Absent dates are written as the literal token `null`.

use csv::StringRecord;

use crate::models::{Book, LedgerDate, Transaction, TransactionId, User};

/// Token standing in for an absent date
pub const NULL_TOKEN: &str = "null";

/// A type that can be stored as one line of a delimited text file
pub trait Record: Sized {
    /// Lines with fewer fields are skipped
    const MIN_FIELDS: usize;

    /// Build a record from a parsed line, or `None` if the line is malformed
    fn from_record(record: &StringRecord) -> Option<Self>;

    /// Fields in file order
    fn to_fields(&self) -> Vec<String>;
}

impl Record for User {
    const MIN_FIELDS: usize = 3;

    fn from_record(record: &StringRecord) -> Option<Self> {
        Some(User::new(record.get(0)?, record.get(1)?, record.get(2)?))
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.username.clone(),
            self.password.clone(),
            self.role.clone(),
        ]
    }
}

impl Record for Book {
    const MIN_FIELDS: usize = 4;

    fn from_record(record: &StringRecord) -> Option<Self> {
        let available = record.get(3)?.eq_ignore_ascii_case("true");
        Some(Book::new(
            record.get(0)?,
            record.get(1)?,
            record.get(2)?,
            available,
        ))
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.author.clone(),
            self.available.to_string(),
        ]
    }
}

impl Record for Transaction {
    const MIN_FIELDS: usize = 5;

    fn from_record(record: &StringRecord) -> Option<Self> {
        Some(Transaction {
            id: TransactionId::from_raw(record.get(0)?),
            username: record.get(1)?.to_string(),
            book_id: record.get(2)?.to_string(),
            date_borrowed: parse_date(record.get(3)?),
            date_returned: parse_date(record.get(4)?),
        })
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.username.clone(),
            self.book_id.clone(),
            format_date(self.date_borrowed.as_ref()),
            format_date(self.date_returned.as_ref()),
        ]
    }
}

/// Parse a date field; only the `null` token is absent
pub fn parse_date(field: &str) -> Option<LedgerDate> {
    (field != NULL_TOKEN).then(|| LedgerDate::parse(field))
}

pub fn format_date(date: Option<&LedgerDate>) -> String {
    match date {
        Some(date) => date.to_string(),
        None => NULL_TOKEN.to_string(),
    }
}
