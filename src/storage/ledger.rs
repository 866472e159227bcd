//! Borrow/return ledger backed by transactions.txt
//!
//! The ledger is append-only. A return adds a new row rather than closing
//! the borrow row, so a borrow row stays open for good.
// TODO: link return rows to their borrow row once the file format can carry a loan id.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{LibraryError, LibraryResult};
use crate::models::{Transaction, TransactionId};

use super::file_io::{append_record, load_or_bootstrap, read_records, LoadStatus};

/// A row added to the ledger, with the outcome of appending it to disk
#[derive(Debug)]
pub struct Recorded {
    pub transaction: Transaction,
    /// Set when the row is in memory but could not be written
    pub write_error: Option<LibraryError>,
}

/// In-memory ledger, in file order
pub struct Ledger {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            transactions: Vec::new(),
        }
    }

    /// Load transactions from disk, creating an empty file if absent
    pub fn load(&mut self) -> LibraryResult<LoadStatus> {
        let (transactions, status) = load_or_bootstrap(&self.path, Vec::new)?;
        self.transactions = transactions;
        Ok(status)
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Rows recorded for a user, oldest first
    pub fn for_user<'a>(&'a self, username: &'a str) -> impl Iterator<Item = &'a Transaction> {
        self.transactions
            .iter()
            .filter(move |t| t.username == username)
    }

    /// Number of rows for `username` with no return date
    pub fn count_open_borrows(&self, username: &str) -> usize {
        self.for_user(username).filter(|t| t.is_open()).count()
    }

    /// Next id from the in-memory row count
    pub fn next_transaction_id(&self) -> TransactionId {
        TransactionId::sequential(self.transactions.len() + 1)
    }

    /// Load transactions from disk without creating the file
    pub fn load_existing(&mut self) -> LibraryResult<()> {
        self.transactions = read_records(&self.path)?.unwrap_or_default();
        Ok(())
    }

    /// Add a borrow row dated `date`
    pub fn record_borrow(&mut self, username: &str, book_id: &str, date: NaiveDate) -> Recorded {
        let txn = Transaction::borrow(self.next_transaction_id(), username, book_id, date);
        self.record(txn)
    }

    /// Add a return row dated `date`
    pub fn record_return(&mut self, username: &str, book_id: &str, date: NaiveDate) -> Recorded {
        let txn = Transaction::return_of(self.next_transaction_id(), username, book_id, date);
        self.record(txn)
    }

    fn record(&mut self, transaction: Transaction) -> Recorded {
        self.transactions.push(transaction.clone());
        let write_error = append_record(&self.path, &transaction).err();
        Recorded {
            transaction,
            write_error,
        }
    }
}
