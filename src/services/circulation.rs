//! Circulation service
//!
//! Borrow and return rules on top of the catalog and ledger. Each loan flips
//! the book's availability, rewrites books.txt, then appends a ledger row.

use chrono::NaiveDate;

use crate::audit::AuditEntry;
use crate::config::Settings;
use crate::error::{LibraryError, LibraryResult};
use crate::models::{Book, Transaction};
use crate::storage::Storage;

/// A completed borrow or return
#[derive(Debug)]
pub struct Loan {
    /// The book after the change
    pub book: Book,
    /// The ledger row that was added
    pub transaction: Transaction,
    /// Failures writing the change to disk or to the audit log. The change
    /// stays applied in memory.
    pub warnings: Vec<LibraryError>,
}

/// Service for borrowing and returning books
pub struct CirculationService<'a> {
    storage: &'a mut Storage,
    settings: &'a Settings,
}

impl<'a> CirculationService<'a> {
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Fail with `BorrowLimit` if the user already holds the maximum number
    /// of open borrows
    pub fn check_borrow_limit(&self, username: &str) -> LibraryResult<()> {
        let limit = self.settings.max_open_borrows;
        if self.storage.ledger.count_open_borrows(username) >= limit {
            return Err(LibraryError::BorrowLimit { limit });
        }
        Ok(())
    }

    /// Borrow a book on `date`
    pub fn borrow(&mut self, username: &str, book_id: &str, date: NaiveDate) -> LibraryResult<Loan> {
        self.check_borrow_limit(username)?;

        let book = self
            .storage
            .catalog
            .find_by_id(book_id)
            .ok_or_else(|| LibraryError::book_not_found(book_id))?;

        if !book.available {
            return Err(LibraryError::Unavailable(book.id.clone()));
        }

        let id = book.id.clone();
        self.apply(username, &id, false, date)
    }

    /// Return a book on `date`
    ///
    /// Any user may return any borrowed book; the ledger has no link between
    /// a return and the borrow it closes.
    pub fn return_book(
        &mut self,
        username: &str,
        book_id: &str,
        date: NaiveDate,
    ) -> LibraryResult<Loan> {
        let book = self
            .storage
            .catalog
            .find_by_id(book_id)
            .ok_or_else(|| LibraryError::book_not_found(book_id))?;

        if book.available {
            return Err(LibraryError::AlreadyAvailable(book.id.clone()));
        }

        let id = book.id.clone();
        self.apply(username, &id, true, date)
    }

    fn apply(
        &mut self,
        username: &str,
        book_id: &str,
        available: bool,
        date: NaiveDate,
    ) -> LibraryResult<Loan> {
        let mut warnings = Vec::new();

        if let Err(e) = self.storage.catalog.set_availability(book_id, available) {
            if e.is_not_found() {
                return Err(e);
            }
            warnings.push(e);
        }

        let recorded = if available {
            self.storage.ledger.record_return(username, book_id, date)
        } else {
            self.storage.ledger.record_borrow(username, book_id, date)
        };
        warnings.extend(recorded.write_error);

        if let Err(e) = self.storage.log(&AuditEntry::loan(&recorded.transaction)) {
            warnings.push(e);
        }

        let book = self
            .storage
            .catalog
            .find_by_id(book_id)
            .cloned()
            .ok_or_else(|| LibraryError::book_not_found(book_id))?;

        Ok(Loan {
            book,
            transaction: recorded.transaction,
            warnings,
        })
    }
}
