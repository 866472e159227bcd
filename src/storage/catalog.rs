//! Book catalog backed by books.txt
//!
//! Every availability change rewrites the whole file.

use std::path::PathBuf;

use crate::error::{LibraryError, LibraryResult};
use crate::models::Book;

use super::file_io::{load_or_bootstrap, write_records, LoadStatus};
use super::init::default_books;

/// In-memory catalog, in file order
pub struct Catalog {
    path: PathBuf,
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            books: Vec::new(),
        }
    }

    /// Load books from disk, seeding the default catalog if the file is absent
    pub fn load(&mut self) -> LibraryResult<LoadStatus> {
        let (books, status) = load_or_bootstrap(&self.path, default_books)?;
        self.books = books;
        Ok(status)
    }

    /// Rewrite books.txt from the in-memory catalog
    pub fn save(&self) -> LibraryResult<()> {
        write_records(&self.path, &self.books)
    }

    /// All books in catalog order
    pub fn all(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// First book whose id matches, ignoring case
    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.has_id(id))
    }

    /// Set a book's availability and persist the whole catalog
    ///
    /// A write failure is returned as an error, but the in-memory change is
    /// kept.
    pub fn set_availability(&mut self, id: &str, available: bool) -> LibraryResult<()> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.has_id(id))
            .ok_or_else(|| LibraryError::book_not_found(id))?;

        book.available = available;
        self.save()
    }

    /// Books whose title or author contains `keyword`, ignoring case
    pub fn search(&self, keyword: &str) -> Vec<&Book> {
        let keyword = keyword.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.matches_keyword(&keyword))
            .collect()
    }
}
