//! Book model
//!
//! A catalog entry. Books are never deleted; only their availability changes
//! as they are borrowed and returned.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Catalog identifier (e.g., "B001"), matched case-insensitively
    pub id: String,

    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Whether the book is on the shelf
    pub available: bool,
}

impl Book {
    /// Create a new book
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            available,
        }
    }

    /// Case-insensitive identifier match
    pub fn has_id(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id)
    }

    /// Case-insensitive substring match against title or author
    ///
    /// `keyword` must already be lowercased.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.title.to_lowercase().contains(keyword) || self.author.to_lowercase().contains(keyword)
    }

    /// Label used when listing books
    pub fn status_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Borrowed"
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} by {} ({})",
            self.id,
            self.title,
            self.author,
            self.status_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_id_ignores_case() {
        let book = Book::new("B001", "The Great Gatsby", "F. Scott Fitzgerald", true);
        assert!(book.has_id("b001"));
        assert!(book.has_id("B001"));
        assert!(!book.has_id("B002"));
    }

    #[test]
    fn test_matches_keyword() {
        let book = Book::new("B003", "1984", "George Orwell", false);
        assert!(book.matches_keyword("orwell"));
        assert!(book.matches_keyword("198"));
        assert!(!book.matches_keyword("gatsby"));
    }

    #[test]
    fn test_display() {
        let book = Book::new("B003", "1984", "George Orwell", false);
        assert_eq!(book.to_string(), "B003 - 1984 by George Orwell (Borrowed)");
    }
}
