//! Storage initialization
//!
//! Seed content written when a store file does not exist yet.

use crate::config::paths::LibraryPaths;
use crate::models::{Book, User};

/// Default user written to users.txt on first run
pub fn default_users() -> Vec<User> {
    vec![User::new("ajcarsula", "12345", "user")]
}

/// Default catalog written to books.txt on first run
pub fn default_books() -> Vec<Book> {
    vec![
        Book::new("B001", "The Great Gatsby", "F. Scott Fitzgerald", true),
        Book::new("B002", "To Kill a Mockingbird", "Harper Lee", true),
        Book::new("B003", "1984", "George Orwell", false),
    ]
}

/// Check if any store file is missing and would be bootstrapped on load
pub fn needs_initialization(paths: &LibraryPaths) -> bool {
    !paths.users_file().exists()
        || !paths.books_file().exists()
        || !paths.transactions_file().exists()
}
