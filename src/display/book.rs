//! Book display formatting

use crate::models::Book;

pub const RULE: &str = "----------------------------------------";

/// Format the full catalog for the "View All Books" screen
pub fn format_book_list(books: &[Book]) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(RULE);
    output.push_str("\nAvailable Books:\n\n");
    for book in books {
        output.push_str(&format!("{}\n", book));
    }
    output.push_str(RULE);
    output.push('\n');
    output
}

/// Format search matches, or the not-found message when there are none
pub fn format_search_results(results: &[&Book]) -> String {
    let mut output = String::from("\nSearch Results:\n");
    if results.is_empty() {
        output.push_str("No books found with that title or author.\n");
        return output;
    }
    for book in results {
        output.push_str(&format!("{}\n", book));
    }
    output
}
