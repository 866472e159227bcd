//! Display formatting for terminal output

pub mod book;
pub mod storage;
pub mod transaction;

pub use book::{format_book_list, format_search_results, RULE};
pub use storage::format_load_notices;
pub use transaction::format_transaction_list;
