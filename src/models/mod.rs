//! Core data models for the library CLI
//!
//! Books in the catalog, registered users, and the borrow/return ledger.

pub mod book;
pub mod transaction;
pub mod user;

pub use book::Book;
pub use transaction::{LedgerDate, Transaction, TransactionId, TransactionKind};
pub use user::User;
