//! Audit logging for the library CLI
//!
//! Records borrows, returns, logins and store bootstraps in an append-only
//! JSON-lines log next to the store files.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
