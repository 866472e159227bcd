//! Storage layer for the library CLI
//!
//! Three flat-file record stores (users, books, transactions) owned by a
//! single `Storage` value, plus the audit log.

pub mod catalog;
pub mod file_io;
pub mod init;
pub mod ledger;
pub mod record;
pub mod users;

pub use catalog::Catalog;
pub use file_io::{append_record, read_records, write_records, LoadStatus};
pub use init::needs_initialization;
pub use ledger::{Ledger, Recorded};
pub use record::{Record, NULL_TOKEN};
pub use users::UserRegistry;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::LibraryPaths;
use crate::config::settings::Settings;
use crate::error::LibraryError;

/// Outcome of loading each store at startup
#[derive(Debug)]
pub struct LoadReport {
    pub users: LoadStatus,
    pub books: LoadStatus,
    pub transactions: LoadStatus,
    /// Audit entries for bootstrapped stores that could not be written
    pub audit_warnings: Vec<LibraryError>,
}

/// Main storage coordinator that owns every store
pub struct Storage {
    paths: LibraryPaths,
    pub users: UserRegistry,
    pub catalog: Catalog,
    pub ledger: Ledger,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance. Nothing is read or written yet.
    pub fn new(paths: LibraryPaths, settings: &Settings) -> Self {
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Self {
            users: UserRegistry::new(paths.users_file()),
            catalog: Catalog::new(paths.books_file()),
            ledger: Ledger::new(paths.transactions_file()),
            audit,
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LibraryPaths {
        &self.paths
    }

    /// Load all stores from disk, bootstrapping any that are missing
    pub fn load_all(&mut self) -> Result<LoadReport, LibraryError> {
        self.paths.ensure_directories()?;

        let mut report = LoadReport {
            users: self.users.load()?,
            books: self.catalog.load()?,
            transactions: self.ledger.load()?,
            audit_warnings: Vec::new(),
        };

        let created: Vec<_> = [
            (&report.users, "users.txt"),
            (&report.books, "books.txt"),
            (&report.transactions, "transactions.txt"),
        ]
        .into_iter()
        .filter(|(status, _)| status.was_created())
        .map(|(_, file)| file)
        .collect();

        for file in created {
            if let Err(e) = self.log(&AuditEntry::bootstrap(file)) {
                report.audit_warnings.push(e);
            }
        }

        Ok(report)
    }

    /// Load users and the ledger as they are on disk, creating nothing
    ///
    /// Used by read-only commands. The catalog is left empty.
    pub fn load_existing(&mut self) -> Result<(), LibraryError> {
        self.users.load_existing()?;
        self.ledger.load_existing()?;
        Ok(())
    }

    /// Append to the audit log, if enabled
    pub fn log(&self, entry: &AuditEntry) -> Result<(), LibraryError> {
        match &self.audit {
            Some(logger) => logger.log(entry),
            None => Ok(()),
        }
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use tempfile::TempDir;

    fn storage_in(temp_dir: &TempDir, settings: &Settings) -> Storage {
        let paths = LibraryPaths::with_base_dir(temp_dir.path().to_path_buf());
        Storage::new(paths, settings)
    }

    #[test]
    fn test_first_load_bootstraps_everything() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = storage_in(&temp_dir, &Settings::default());

        let report = storage.load_all().unwrap();
        assert!(report.users.was_created());
        assert!(report.books.was_created());
        assert!(report.transactions.was_created());
        assert!(!needs_initialization(storage.paths()));

        let entries = storage.audit().unwrap().entries().unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.operation == Operation::Bootstrap));
    }

    #[test]
    fn test_second_load_reads_files() {
        let temp_dir = TempDir::new().unwrap();
        storage_in(&temp_dir, &Settings::default()).load_all().unwrap();

        let mut storage = storage_in(&temp_dir, &Settings::default());
        let report = storage.load_all().unwrap();

        assert!(matches!(report.books, LoadStatus::Loaded { count: 3 }));
        assert!(matches!(report.users, LoadStatus::Loaded { count: 1 }));
        assert!(matches!(report.transactions, LoadStatus::Loaded { count: 0 }));
    }

    #[test]
    fn test_load_existing_creates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("library");
        let paths = LibraryPaths::with_base_dir(base.clone());
        let mut storage = Storage::new(paths, &Settings::default());

        storage.load_existing().unwrap();
        assert!(storage.users.all().is_empty());
        assert!(storage.ledger.is_empty());
        assert!(!base.exists());
    }

    #[test]
    fn test_load_existing_reads_present_files() {
        let temp_dir = TempDir::new().unwrap();
        storage_in(&temp_dir, &Settings::default()).load_all().unwrap();
        std::fs::write(
            temp_dir.path().join("transactions.txt"),
            "T001,ajcarsula,B001,2025-09-01,null\n",
        )
        .unwrap();

        let mut storage = storage_in(&temp_dir, &Settings::default());
        storage.load_existing().unwrap();
        assert_eq!(storage.users.all().len(), 1);
        assert_eq!(storage.ledger.len(), 1);
        assert!(storage.catalog.is_empty());
    }

    #[test]
    fn test_bootstrap_audit_failure_is_collected() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("audit.log")).unwrap();
        let mut storage = storage_in(&temp_dir, &Settings::default());

        let report = storage.load_all().unwrap();
        assert!(report.books.was_created());
        assert_eq!(report.audit_warnings.len(), 3);
        assert!(temp_dir.path().join("books.txt").exists());
    }

    #[test]
    fn test_audit_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let mut storage = storage_in(&temp_dir, &settings);
        storage.load_all().unwrap();

        assert!(storage.audit().is_none());
        assert!(!temp_dir.path().join("audit.log").exists());
    }
}
