//! Path management for the library CLI
//!
//! All store files live side by side in one data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or `LIBRARY_CLI_DATA_DIR` environment variable
//! 2. The current working directory

use std::path::PathBuf;

use crate::error::LibraryError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "LIBRARY_CLI_DATA_DIR";

/// Manages all paths used by the library CLI
#[derive(Debug, Clone)]
pub struct LibraryPaths {
    /// Directory holding the store files
    base_dir: PathBuf,
}

impl LibraryPaths {
    /// Resolve paths from an explicit override, falling back to the current
    /// working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self, LibraryError> {
        let base_dir = match data_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| {
                LibraryError::Config(format!("Could not determine current directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create LibraryPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to users.txt
    pub fn users_file(&self) -> PathBuf {
        self.base_dir.join("users.txt")
    }

    /// Get the path to books.txt
    pub fn books_file(&self) -> PathBuf {
        self.base_dir.join("books.txt")
    }

    /// Get the path to transactions.txt
    pub fn transactions_file(&self) -> PathBuf {
        self.base_dir.join("transactions.txt")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("library.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), LibraryError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LibraryError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}
