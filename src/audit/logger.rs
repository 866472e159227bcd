//! JSON-lines audit log
//!
//! One entry per line, appended and flushed per call. Reading is only done
//! by `history --audit`.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use crate::error::{LibraryError, LibraryResult};

use super::entry::AuditEntry;

/// Appends entries to `audit.log` and reads them back
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry as a JSON line
    pub fn log(&self, entry: &AuditEntry) -> LibraryResult<()> {
        let mut line = serde_json::to_string(entry)
            .map_err(|e| LibraryError::Json(format!("Failed to encode audit entry: {}", e)))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| self.io_error("open", e))?;
        file.write_all(line.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| self.io_error("write", e))
    }

    /// Every entry in the log, oldest first
    ///
    /// A missing log reads as empty. Lines that do not decode are skipped.
    pub fn entries(&self) -> LibraryResult<Vec<AuditEntry>> {
        let content = match fs::read_to_string(&self.log_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error("read", e)),
        };

        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect())
    }

    /// The last `limit` entries, oldest first
    pub fn recent(&self, limit: usize) -> LibraryResult<Vec<AuditEntry>> {
        let mut entries = self.entries()?;
        let start = entries.len().saturating_sub(limit);
        Ok(entries.split_off(start))
    }

    fn io_error(&self, action: &str, err: std::io::Error) -> LibraryError {
        LibraryError::Io(format!(
            "Failed to {} audit log {}: {}",
            action,
            self.log_path.display(),
            err
        ))
    }
}
