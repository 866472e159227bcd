//! User settings for the library CLI
//!
//! Lending limits, login attempts, and audit logging.

use serde::{Deserialize, Serialize};

use super::paths::LibraryPaths;
use crate::error::LibraryError;

/// Settings for the library CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Maximum number of open borrows per user
    #[serde(default = "default_max_open_borrows")]
    pub max_open_borrows: usize,

    /// Login attempts before the session is rejected
    #[serde(default = "default_max_login_attempts")]
    pub max_login_attempts: u32,

    /// Whether borrow/return/login events go to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_max_open_borrows() -> usize {
    3
}

fn default_max_login_attempts() -> u32 {
    3
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            max_open_borrows: default_max_open_borrows(),
            max_login_attempts: default_max_login_attempts(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &LibraryPaths) -> Result<Self, LibraryError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LibraryError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LibraryError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LibraryPaths) -> Result<(), LibraryError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LibraryError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            LibraryError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
