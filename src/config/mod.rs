//! Configuration module for the library CLI
//!
//! This module provides configuration management including:
//! - Data directory and store file resolution
//! - Settings persistence (lending and login limits)

pub mod paths;
pub mod settings;

pub use paths::LibraryPaths;
pub use settings::Settings;
