//! Library CLI - terminal-based library catalog
//!
//! This library provides the core of a single-user library management tool:
//! a catalog of books, registered users, and an append-only borrow/return
//! ledger, each persisted to a comma-delimited text file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and settings
//! - `error`: Custom error types
//! - `models`: Books, users and ledger rows
//! - `storage`: Flat-file record stores and the `Storage` owner
//! - `services`: Borrow/return rules and the login session
//! - `audit`: Append-only JSONL audit log
//! - `display`: Terminal formatting
//! - `cli`: Interactive menu and subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use library::config::{LibraryPaths, Settings};
//! use library::storage::Storage;
//!
//! let paths = LibraryPaths::resolve(None)?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths, &settings);
//! storage.load_all()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LibraryError, LibraryResult};
