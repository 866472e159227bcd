//! Registered users backed by users.txt

use std::path::PathBuf;

use crate::error::LibraryResult;
use crate::models::User;

use super::file_io::{load_or_bootstrap, read_records, LoadStatus};
use super::init::default_users;

/// Users loaded at startup. There is no in-session registration.
pub struct UserRegistry {
    path: PathBuf,
    users: Vec<User>,
}

impl UserRegistry {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            users: Vec::new(),
        }
    }

    /// Load users from disk, seeding the default user if the file is absent
    pub fn load(&mut self) -> LibraryResult<LoadStatus> {
        let (users, status) = load_or_bootstrap(&self.path, default_users)?;
        self.users = users;
        Ok(status)
    }

    /// Load users from disk without seeding a missing file
    pub fn load_existing(&mut self) -> LibraryResult<()> {
        self.users = read_records(&self.path)?.unwrap_or_default();
        Ok(())
    }

    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// Find a user by name, ignoring case
    pub fn find(&self, username: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username))
    }

    /// First user matching the username (any case) and password (exact)
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.matches_credentials(username, password))
    }
}
