//! User model

use serde::{Deserialize, Serialize};

/// A registered library user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name, matched case-insensitively
    pub username: String,

    /// Plain-text password, compared exactly
    #[serde(skip_serializing)]
    pub password: String,

    /// Role label (stored, not enforced)
    pub role: String,
}

impl User {
    /// Create a new user
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: role.into(),
        }
    }

    /// Check a username/password pair against this user
    pub fn matches_credentials(&self, username: &str, password: &str) -> bool {
        self.username.eq_ignore_ascii_case(username) && self.password == password
    }
}
