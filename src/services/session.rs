//! Login session
//!
//! A small state machine: `Prompting` until a credential pair matches
//! (`Authenticated`) or the attempts run out (`Rejected`). Nothing carries
//! over between runs.

use crate::models::User;
use crate::storage::UserRegistry;

/// Where the session stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Prompting { attempts_left: u32 },
    Authenticated(User),
    Rejected,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Prompting { .. })
    }
}

/// Login session with a bounded number of attempts
#[derive(Debug)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new(max_attempts: u32) -> Self {
        let state = if max_attempts == 0 {
            SessionState::Rejected
        } else {
            SessionState::Prompting {
                attempts_left: max_attempts,
            }
        };
        Self { state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Try one credential pair. Has no effect once the session is terminal.
    pub fn attempt(&mut self, users: &UserRegistry, username: &str, password: &str) -> &SessionState {
        if let SessionState::Prompting { attempts_left } = self.state {
            self.state = match users.authenticate(username, password) {
                Some(user) => SessionState::Authenticated(user.clone()),
                None if attempts_left <= 1 => SessionState::Rejected,
                None => SessionState::Prompting {
                    attempts_left: attempts_left - 1,
                },
            };
        }
        &self.state
    }

    /// The logged-in user, if authentication succeeded
    pub fn into_user(self) -> Option<User> {
        match self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}
