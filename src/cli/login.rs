//! Interactive login

use std::io::{BufRead, Write};

use crate::audit::AuditEntry;
use crate::config::Settings;
use crate::display::RULE;
use crate::error::LibraryResult;
use crate::models::User;
use crate::services::{Session, SessionState};
use crate::storage::Storage;

use super::console::Console;

/// Prompt for credentials until the session succeeds or is rejected
///
/// Running out of input counts as a rejection.
pub fn login<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
    settings: &Settings,
) -> LibraryResult<Option<User>> {
    console.say(RULE)?;
    console.say("Please log in to continue.\n")?;

    let mut session = Session::new(settings.max_login_attempts);

    while let SessionState::Prompting { .. } = session.state() {
        let Some(username) = console.prompt("Username: ")? else {
            return Ok(None);
        };
        let Some(password) = console.prompt_password("Password: ")? else {
            return Ok(None);
        };

        let entry = match session.attempt(&storage.users, &username, &password) {
            SessionState::Authenticated(user) => AuditEntry::login(&user.username),
            SessionState::Prompting { attempts_left } => {
                let attempts_left = *attempts_left;
                console.say("Invalid username or password. Try again.")?;
                console.say(&format!("(Attempts left: {})", attempts_left))?;
                console.say("")?;
                AuditEntry::login_failed(&username, attempts_left)
            }
            SessionState::Rejected => {
                console.say("Invalid username or password. Try again.")?;
                console.say("")?;
                AuditEntry::login_failed(&username, 0)
            }
        };

        // The login outcome stands even if it cannot be audited
        if let Err(e) = storage.log(&entry) {
            console.say(&format!(" Error saving changes: {}", e))?;
        }
    }

    Ok(session.into_user())
}
