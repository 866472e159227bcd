//! CLI command handlers
//!
//! This module contains the interactive login and menu flow plus the
//! non-interactive subcommands, bridging clap argument parsing with the
//! service layer.

pub mod console;
pub mod history;
pub mod login;
pub mod menu;

pub use console::Console;
pub use history::handle_history_command;
pub use login::login;
pub use menu::{Menu, MenuChoice};

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::error::LibraryResult;
use crate::storage::Storage;

/// Log in, then run the menu until Exit
///
/// After too many failed attempts the menu is never shown.
pub fn run_interactive<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &mut Storage,
    settings: &Settings,
) -> LibraryResult<()> {
    let Some(user) = login(console, storage, settings)? else {
        console.say("Too many failed attempts. Exiting system...")?;
        return Ok(());
    };

    console.say(&format!("\nLogin successful! Welcome, {}.", user.username))?;
    Menu::new(console, storage, settings, &user).run()
}
