//! Main menu loop
//!
//! Reads a choice, runs the matching catalog or circulation operation, and
//! prints the outcome. Loops until Exit or end of input.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::display::{format_book_list, format_search_results, RULE};
use crate::error::{LibraryError, LibraryResult};
use crate::models::User;
use crate::services::{CirculationService, Loan};
use crate::storage::Storage;

use super::console::Console;

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewAll,
    Borrow,
    Return,
    Search,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ViewAll),
            "2" => Some(Self::Borrow),
            "3" => Some(Self::Return),
            "4" => Some(Self::Search),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\n1. View All Books\n2. Borrow Book\n3. Return Book\n4. Search Book\n5. Exit";

/// Menu controller for one logged-in user
pub struct Menu<'a, R, W> {
    console: &'a mut Console<R, W>,
    storage: &'a mut Storage,
    settings: &'a Settings,
    user: &'a User,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        console: &'a mut Console<R, W>,
        storage: &'a mut Storage,
        settings: &'a Settings,
        user: &'a User,
    ) -> Self {
        Self {
            console,
            storage,
            settings,
            user,
            today: local_today,
        }
    }

    /// Use a fixed clock for transaction dates
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Run until the user picks Exit or input ends
    pub fn run(&mut self) -> LibraryResult<()> {
        loop {
            self.console.say(MENU)?;
            let Some(line) = self.console.prompt("Enter choice: ")? else {
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::ViewAll) => self.view_books()?,
                Some(MenuChoice::Borrow) => self.borrow_book()?,
                Some(MenuChoice::Return) => self.return_book()?,
                Some(MenuChoice::Search) => self.search_books()?,
                Some(MenuChoice::Exit) => {
                    self.console.say(&format!("\n{}\nExiting system...", RULE))?;
                    return Ok(());
                }
                None => self.console.say("Invalid choice!")?,
            }
        }
    }

    fn view_books(&mut self) -> LibraryResult<()> {
        let listing = format_book_list(self.storage.catalog.all());
        self.console.write(&listing)?;
        Ok(())
    }

    fn borrow_book(&mut self) -> LibraryResult<()> {
        let user = self.user;
        let username = user.username.as_str();
        let today = (self.today)();

        if let Err(LibraryError::BorrowLimit { limit }) =
            CirculationService::new(self.storage, self.settings).check_borrow_limit(username)
        {
            self.console
                .say(&format!("You cannot borrow more than {} books at once!", limit))?;
            return Ok(());
        }

        let Some(book_id) = self.console.prompt("\nEnter Book ID: ")? else {
            return Ok(());
        };

        let result =
            CirculationService::new(self.storage, self.settings).borrow(username, &book_id, today);
        match result {
            Ok(loan) => self.report_loan(&loan, "Book borrowed successfully!"),
            Err(LibraryError::Unavailable(_)) => {
                self.say("Sorry, this book is currently unavailable.")
            }
            Err(LibraryError::BorrowLimit { limit }) => {
                self.say(&format!("You cannot borrow more than {} books at once!", limit))
            }
            Err(e) if e.is_not_found() => self.say("Book not found!"),
            Err(e) => Err(e),
        }
    }

    fn return_book(&mut self) -> LibraryResult<()> {
        let user = self.user;
        let username = user.username.as_str();
        let today = (self.today)();

        let Some(book_id) = self.console.prompt("\nEnter Book ID to return: ")? else {
            return Ok(());
        };

        let result = CirculationService::new(self.storage, self.settings)
            .return_book(username, &book_id, today);
        match result {
            Ok(loan) => self.report_loan(&loan, "Book returned successfully!"),
            Err(LibraryError::AlreadyAvailable(_)) => self.say("This book is already available."),
            Err(e) if e.is_not_found() => self.say("Book not found!"),
            Err(e) => Err(e),
        }
    }

    fn search_books(&mut self) -> LibraryResult<()> {
        let Some(keyword) = self.console.prompt("\nSearch by (title/author): ")? else {
            return Ok(());
        };

        let results = self.storage.catalog.search(&keyword);
        let output = format_search_results(&results);
        self.console.write(&output)?;
        Ok(())
    }

    fn report_loan(&mut self, loan: &Loan, message: &str) -> LibraryResult<()> {
        for warning in &loan.warnings {
            self.console.say(&format!(" Error saving changes: {}", warning))?;
        }
        self.console.say(message)?;
        self.console.say(&format!(
            "\n{}\n----------------- MAIN MENU -----------------",
            RULE
        ))?;
        Ok(())
    }

    fn say(&mut self, text: &str) -> LibraryResult<()> {
        self.console.say(text)?;
        Ok(())
    }
}
