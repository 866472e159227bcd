use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use library::cli::{handle_history_command, run_interactive, Console};
use library::config::{paths::DATA_DIR_ENV, LibraryPaths, Settings};
use library::display::format_load_notices;
use library::storage::{needs_initialization, Storage};

#[derive(Parser)]
#[command(
    name = "library",
    version,
    about = "Terminal-based library catalog with borrow and return tracking",
    long_about = "Library CLI keeps a catalog of books, registered users and a \
                  borrow/return log in plain text files. Run it without a \
                  subcommand to log in and use the interactive menu."
)]
struct Cli {
    /// Directory holding users.txt, books.txt and transactions.txt
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create any missing store files and the settings file
    Init,

    /// Show resolved paths and settings
    Config,

    /// Show borrow/return history
    History {
        /// Only rows for this user
        #[arg(short, long)]
        user: Option<String>,
        /// Number of rows to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Show audit log entries instead of ledger rows
        #[arg(long)]
        audit: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LibraryPaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone(), &settings);

    match cli.command {
        None => {
            let report = storage.load_all()?;
            print!("{}", format_load_notices(&report));

            let stdin = std::io::stdin();
            let masked = stdin.is_terminal();
            let mut console =
                Console::new(stdin.lock(), std::io::stdout()).with_masked_passwords(masked);
            run_interactive(&mut console, &mut storage, &settings)?;
        }
        Some(Commands::Init) => {
            let fresh = needs_initialization(&paths);
            let report = storage.load_all()?;
            print!("{}", format_load_notices(&report));

            settings.save(&paths)?;
            if fresh {
                println!("Library initialized at: {}", paths.base_dir().display());
            } else {
                println!("Library already initialized at: {}", paths.base_dir().display());
            }
            println!("  Books:        {}", storage.catalog.len());
            println!("  Users:        {}", storage.users.all().len());
            println!("  Transactions: {}", storage.ledger.len());
        }
        Some(Commands::Config) => {
            println!("Library CLI Configuration");
            println!("=========================");
            println!("Data directory:    {}", paths.base_dir().display());
            println!("Users file:        {}", paths.users_file().display());
            println!("Books file:        {}", paths.books_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Max open borrows:   {}", settings.max_open_borrows);
            println!("  Max login attempts: {}", settings.max_login_attempts);
            println!("  Audit enabled:      {}", settings.audit_enabled);
        }
        Some(Commands::History { user, limit, audit }) => {
            storage.load_existing()?;
            handle_history_command(&storage, user.as_deref(), limit, audit)?;
        }
    }

    Ok(())
}
