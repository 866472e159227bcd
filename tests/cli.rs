use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn library(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("library").unwrap();
    cmd.env("LIBRARY_CLI_DATA_DIR", temp_dir.path());
    cmd
}

#[test]
fn first_run_bootstraps_store_files() {
    let temp_dir = TempDir::new().unwrap();

    library(&temp_dir)
        .write_stdin("ajcarsula\n12345\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("users.txt not found. Creating default user..."))
        .stdout(predicate::str::contains("books.txt not found. Creating default books..."))
        .stdout(predicate::str::contains(
            "transactions.txt not found. Creating new file...",
        ))
        .stdout(predicate::str::contains("Login successful! Welcome, ajcarsula."));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("users.txt")).unwrap(),
        "ajcarsula,12345,user\n"
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("transactions.txt")).unwrap(),
        ""
    );
}

#[test]
fn borrow_persists_across_runs() {
    let temp_dir = TempDir::new().unwrap();

    library(&temp_dir)
        .write_stdin("ajcarsula\n12345\n2\nb001\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book borrowed successfully!"));

    library(&temp_dir)
        .write_stdin("ajcarsula\n12345\n1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("not found").not())
        .stdout(predicate::str::contains(
            "B001 - The Great Gatsby by F. Scott Fitzgerald (Borrowed)",
        ));

    let ledger = fs::read_to_string(temp_dir.path().join("transactions.txt")).unwrap();
    assert!(ledger.starts_with("T001,ajcarsula,B001,"));
    assert!(ledger.ends_with(",null\n"));
}

#[test]
fn failed_logins_exit_without_menu() {
    let temp_dir = TempDir::new().unwrap();

    library(&temp_dir)
        .write_stdin("a\nb\nc\nd\ne\nf\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(Attempts left: 2)"))
        .stdout(predicate::str::contains("Too many failed attempts. Exiting system..."))
        .stdout(predicate::str::contains("Enter choice").not());
}

#[test]
fn custom_borrow_limit_from_settings() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("library.json"),
        r#"{"max_open_borrows": 1}"#,
    )
    .unwrap();

    library(&temp_dir)
        .write_stdin("ajcarsula\n12345\n2\nB001\n2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book borrowed successfully!"))
        .stdout(predicate::str::contains(
            "You cannot borrow more than 1 books at once!",
        ));
}

#[test]
fn history_lists_ledger_rows() {
    let temp_dir = TempDir::new().unwrap();

    library(&temp_dir)
        .write_stdin("ajcarsula\n12345\n3\nB003\n5\n")
        .assert()
        .success();

    library(&temp_dir)
        .args(["history", "--user", "AJCARSULA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("T001"))
        .stdout(predicate::str::contains("Return"));
}

#[test]
fn history_audit_shows_log_entries() {
    let temp_dir = TempDir::new().unwrap();

    library(&temp_dir)
        .write_stdin("nobody\nx\najcarsula\n12345\n2\nB001\n5\n")
        .assert()
        .success();

    library(&temp_dir)
        .args(["history", "--audit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BOOTSTRAP Store books.txt"))
        .stdout(predicate::str::contains("LOGIN_FAILED User nobody by nobody"))
        .stdout(predicate::str::contains("BORROW Transaction T001 by ajcarsula"));
}

#[test]
fn config_shows_paths() {
    let temp_dir = TempDir::new().unwrap();

    library(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Max open borrows:   3"))
        .stdout(predicate::str::contains("books.txt"));
}

#[test]
fn read_only_commands_create_no_files() {
    let temp_dir = TempDir::new().unwrap();

    library(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("not found").not());

    library(&temp_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("not found").not())
        .stdout(predicate::str::contains("No transactions found."));

    library(&temp_dir)
        .args(["history", "--audit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries found."));

    for file in ["users.txt", "books.txt", "transactions.txt", "audit.log"] {
        assert!(!temp_dir.path().join(file).exists(), "{} was created", file);
    }
}

#[test]
fn init_writes_settings() {
    let temp_dir = TempDir::new().unwrap();

    library(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Books:        3"));

    assert!(temp_dir.path().join("library.json").exists());
    assert!(temp_dir.path().join("books.txt").exists());
}
