//! File I/O for delimited record stores
//!
//! Loads skip malformed lines silently. Saves overwrite the whole file;
//! appends add a single line.

use std::fs::OpenOptions;
use std::path::Path;

use crate::error::{LibraryError, LibraryResult};

use super::record::Record;

/// How a store was brought into memory
#[derive(Debug)]
pub enum LoadStatus {
    /// The file existed and this many records were read
    Loaded { count: usize },
    /// The file was absent and the bootstrap default was used.
    /// `error` holds the failure if the default could not be written.
    Created { error: Option<LibraryError> },
}

impl LoadStatus {
    pub fn was_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All);
    builder
}

fn writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'));
    builder
}

/// Field count up to the last non-empty field
///
/// `a,b,,` has two fields, `a,,c` has three.
fn filled_len(line: &csv::StringRecord) -> usize {
    line.as_byte_record().iter()
        .rposition(|field| !field.is_empty())
        .map_or(0, |last| last + 1)
}

/// Read every well-formed record from a file, or `None` if it doesn't exist
pub fn read_records<T, P>(path: P) -> LibraryResult<Option<Vec<T>>>
where
    T: Record,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let mut reader = reader_builder()
        .from_path(path)
        .map_err(|e| LibraryError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut records = Vec::new();
    for result in reader.records() {
        match result {
            Ok(line) if filled_len(&line) >= T::MIN_FIELDS => {
                if let Some(record) = T::from_record(&line) {
                    records.push(record);
                }
            }
            Ok(_) => {}
            Err(e) if e.is_io_error() => {
                return Err(LibraryError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
            // Undecodable line
            Err(_) => {}
        }
    }

    Ok(Some(records))
}

/// Truncate the file and write one line per record
pub fn write_records<T, P>(path: P, records: &[T]) -> LibraryResult<()>
where
    T: Record,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let mut writer = writer_builder()
        .from_path(path)
        .map_err(|e| LibraryError::Storage(format!("Failed to create {}: {}", path.display(), e)))?;

    for record in records {
        writer.write_record(record.to_fields()).map_err(|e| {
            LibraryError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
    }

    writer
        .flush()
        .map_err(|e| LibraryError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Append one record as a new line, creating the file if needed
pub fn append_record<T, P>(path: P, record: &T) -> LibraryResult<()>
where
    T: Record,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LibraryError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = writer_builder().from_writer(file);
    writer.write_record(record.to_fields()).map_err(|e| {
        LibraryError::Storage(format!("Failed to append to {}: {}", path.display(), e))
    })?;

    writer
        .flush()
        .map_err(|e| LibraryError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Read a store, writing `defaults` to disk if the file is absent
///
/// The defaults are returned in memory even when they cannot be written.
pub fn load_or_bootstrap<T, P, F>(path: P, defaults: F) -> LibraryResult<(Vec<T>, LoadStatus)>
where
    T: Record,
    P: AsRef<Path>,
    F: FnOnce() -> Vec<T>,
{
    let path = path.as_ref();

    if let Some(records) = read_records(path)? {
        let count = records.len();
        return Ok((records, LoadStatus::Loaded { count }));
    }

    let records = defaults();
    let error = write_records(path, &records).err();
    Ok((records, LoadStatus::Created { error }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, Transaction, TransactionId, User};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let records: Option<Vec<Book>> = read_records(&path).unwrap();
        assert!(records.is_none());
    }

    #[test]
    fn test_short_and_blank_lines_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("books.txt");
        fs::write(
            &path,
            "B001,The Great Gatsby,F. Scott Fitzgerald,true\n\nB002,Missing Author\n B003 , 1984 , George Orwell , false \n",
        )
        .unwrap();

        let books: Vec<Book> = read_records(&path).unwrap().unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[1].id, "B003");
        assert_eq!(books[1].author, "George Orwell");
    }

    #[test]
    fn test_trailing_empty_fields_do_not_count() {
        let temp_dir = TempDir::new().unwrap();
        let users_path = temp_dir.path().join("users.txt");
        let books_path = temp_dir.path().join("books.txt");
        fs::write(&users_path, "alice,pw,\nbob,pw,user\n").unwrap();
        fs::write(&books_path, "B004,Title,,\nB005,,Author,true\n").unwrap();

        let users: Vec<User> = read_records(&users_path).unwrap().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "bob");

        // Interior empty fields still count
        let books: Vec<Book> = read_records(&books_path).unwrap().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, "B005");
        assert_eq!(books[0].title, "");
    }

    #[test]
    fn test_write_overwrites_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("books.txt");
        fs::write(&path, "old,content,here,true\nmore,old,lines,false\n").unwrap();

        write_records(&path, &[Book::new("B001", "Emma", "Jane Austen", true)]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "B001,Emma,Jane Austen,true\n");
    }

    #[test]
    fn test_append_keeps_existing_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.txt");
        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();

        append_record(
            &path,
            &Transaction::borrow(TransactionId::sequential(1), "ajcarsula", "B001", date),
        )
        .unwrap();
        append_record(
            &path,
            &Transaction::return_of(TransactionId::sequential(2), "ajcarsula", "B001", date),
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "T001,ajcarsula,B001,2025-02-01,null\nT002,ajcarsula,B001,null,2025-02-01\n"
        );
    }

    #[test]
    fn test_null_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.txt");
        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let txn = Transaction::borrow(TransactionId::sequential(1), "ajcarsula", "B001", date);

        append_record(&path, &txn).unwrap();
        assert!(fs::read_to_string(&path).unwrap().trim_end().ends_with(",null"));

        let loaded: Vec<Transaction> = read_records(&path).unwrap().unwrap();
        assert_eq!(loaded, vec![txn]);
        assert_eq!(loaded[0].date_returned, None);
    }

    #[test]
    fn test_bootstrap_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("books.txt");

        let (books, status) =
            load_or_bootstrap(&path, || vec![Book::new("B001", "Emma", "Jane Austen", true)])
                .unwrap();

        assert_eq!(books.len(), 1);
        assert!(status.was_created());
        assert_eq!(fs::read_to_string(&path).unwrap(), "B001,Emma,Jane Austen,true\n");
    }

    #[test]
    fn test_bootstrap_empty_creates_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.txt");

        let (txns, status) = load_or_bootstrap::<Transaction, _, _>(&path, Vec::new).unwrap();
        assert!(txns.is_empty());
        assert!(status.was_created());
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_bootstrap_write_failure_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("books.txt");

        let (books, status) =
            load_or_bootstrap(&path, || vec![Book::new("B001", "Emma", "Jane Austen", true)])
                .unwrap();

        assert_eq!(books.len(), 1);
        assert!(matches!(status, LoadStatus::Created { error: Some(_) }));
    }
}
