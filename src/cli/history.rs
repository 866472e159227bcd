//! Ledger and audit history command

use crate::display::format_transaction_list;
use crate::error::LibraryResult;
use crate::storage::Storage;

/// Print the most recent `limit` ledger rows or audit entries, optionally
/// for one user
pub fn handle_history_command(
    storage: &Storage,
    user: Option<&str>,
    limit: usize,
    audit: bool,
) -> LibraryResult<()> {
    let report = if audit {
        audit_report(storage, user, limit)?
    } else {
        history_report(storage, user, limit)
    };
    print!("{}", report);
    Ok(())
}

/// Ledger rows as a table, oldest first
pub fn history_report(storage: &Storage, user: Option<&str>, limit: usize) -> String {
    let rows: Vec<_> = match user {
        Some(name) => {
            let canonical = storage
                .users
                .find(name)
                .map(|u| u.username.as_str())
                .unwrap_or(name);
            storage.ledger.for_user(canonical).collect()
        }
        None => storage.ledger.all().iter().collect(),
    };

    let start = rows.len().saturating_sub(limit);
    format_transaction_list(&rows[start..])
}

/// Audit entry summaries, oldest first
pub fn audit_report(storage: &Storage, user: Option<&str>, limit: usize) -> LibraryResult<String> {
    let Some(logger) = storage.audit() else {
        return Ok("Audit logging is disabled.\n".to_string());
    };

    let entries = match user {
        Some(name) => {
            let mut entries: Vec<_> = logger
                .entries()?
                .into_iter()
                .filter(|e| {
                    e.username
                        .as_deref()
                        .is_some_and(|u| u.eq_ignore_ascii_case(name))
                })
                .collect();
            let start = entries.len().saturating_sub(limit);
            entries.split_off(start)
        }
        None => logger.recent(limit)?,
    };

    if entries.is_empty() {
        return Ok("No audit entries found.\n".to_string());
    }

    Ok(entries
        .iter()
        .map(|e| format!("{}\n", e.summary()))
        .collect())
}
