//! Startup notices for store loading

use crate::storage::{LoadReport, LoadStatus};

fn notice(status: &LoadStatus, file: &str, creating: &str, output: &mut String) {
    if let LoadStatus::Created { error } = status {
        output.push_str(&format!(" {} not found. {}\n", file, creating));
        if let Some(e) = error {
            output.push_str(&format!(" Error creating {}: {}\n", file, e));
        }
    }
}

/// Console lines for every store that had to be bootstrapped
pub fn format_load_notices(report: &LoadReport) -> String {
    let mut output = String::new();
    notice(&report.users, "users.txt", "Creating default user...", &mut output);
    notice(&report.books, "books.txt", "Creating default books...", &mut output);
    notice(
        &report.transactions,
        "transactions.txt",
        "Creating new file...",
        &mut output,
    );
    for warning in &report.audit_warnings {
        output.push_str(&format!(" Error saving changes: {}\n", warning));
    }
    output
}
