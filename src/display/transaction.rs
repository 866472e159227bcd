//! Ledger display formatting
//!
//! Formats ledger rows as a table for the `history` command.

use crate::models::Transaction;
use crate::storage::record::format_date;

/// Format ledger rows as a table
pub fn format_transaction_list(transactions: &[&Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let user_width = transactions
        .iter()
        .map(|t| t.username.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let book_width = transactions
        .iter()
        .map(|t| t.book_id.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<6}  {:<6}  {:<user_width$}  {:<book_width$}  {:<10}  {:<10}\n",
        "ID",
        "Type",
        "User",
        "Book",
        "Borrowed",
        "Returned",
        user_width = user_width,
        book_width = book_width,
    ));

    output.push_str(&format!(
        "{:-<6}  {:-<6}  {:-<user_width$}  {:-<book_width$}  {:-<10}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        user_width = user_width,
        book_width = book_width,
    ));

    for txn in transactions {
        output.push_str(&format!(
            "{:<6}  {:<6}  {:<user_width$}  {:<book_width$}  {:<10}  {:<10}\n",
            txn.id.as_str(),
            txn.kind().to_string(),
            txn.username,
            txn.book_id,
            format_date(txn.date_borrowed.as_ref()),
            format_date(txn.date_returned.as_ref()),
            user_width = user_width,
            book_width = book_width,
        ));
    }

    output
}
