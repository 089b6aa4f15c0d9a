//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display
//! as a register.

use crate::models::Transaction;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, currency_symbol: &str) -> String {
    let note = if txn.note.is_empty() {
        "(no note)".to_string()
    } else {
        single_line(&txn.note)
    };

    format!(
        "{:>4} {:7} {:8} {:>12} {}",
        txn.id,
        txn.period.to_string(),
        txn.kind.as_str(),
        txn.amount.format_with_symbol(currency_symbol),
        truncate(&note, 30)
    )
}

/// Format one owner's transactions as a register
pub fn format_history(owner: &str, transactions: &[&Transaction], currency_symbol: &str) -> String {
    if transactions.is_empty() {
        return format!("No transactions found for {}.\n", owner);
    }

    let mut output = String::new();
    output.push_str(&format!("History for {}\n", owner));
    output.push_str(&format!(
        "{:>4} {:7} {:8} {:>12} {}\n",
        "ID", "Month", "Type", "Amount", "Note"
    ));
    output.push_str(&"-".repeat(64));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, currency_symbol));
        output.push('\n');
    }

    output
}

/// Notes may hold line breaks; a register row may not
fn single_line(s: &str) -> String {
    s.replace(['\n', '\r'], " ")
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
