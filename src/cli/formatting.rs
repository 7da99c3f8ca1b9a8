//! Console text for ledger values. Pure string builders; printing happens in the shell.

use crate::ledger::{CategoryTotal, Transaction, TransactionKind};

pub const TRANSACTIONS_TITLE: &str = "Transactions";
pub const SUMMARY_TITLE: &str = "Summary by Category";
pub const NO_TRANSACTIONS: &str = "No transactions recorded.";
pub const NOTHING_TO_SUMMARIZE: &str = "No transactions to summarize.";
pub const GOODBYE: &str = "Goodbye! Stay on top of your finances!";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// Amounts as entered, always with a fractional part (`1000.0`, `12.5`).
pub fn raw_amount(amount: f64) -> String {
    format!("{amount:?}")
}

pub fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// `2024-01-05 10:00:00: -$12.5 (Lunch)`
pub fn transaction_line(transaction: &Transaction) -> String {
    format!(
        "{}: {}${} ({})",
        transaction
            .timestamp
            .format(crate::ledger::TIMESTAMP_FORMAT),
        transaction.kind.sign(),
        raw_amount(transaction.amount),
        transaction.category
    )
}

pub fn balance_line(balance: f64) -> String {
    format!("Current Balance: {}", money(balance))
}

pub fn summary_line(entry: &CategoryTotal) -> String {
    format!("{}: {}", entry.category, money(entry.total))
}

pub fn confirmation_line(kind: TransactionKind, amount: f64, category: &str) -> String {
    format!("{} of {} added to {}.", kind.label(), raw_amount(amount), category)
}
