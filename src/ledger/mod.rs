//! Ledger document, transaction records, and category summaries.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;
pub mod transaction;

pub use ledger::Ledger;
pub use summary::{CategorySummary, CategoryTotal};
pub use transaction::{Transaction, TransactionKind, TIMESTAMP_FORMAT};
