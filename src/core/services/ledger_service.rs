//! Operations over a loaded ledger document.

use tracing::info;

use crate::errors::Result;
use crate::ledger::{CategorySummary, Ledger, Transaction, TransactionKind};
use crate::storage::StorageBackend;

/// Stateless helpers for recording and reporting on ledger transactions.
pub struct LedgerService;

impl LedgerService {
    /// Records a transaction stamped with the current time, persists the whole
    /// document, and returns the updated balance.
    ///
    /// `amount` is taken as given; callers validate user input beforehand.
    pub fn add_transaction(
        storage: &dyn StorageBackend,
        ledger: &mut Ledger,
        amount: f64,
        category: impl Into<String>,
        kind: TransactionKind,
    ) -> Result<f64> {
        let transaction = Transaction::new(amount, category, kind);
        Self::append(storage, ledger, transaction)
    }

    /// Appends an already constructed transaction and persists the document.
    pub fn append(
        storage: &dyn StorageBackend,
        ledger: &mut Ledger,
        transaction: Transaction,
    ) -> Result<f64> {
        let kind = transaction.kind;
        let amount = transaction.amount;
        let balance = ledger.record(transaction);
        storage.save(ledger)?;
        info!(%kind, amount, balance, "transaction recorded");
        Ok(balance)
    }

    pub fn balance(ledger: &Ledger) -> f64 {
        ledger.balance()
    }

    /// Transactions in insertion order; empty when nothing has been recorded.
    pub fn list_transactions(ledger: &Ledger) -> &[Transaction] {
        ledger.transactions()
    }

    pub fn summarize_by_category(ledger: &Ledger) -> CategorySummary {
        ledger.summarize_by_category()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LedgerError;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// Keeps saved snapshots in memory and can be told to refuse writes.
    struct RecordingStorage {
        saves: Mutex<Vec<Ledger>>,
        fail: bool,
        path: PathBuf,
    }

    impl RecordingStorage {
        fn new(fail: bool) -> Self {
            Self {
                saves: Mutex::new(Vec::new()),
                fail,
                path: PathBuf::from("memory"),
            }
        }
    }

    impl StorageBackend for RecordingStorage {
        fn load(&self) -> Result<Ledger> {
            Ok(self.saves.lock().unwrap().last().cloned().unwrap_or_default())
        }

        fn save(&self, ledger: &Ledger) -> Result<()> {
            if self.fail {
                return Err(LedgerError::StorageError("disk full".into()));
            }
            self.saves.lock().unwrap().push(ledger.clone());
            Ok(())
        }

        fn location(&self) -> &Path {
            &self.path
        }
    }

    #[test]
    fn add_transaction_persists_after_every_append() {
        let storage = RecordingStorage::new(false);
        let mut ledger = Ledger::default();

        let balance = LedgerService::add_transaction(
            &storage,
            &mut ledger,
            1000.0,
            "Salary",
            TransactionKind::Income,
        )
        .unwrap();
        assert_eq!(balance, 1000.0);
        let balance = LedgerService::add_transaction(
            &storage,
            &mut ledger,
            200.0,
            "Groceries",
            TransactionKind::Expense,
        )
        .unwrap();
        assert_eq!(balance, 800.0);

        let saves = storage.saves.lock().unwrap();
        assert_eq!(saves.len(), 2);
        assert_eq!(saves[0].transactions.len(), 1);
        assert_eq!(saves[1], ledger);
    }

    #[test]
    fn save_failure_is_propagated() {
        let storage = RecordingStorage::new(true);
        let mut ledger = Ledger::default();
        let err = LedgerService::add_transaction(
            &storage,
            &mut ledger,
            5.0,
            "Snacks",
            TransactionKind::Expense,
        )
        .expect_err("save failure must surface");
        assert!(err.is_storage());
    }

    #[test]
    fn readers_report_empty_state() {
        let ledger = Ledger::default();
        assert_eq!(LedgerService::balance(&ledger), 0.0);
        assert!(LedgerService::list_transactions(&ledger).is_empty());
        assert!(LedgerService::summarize_by_category(&ledger).is_empty());
    }
}
