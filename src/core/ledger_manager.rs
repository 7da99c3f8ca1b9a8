use std::path::Path;

use crate::core::services::LedgerService;
use crate::errors::Result;
use crate::ledger::{CategorySummary, Ledger, Transaction, TransactionKind};
use crate::storage::StorageBackend;

/// Binds a storage backend to the ledger it loaded, so every mutation is persisted.
pub struct LedgerManager {
    storage: Box<dyn StorageBackend>,
    ledger: Ledger,
}

impl LedgerManager {
    /// Loads the document once from `storage`.
    pub fn open(storage: Box<dyn StorageBackend>) -> Result<Self> {
        let ledger = storage.load()?;
        Ok(Self { storage, ledger })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn location(&self) -> &Path {
        self.storage.location()
    }

    pub fn add_transaction(
        &mut self,
        amount: f64,
        category: impl Into<String>,
        kind: TransactionKind,
    ) -> Result<f64> {
        LedgerService::add_transaction(
            self.storage.as_ref(),
            &mut self.ledger,
            amount,
            category,
            kind,
        )
    }

    pub fn balance(&self) -> f64 {
        LedgerService::balance(&self.ledger)
    }

    pub fn list_transactions(&self) -> &[Transaction] {
        LedgerService::list_transactions(&self.ledger)
    }

    pub fn summarize_by_category(&self) -> CategorySummary {
        LedgerService::summarize_by_category(&self.ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonStorage;
    use tempfile::TempDir;

    #[test]
    fn reopening_sees_previous_session() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("finance_data.json");

        let mut first = LedgerManager::open(Box::new(JsonStorage::new(&path))).unwrap();
        first
            .add_transaction(300.0, "Freelance", TransactionKind::Income)
            .unwrap();
        first
            .add_transaction(45.5, "Books", TransactionKind::Expense)
            .unwrap();

        let second = LedgerManager::open(Box::new(JsonStorage::new(&path))).unwrap();
        assert_eq!(second.ledger(), first.ledger());
        assert_eq!(second.balance(), 254.5);
        assert_eq!(second.list_transactions().len(), 2);
        assert_eq!(second.location(), path.as_path());
    }
}
