use serde::{Deserialize, Serialize};

use super::{summary::CategorySummary, transaction::Transaction};

/// Tolerance used when comparing the cached balance against the transaction log.
const BALANCE_EPSILON: f64 = 1e-6;

/// The persisted ledger document: a cached running balance plus an append-only log.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ledger {
    pub balance: f64,
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `transaction` and moves the cached balance by its signed amount.
    /// Returns the updated balance.
    pub fn record(&mut self, transaction: Transaction) -> f64 {
        self.balance += transaction.signed_amount();
        self.transactions.push(transaction);
        self.balance
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn summarize_by_category(&self) -> CategorySummary {
        CategorySummary::from_transactions(&self.transactions)
    }

    /// Recomputes the balance from the transaction log alone.
    pub fn derived_balance(&self) -> f64 {
        self.transactions
            .iter()
            .map(Transaction::signed_amount)
            .sum()
    }

    /// Difference between the cached balance and the log, when they disagree.
    ///
    /// Only reported; the cached value is never rewritten here.
    pub fn balance_drift(&self) -> Option<f64> {
        let drift = self.balance - self.derived_balance();
        if drift.abs() > BALANCE_EPSILON {
            Some(drift)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;

    fn income(amount: f64, category: &str) -> Transaction {
        Transaction::new(amount, category, TransactionKind::Income)
    }

    fn expense(amount: f64, category: &str) -> Transaction {
        Transaction::new(amount, category, TransactionKind::Expense)
    }

    #[test]
    fn default_ledger_is_empty() {
        let ledger = Ledger::new();
        assert_eq!(ledger.balance(), 0.0);
        assert!(ledger.is_empty());
        assert!(ledger.summarize_by_category().is_empty());
    }

    #[test]
    fn record_tracks_running_signed_sum() {
        let mut ledger = Ledger::new();
        let steps = [
            (income(1000.0, "Salary"), 1000.0),
            (expense(200.0, "Groceries"), 800.0),
            (expense(50.0, "Groceries"), 750.0),
            (income(0.0, "Gift"), 750.0),
        ];
        for (txn, expected) in steps {
            assert_eq!(ledger.record(txn), expected);
            assert_eq!(ledger.balance(), expected);
        }
        assert_eq!(ledger.transaction_count(), 4);
        assert_eq!(ledger.derived_balance(), 750.0);
        assert_eq!(ledger.balance_drift(), None);
    }

    #[test]
    fn record_preserves_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.record(expense(5.0, "b"));
        ledger.record(income(7.0, "a"));
        ledger.record(expense(1.0, "c"));
        let categories: Vec<&str> = ledger
            .transactions()
            .iter()
            .map(|txn| txn.category.as_str())
            .collect();
        assert_eq!(categories, ["b", "a", "c"]);
    }

    #[test]
    fn drift_is_reported_without_repair() {
        let mut ledger = Ledger::new();
        ledger.record(income(100.0, "Salary"));
        ledger.balance = 90.0;
        assert_eq!(ledger.balance_drift(), Some(-10.0));
        assert_eq!(ledger.balance(), 90.0);
    }

    #[test]
    fn deserialization_requires_both_fields() {
        assert!(serde_json::from_str::<Ledger>(r#"{"balance": 0.0}"#).is_err());
        assert!(serde_json::from_str::<Ledger>(r#"{"transactions": []}"#).is_err());
        let ledger: Ledger =
            serde_json::from_str(r#"{"balance": 0.0, "transactions": [], "note": "x"}"#).unwrap();
        assert!(ledger.is_empty());
    }
}
