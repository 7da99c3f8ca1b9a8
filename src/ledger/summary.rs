use std::collections::HashMap;

use super::transaction::Transaction;

/// Signed total for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Per-category signed totals, kept in the order categories first appear.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategorySummary {
    entries: Vec<CategoryTotal>,
}

impl CategorySummary {
    /// Accumulates `+amount` for income and `-amount` for expenses in a single pass.
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut index: HashMap<&'a str, usize> = HashMap::new();
        let mut entries: Vec<CategoryTotal> = Vec::new();
        for txn in transactions {
            let slot = *index.entry(txn.category.as_str()).or_insert_with(|| {
                entries.push(CategoryTotal {
                    category: txn.category.clone(),
                    total: 0.0,
                });
                entries.len() - 1
            });
            entries[slot].total += txn.signed_amount();
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[CategoryTotal] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.total)
    }

    /// Sum across all categories; matches the ledger balance when the cache is consistent.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.total).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a CategorySummary {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
