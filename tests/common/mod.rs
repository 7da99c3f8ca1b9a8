#![allow(dead_code)]

use std::path::PathBuf;

use finance_tracker::{core::LedgerManager, storage::JsonStorage};
use tempfile::TempDir;

/// Isolated ledger file location; the directory lives as long as the returned guard.
pub fn temp_data_file() -> (PathBuf, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("finance_data.json");
    (path, temp)
}

/// Opens a manager over a fresh, empty ledger file.
pub fn setup_test_env() -> (LedgerManager, TempDir) {
    let (path, guard) = temp_data_file();
    let manager =
        LedgerManager::open(Box::new(JsonStorage::new(path))).expect("open ledger manager");
    (manager, guard)
}
