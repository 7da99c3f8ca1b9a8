mod common;

use finance_tracker::{cli::banner, init, ledger::TransactionKind};

#[test]
fn ledger_smoke() {
    init();

    let (mut manager, _guard) = common::setup_test_env();
    manager
        .add_transaction(10.0, "Pocket money", TransactionKind::Income)
        .unwrap();

    assert_eq!(manager.balance(), 10.0);
    assert!(manager.location().exists());
    assert!(banner().starts_with("Personal Finance Tracker v"));
}
