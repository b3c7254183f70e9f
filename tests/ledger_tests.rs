// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetbook::{ledger::Ledger, models::TxKind, storage::Store};
use rust_decimal::Decimal;
use tempfile::TempDir;

fn setup() -> (TempDir, Ledger) {
    let dir = TempDir::new().unwrap();
    let ledger = Ledger::open(Store::at(dir.path().join("transactions.json")));
    (dir, ledger)
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn adds_preserve_count_and_insertion_order() {
    let (_dir, mut ledger) = setup();
    ledger.add("Salary", dec("2000"), TxKind::Income, "salary");
    ledger.add("Lunch", dec("15.5"), TxKind::Expense, "food");
    ledger.add("Bus", dec("2.5"), TxKind::Expense, "transport");

    let all = ledger.all();
    assert_eq!(all.len(), 3);
    let descriptions: Vec<&str> = all.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descriptions, ["Salary", "Lunch", "Bus"]);
}

#[test]
fn ids_stay_unique_and_monotonic_under_rapid_adds() {
    let (_dir, mut ledger) = setup();
    for i in 0..5 {
        ledger.add(&format!("op {}", i), dec("1"), TxKind::Expense, "food");
    }
    let ids: Vec<i64> = ledger.all().iter().map(|t| t.id).collect();
    for pair in ids.windows(2) {
        assert!(pair[0] < pair[1], "ids not monotonic: {:?}", ids);
    }
}

#[test]
fn delete_returns_true_exactly_once_per_id() {
    let (_dir, mut ledger) = setup();
    let tx = ledger.add("Lunch", dec("15.5"), TxKind::Expense, "food");
    assert!(ledger.delete(tx.id));
    assert!(!ledger.delete(tx.id));
    assert!(ledger.all().is_empty());
}

#[test]
fn delete_unknown_id_leaves_ledger_unchanged() {
    let (_dir, mut ledger) = setup();
    ledger.add("Salary", dec("2000"), TxKind::Income, "salary");
    ledger.add("Lunch", dec("15.5"), TxKind::Expense, "food");
    let before = ledger.all().to_vec();

    assert!(!ledger.delete(9999));
    assert_eq!(ledger.all(), &before[..]);
}

#[test]
fn expense_only_ledger_goes_negative() {
    let (_dir, mut ledger) = setup();
    let tx = ledger.add("Lunch", dec("15.50"), TxKind::Expense, "food");
    assert_eq!(tx.kind, TxKind::Expense);
    assert_eq!(tx.amount, dec("15.5"));
    assert_eq!(ledger.expenses(), dec("15.5"));
    assert_eq!(ledger.balance(), dec("-15.5"));
}

#[test]
fn balance_nets_income_against_expenses() {
    let (_dir, mut ledger) = setup();
    ledger.add("Salary", dec("2000"), TxKind::Income, "salary");
    ledger.add("Lunch", dec("15.5"), TxKind::Expense, "food");
    assert_eq!(ledger.balance(), dec("1984.5"));
    assert_eq!(ledger.income(), dec("2000"));
    assert_eq!(ledger.expenses(), dec("15.5"));
}

#[test]
fn balance_identity_holds_for_mixed_ledger() {
    let (_dir, mut ledger) = setup();
    ledger.add("Salary", dec("1200.40"), TxKind::Income, "salary");
    ledger.add("Gig", dec("300"), TxKind::Income, "freelance");
    ledger.add("Groceries", dec("87.13"), TxKind::Expense, "food");
    ledger.add("Cinema", dec("12"), TxKind::Expense, "entertainment");
    assert_eq!(ledger.balance(), ledger.income() - ledger.expenses());
}

#[test]
fn sums_are_zero_on_empty_ledger() {
    let (_dir, ledger) = setup();
    assert_eq!(ledger.balance(), Decimal::ZERO);
    assert_eq!(ledger.income(), Decimal::ZERO);
    assert_eq!(ledger.expenses(), Decimal::ZERO);
}

#[test]
fn mutations_are_durable_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("transactions.json");

    let mut ledger = Ledger::open(Store::at(&path));
    let keep = ledger.add("Salary", dec("2000"), TxKind::Income, "salary");
    let gone = ledger.add("Lunch", dec("15.5"), TxKind::Expense, "food");
    ledger.delete(gone.id);

    let reopened = Ledger::open(Store::at(&path));
    assert_eq!(reopened.all().len(), 1);
    assert_eq!(reopened.all()[0], keep);
}

#[test]
fn reload_picks_up_externally_persisted_state() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("transactions.json");

    let mut writer = Ledger::open(Store::at(&path));
    writer.add("Salary", dec("2000"), TxKind::Income, "salary");

    let mut reader = Ledger::open(Store::at(&path));
    assert_eq!(reader.all().len(), 1);
    writer.add("Lunch", dec("15.5"), TxKind::Expense, "food");
    reader.reload();
    assert_eq!(reader.all().len(), 2);
}

#[test]
fn open_on_empty_storage_yields_empty_ledger() {
    let (_dir, ledger) = setup();
    assert!(ledger.all().is_empty());
}
