// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetbook::{ledger::Ledger, models::TxKind, storage::Store};
use rust_decimal::Decimal;
use tempfile::TempDir;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn setup() -> (TempDir, Ledger) {
    let dir = TempDir::new().unwrap();
    let mut ledger = Ledger::open(Store::at(dir.path().join("transactions.json")));
    ledger.add("Salary", dec("2000"), TxKind::Income, "salary");
    ledger.add("Lunch", dec("15.5"), TxKind::Expense, "food");
    ledger.add("Groceries", dec("60"), TxKind::Expense, "food");
    ledger.add("Bus", dec("2.5"), TxKind::Expense, "transport");
    (dir, ledger)
}

#[test]
fn no_constraints_matches_get_all() {
    let (_dir, ledger) = setup();
    let filtered = ledger.filtered(None, None);
    let all = ledger.all();
    assert_eq!(filtered.len(), all.len());
    for (f, a) in filtered.iter().zip(all.iter()) {
        assert_eq!(*f, a);
    }
}

#[test]
fn type_constraint_alone() {
    let (_dir, ledger) = setup();
    let expenses = ledger.filtered(Some(TxKind::Expense), None);
    assert_eq!(expenses.len(), 3);
    assert!(expenses.iter().all(|t| t.kind == TxKind::Expense));
    // relative order preserved
    let descriptions: Vec<&str> = expenses.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descriptions, ["Lunch", "Groceries", "Bus"]);
}

#[test]
fn category_constraint_alone() {
    let (_dir, ledger) = setup();
    let food = ledger.filtered(None, Some("food"));
    assert_eq!(food.len(), 2);
    assert!(food.iter().all(|t| t.category == "food"));
}

#[test]
fn both_constraints_apply_as_logical_and() {
    let (_dir, ledger) = setup();
    let income_food = ledger.filtered(Some(TxKind::Income), Some("food"));
    assert!(income_food.is_empty());

    let expense_food = ledger.filtered(Some(TxKind::Expense), Some("food"));
    assert_eq!(expense_food.len(), 2);
}

#[test]
fn filter_on_empty_ledger_is_empty() {
    let dir = TempDir::new().unwrap();
    let ledger = Ledger::open(Store::at(dir.path().join("transactions.json")));
    assert!(ledger.filtered(None, None).is_empty());
    assert!(ledger.filtered(Some(TxKind::Income), Some("salary")).is_empty());
}
