// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::ledger::Ledger;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;

pub fn handle(ledger: &Ledger) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Category ids the catalog does not know
    for t in ledger.all() {
        if categories::find(&t.category).is_none() {
            rows.push(vec![
                "unknown_category".to_string(),
                format!("tx {} -> '{}'", t.id, t.category),
            ]);
        }
    }

    // 2) Known categories recorded on the wrong side of the ledger
    for t in ledger.all() {
        if categories::find(&t.category).is_some()
            && !categories::by_kind(t.kind).iter().any(|c| c.id == t.category)
        {
            rows.push(vec![
                "type_mismatch".to_string(),
                format!("tx {}: {} with category '{}'", t.id, t.kind, t.category),
            ]);
        }
    }

    // 3) Amounts that should have been rejected at entry
    for t in ledger.all() {
        if t.amount <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_amount".to_string(),
                format!("tx {}: {}", t.id, t.amount),
            ]);
        }
    }

    // 4) Duplicate ids
    let mut seen = HashSet::new();
    for t in ledger.all() {
        if !seen.insert(t.id) {
            rows.push(vec!["duplicate_id".to_string(), t.id.to_string()]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
