// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::TxKind;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(ledger, sub)?,
        Some(("categories", sub)) => categories(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = vec![
        vec!["Income".to_string(), fmt_money(&ledger.income())],
        vec!["Expenses".to_string(), fmt_money(&ledger.expenses())],
        vec!["Balance".to_string(), fmt_money(&ledger.balance())],
    ];
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Metric", "Amount"], data));
    }
    Ok(())
}

fn categories(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let stats = ledger.categories_stats();
    if stats.is_empty() && !json_flag && !jsonl_flag {
        println!("No operations recorded yet");
        return Ok(());
    }

    let income_total = ledger.income();
    let expense_total = ledger.expenses();
    let mut data = Vec::new();
    for (name, s) in &stats {
        // Share of the bucket within its side of the ledger, as the
        // original stat bars showed it.
        let total = match s.kind {
            TxKind::Income => income_total,
            TxKind::Expense => expense_total,
        };
        let share = if total.is_zero() {
            Decimal::ZERO
        } else {
            (s.amount * Decimal::from(100) / total).round_dp(1)
        };
        data.push(vec![
            name.clone(),
            s.kind.to_string(),
            s.count.to_string(),
            fmt_money(&s.amount),
            format!("{}%", share),
            s.color.clone(),
        ]);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(&["Category", "Type", "Count", "Amount", "Share", "Color"], data)
        );
    }
    Ok(())
}
