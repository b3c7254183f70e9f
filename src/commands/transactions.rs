// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::ledger::Ledger;
use crate::models::{Transaction, TxKind};
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, parse_id, pretty_table};
use anyhow::{bail, Result};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let description = sub.get_one::<String>("description").unwrap().trim();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let kind: TxKind = sub.get_one::<String>("type").unwrap().parse()?;
    let category = sub.get_one::<String>("category").unwrap();

    // The ledger accepts whatever it is given; rejecting bad input is
    // this layer's job.
    if description.is_empty() {
        bail!("Description must not be empty");
    }
    if amount <= Decimal::ZERO {
        bail!("Amount must be greater than zero");
    }
    if !categories::by_kind(kind).iter().any(|c| c.id == category.as_str()) {
        let known: Vec<&str> = categories::by_kind(kind).iter().map(|c| c.id).collect();
        bail!(
            "Unknown {} category '{}', expected one of: {}",
            kind,
            category,
            known.join(", ")
        );
    }

    let tx = ledger.add(description, amount, kind, category);
    println!(
        "Recorded {} {} '{}' (id {})",
        tx.kind,
        fmt_money(&tx.amount),
        tx.description,
        tx.id
    );
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = filtered_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.description.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Description", "Type", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

fn rm(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = parse_id(sub.get_one::<String>("id").unwrap())?;
    if ledger.delete(id) {
        println!("Removed transaction {}", id);
    } else {
        println!("No transaction with id {}", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub amount: String,
}

pub fn filtered_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let kind = match sub.get_one::<String>("type").map(String::as_str) {
        None | Some("all") => None,
        Some(s) => Some(s.parse::<TxKind>()?),
    };
    let category = sub
        .get_one::<String>("category")
        .map(String::as_str)
        .filter(|c| *c != "all");

    let mut txs = ledger.filtered(kind, category);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        // Most recent N, still in insertion order.
        let skip = txs.len().saturating_sub(*limit);
        txs.drain(..skip);
    }
    Ok(txs.into_iter().map(row).collect())
}

fn row(t: &Transaction) -> TransactionRow {
    let category = match categories::find(&t.category) {
        Some(c) => format!("{} {}", c.icon, c.name),
        None => t.category.clone(),
    };
    TransactionRow {
        id: t.id,
        date: t.date.format("%Y-%m-%d %H:%M").to_string(),
        description: t.description.clone(),
        kind: t.kind.to_string(),
        category,
        amount: fmt_money(&t.amount),
    }
}
