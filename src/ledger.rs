// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::categories;
use crate::models::{CategoryStat, Transaction, TxKind};
use crate::storage::Store;

/// The in-memory transaction collection and its query/aggregate
/// operations. The collection lives here exclusively; every mutation is
/// mirrored to the backing [`Store`] before the call returns.
///
/// Ordering is append-only: transactions keep their insertion order and
/// are never reordered.
pub struct Ledger {
    store: Store,
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Opens the ledger over a storage slot, loading whatever snapshot
    /// is currently persisted.
    pub fn open(store: Store) -> Self {
        let transactions = store.load();
        Self { store, transactions }
    }

    /// Replaces in-memory state with the persisted snapshot, discarding
    /// anything not yet saved (there is nothing to discard in normal
    /// operation, since every mutation saves immediately).
    pub fn reload(&mut self) {
        self.transactions = self.store.load();
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Records a new transaction and persists the full snapshot.
    ///
    /// The id is the creation time in milliseconds, bumped past the
    /// current maximum when two adds land in the same millisecond so ids
    /// stay unique and monotonic. Inputs are accepted as given; rejecting
    /// an empty description or a non-positive amount is the caller's job.
    pub fn add(
        &mut self,
        description: &str,
        amount: Decimal,
        kind: TxKind,
        category: &str,
    ) -> Transaction {
        let now = Utc::now();
        let mut id = now.timestamp_millis();
        if let Some(last) = self.transactions.iter().map(|t| t.id).max() {
            if id <= last {
                id = last + 1;
            }
        }
        let tx = Transaction {
            id,
            description: description.to_string(),
            amount,
            kind,
            category: category.to_string(),
            date: now,
        };
        self.transactions.push(tx.clone());
        self.store.save(&self.transactions);
        tx
    }

    /// Removes the transaction with the given id. Returns `true` and
    /// persists if something was removed; a miss leaves both memory and
    /// storage untouched.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        if self.transactions.len() != before {
            self.store.save(&self.transactions);
            true
        } else {
            false
        }
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Subsequence matching both constraints, relative order preserved.
    /// `None` on either axis means no constraint on that axis.
    pub fn filtered(&self, kind: Option<TxKind>, category: Option<&str>) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| kind.is_none_or(|k| t.kind == k))
            .filter(|t| category.is_none_or(|c| t.category == c))
            .collect()
    }

    /// Income total minus expense total over the whole collection.
    pub fn balance(&self) -> Decimal {
        self.transactions.iter().fold(Decimal::ZERO, |acc, t| match t.kind {
            TxKind::Income => acc + t.amount,
            TxKind::Expense => acc - t.amount,
        })
    }

    pub fn income(&self) -> Decimal {
        self.sum_of(TxKind::Income)
    }

    pub fn expenses(&self) -> Decimal {
        self.sum_of(TxKind::Expense)
    }

    fn sum_of(&self, kind: TxKind) -> Decimal {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    /// Aggregates amount and count per category display name.
    ///
    /// Category ids are resolved through the catalog; an unknown id falls
    /// into the "Неизвестно" bucket with the fallback color. Buckets are
    /// keyed by display name, so distinct ids resolving to one name share
    /// a bucket, and the bucket's type comes from the first transaction
    /// seen for that name.
    pub fn categories_stats(&self) -> BTreeMap<String, CategoryStat> {
        let mut stats: BTreeMap<String, CategoryStat> = BTreeMap::new();
        for t in &self.transactions {
            let (name, color) = match categories::find(&t.category) {
                Some(cat) => (cat.name, cat.color),
                None => (categories::FALLBACK_NAME, categories::FALLBACK_COLOR),
            };
            let entry = stats.entry(name.to_string()).or_insert_with(|| CategoryStat {
                amount: Decimal::ZERO,
                kind: t.kind,
                count: 0,
                color: color.to_string(),
            });
            entry.amount += t.amount;
            entry.count += 1;
        }
        stats
    }
}
