// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Transaction;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Budgetbook", "budgetbook"));

const SLOT_FILE: &str = "transactions.json";

#[derive(Debug, thiserror::Error)]
enum SlotError {
    #[error("slot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("slot serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn data_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join(SLOT_FILE))
}

/// Durable storage for the ledger snapshot: one JSON file holding the
/// full transaction list. Failures never cross this boundary as errors;
/// a failed save reports `false` and a failed load degrades to an
/// empty list.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn open_default() -> Result<Self> {
        Ok(Self { path: data_path()? })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the slot with the given snapshot. The write goes through
    /// a sibling temp file and a rename, so the slot only ever holds a
    /// complete serialization or the previous one.
    pub fn save(&self, transactions: &[Transaction]) -> bool {
        match self.try_save(transactions) {
            Ok(()) => true,
            Err(err) => {
                eprintln!("warning: could not save ledger snapshot: {}", err);
                false
            }
        }
    }

    fn try_save(&self, transactions: &[Transaction]) -> Result<(), SlotError> {
        let blob = serde_json::to_string(transactions)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Reads the slot. An absent slot or an unparsable blob both yield
    /// the empty list.
    pub fn load(&self) -> Vec<Transaction> {
        let Ok(blob) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&blob).unwrap_or_default()
    }

    /// Removes the slot entirely. Clearing an absent slot is a no-op.
    pub fn clear(&self) {
        let _ = fs::remove_file(&self.path);
    }
}
