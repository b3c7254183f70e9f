// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::models::TxKind;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let filter = sub.get_one::<String>("type").unwrap();
            let mut rows = Vec::new();
            for kind in [TxKind::Income, TxKind::Expense] {
                if filter != "all" && filter != kind.as_str() {
                    continue;
                }
                for c in categories::by_kind(kind) {
                    rows.push(vec![
                        kind.to_string(),
                        c.id.to_string(),
                        format!("{} {}", c.icon, c.name),
                        c.color.to_string(),
                    ]);
                }
            }
            println!("{}", pretty_table(&["Type", "Id", "Name", "Color"], rows));
        }
        _ => {}
    }
    Ok(())
}
