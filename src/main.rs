// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use budgetbook::{cli, commands, ledger::Ledger, storage};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = match matches.get_one::<String>("file") {
        Some(path) => storage::Store::at(path),
        None => storage::Store::open_default()?,
    };
    let mut ledger = Ledger::open(store);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Data file initialized at {}", ledger.store().path().display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut ledger, sub)?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("report", sub)) => commands::reports::handle(&ledger, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&ledger)?,
        Some(("clear", sub)) => commands::clear::handle(&mut ledger, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
