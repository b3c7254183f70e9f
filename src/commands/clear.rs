// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use anyhow::{bail, Result};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    if !m.get_flag("yes") {
        bail!("Refusing to wipe stored operations without --yes");
    }
    ledger.store().clear();
    ledger.reload();
    println!("All stored operations cleared");
    Ok(())
}
