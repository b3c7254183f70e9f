// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("budgetbook")
        .version(crate_version!())
        .about("Personal income/expense ledger with category statistics")
        .arg(
            Arg::new("file")
                .long("file")
                .global(true)
                .value_name("PATH")
                .help("Use an explicit data file instead of the platform data dir"),
        )
        .subcommand(Command::new("init").about("Initialize the data file and print its location"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect operations")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense operation")
                        .arg(
                            Arg::new("description")
                                .short('d')
                                .long("description")
                                .required(true)
                                .help("What the money was for"),
                        )
                        .arg(
                            Arg::new("amount")
                                .short('a')
                                .long("amount")
                                .required(true)
                                .help("Positive amount, e.g. 15.50"),
                        )
                        .arg(
                            Arg::new("type")
                                .short('t')
                                .long("type")
                                .value_parser(["income", "expense"])
                                .default_value("expense"),
                        )
                        .arg(
                            Arg::new("category")
                                .short('c')
                                .long("category")
                                .required(true)
                                .help("Category id, see 'category list'"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List operations, optionally filtered")
                        .arg(
                            Arg::new("type")
                                .short('t')
                                .long("type")
                                .value_parser(["all", "income", "expense"])
                                .default_value("all"),
                        )
                        .arg(
                            Arg::new("category")
                                .short('c')
                                .long("category")
                                .default_value("all")
                                .help("Category id or 'all'"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize))
                                .help("Show only the most recent N operations"),
                        ),
                ))
                .subcommand(
                    Command::new("rm").about("Delete an operation by id").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .help("Id of the operation to delete"),
                    ),
                ),
        )
        .subcommand(
            Command::new("category").about("Category catalog").subcommand(
                Command::new("list")
                    .about("List known categories")
                    .arg(
                        Arg::new("type")
                            .short('t')
                            .long("type")
                            .value_parser(["all", "income", "expense"])
                            .default_value("all"),
                    ),
            ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated views of the ledger")
                .subcommand(json_flags(
                    Command::new("summary").about("Balance, income and expense totals"),
                ))
                .subcommand(json_flags(
                    Command::new("categories").about("Per-category totals and shares"),
                )),
        )
        .subcommand(Command::new("doctor").about("Check the ledger for inconsistencies"))
        .subcommand(
            Command::new("clear").about("Wipe all stored operations").arg(
                Arg::new("yes")
                    .long("yes")
                    .action(ArgAction::SetTrue)
                    .help("Confirm the wipe"),
            ),
        )
}
