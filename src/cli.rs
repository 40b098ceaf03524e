// Copyright (c) 2025 SpendWise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendwise")
        .about("Personal income/expense tracker with audit log and monthly reports")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("user")
                .about("Manage users")
                .subcommand(
                    Command::new("add").about("Add a user").arg(
                        Arg::new("name").long("name").required(true).help("User name"),
                    ),
                )
                .subcommand(json_flags(Command::new("list").about("List users"))),
        )
        .subcommand(
            Command::new("category")
                .about("Manage transaction categories")
                .subcommand(
                    Command::new("add")
                        .about("Add a category")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("desc")
                                .long("desc")
                                .help("Optional category description"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List categories")))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a category")
                        .arg(Arg::new("name").long("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("desc")
                                .long("desc")
                                .required(true)
                                .help("What the money was for"),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Positive amount; sign comes from --expense"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Category name"),
                        )
                        .arg(
                            Arg::new("user")
                                .long("user")
                                .required(true)
                                .help("User recording the transaction"),
                        )
                        .arg(
                            Arg::new("expense")
                                .long("expense")
                                .action(ArgAction::SetTrue)
                                .help("Mark as an expense (default is income)"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD (defaults to now)"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("user").long("user"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm").about("Delete a transaction").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Balances and summaries")
                .subcommand(json_flags(
                    Command::new("balance").about("Current balance (income - expenses)"),
                ))
                .subcommand(json_flags(
                    Command::new("monthly")
                        .about("Transactions for a calendar month")
                        .arg(Arg::new("month").long("month").required(true).help("YYYY-MM")),
                ))
                .subcommand(json_flags(
                    Command::new("state").about("Income/expense totals and balance"),
                )),
        )
        .subcommand(
            Command::new("event")
                .about("Audit log")
                .subcommand(json_flags(
                    Command::new("list")
                        .about("Recent audit events, newest first")
                        .arg(
                            Arg::new("days")
                                .long("days")
                                .value_parser(value_parser!(i64))
                                .help("Lookback window in days (default 30)"),
                        )
                        .arg(Arg::new("user").long("user").help("Filter by user name")),
                )),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("file")
                    .about("Write transactions to a pipe-delimited file")
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(
            Command::new("import").about("Import data").subcommand(
                Command::new("file")
                    .about("Append transactions from a pipe-delimited file")
                    .arg(Arg::new("path").long("path").required(true)),
            ),
        )
}
