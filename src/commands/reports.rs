// Copyright (c) 2025 SpendWise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::service::TransactionService;
use crate::store::SqliteStore;
use crate::utils::{TS_FORMAT, fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("balance", sub)) => balance(conn, sub)?,
        Some(("monthly", sub)) => monthly(conn, sub)?,
        Some(("state", sub)) => state(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn balance(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let svc = TransactionService::new(SqliteStore::new(conn));
    let bal = svc.balance()?;
    let payload = json!({ "balance": fmt_money(&bal) });
    if !maybe_print_json(json_flag, jsonl_flag, &payload)? {
        println!("Current balance: {}", fmt_money(&bal));
    }
    Ok(())
}

fn monthly(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (year, month) = parse_month(sub.get_one::<String>("month").unwrap())?;
    let svc = TransactionService::new(SqliteStore::new(conn));
    let txs = svc.monthly_report(month, year)?;
    if !maybe_print_json(json_flag, jsonl_flag, &txs)? {
        let rows: Vec<Vec<String>> = txs
            .iter()
            .map(|t| {
                vec![
                    t.date.format(TS_FORMAT).to_string(),
                    t.description.clone(),
                    t.amount.to_string(),
                    if t.is_expense { "expense" } else { "income" }.to_string(),
                    t.category.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Description", "Amount", "Kind", "Category"], rows)
        );
    }
    Ok(())
}

fn state(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let svc = TransactionService::new(SqliteStore::new(conn));
    let state = svc.process_state()?;
    if !maybe_print_json(json_flag, jsonl_flag, &state)? {
        let rows = vec![
            vec!["Total income".to_string(), fmt_money(&state.total_income)],
            vec!["Total expenses".to_string(), fmt_money(&state.total_expenses)],
            vec!["Balance".to_string(), fmt_money(&state.current_balance)],
            vec!["Transactions".to_string(), state.transactions.len().to_string()],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}
