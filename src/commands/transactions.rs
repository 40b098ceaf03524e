// Copyright (c) 2025 SpendWise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::service::TransactionService;
use crate::store::{SqliteStore, TransactionFilter};
use crate::utils::{
    TS_FORMAT, category_by_name, maybe_print_json, parse_date, parse_decimal, parse_month,
    pretty_table, user_by_name,
};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let description = sub.get_one::<String>("desc").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let is_expense = sub.get_flag("expense");
    let category = category_by_name(conn, sub.get_one::<String>("category").unwrap())?;
    let user = user_by_name(conn, sub.get_one::<String>("user").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => Some(parse_date(s)?.and_time(chrono::NaiveTime::MIN)),
        None => None,
    };

    let mut svc = TransactionService::new(SqliteStore::new(conn));
    let tx = svc.add_transaction(
        description,
        amount,
        is_expense,
        Some(&category),
        Some(&user),
        date,
    )?;
    println!(
        "Recorded {} '{}' of {} in '{}' (id: {})",
        if tx.is_expense { "expense" } else { "income" },
        tx.description,
        tx.amount,
        tx.category,
        tx.id
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.owner.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Description", "Amount", "Kind", "Category", "Owner"],
                rows,
            )
        );
    }
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut svc = TransactionService::new(SqliteStore::new(conn));
    svc.remove_transaction(id)?;
    println!("Removed transaction {} (if it existed)", id);
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub kind: String,
    pub category: String,
    pub owner: String,
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let mut filter = TransactionFilter::default();
    if let Some(month) = sub.get_one::<String>("month") {
        let (y, m) = parse_month(month)?;
        filter.month = Some((y, m));
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        filter.category = Some(cat.clone());
    }
    if let Some(user) = sub.get_one::<String>("user") {
        filter.owner = Some(user_by_name(conn, user)?.id);
    }
    filter.limit = sub.get_one::<usize>("limit").copied();

    let svc = TransactionService::new(SqliteStore::new(conn));
    let txs = svc.transactions_matching(&filter)?;
    Ok(txs
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.format(TS_FORMAT).to_string(),
            description: t.description,
            amount: t.amount.to_string(),
            kind: if t.is_expense { "expense" } else { "income" }.to_string(),
            category: t.category,
            owner: t.owner_id.map(|u| u.to_string()).unwrap_or_default(),
        })
        .collect())
}
