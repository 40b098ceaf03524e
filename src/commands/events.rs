// Copyright (c) 2025 SpendWise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::service::{EVENT_LOOKBACK_DAYS, TransactionService};
use crate::store::SqliteStore;
use crate::utils::{TS_FORMAT, maybe_print_json, pretty_table, user_by_name};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let days = sub
        .get_one::<i64>("days")
        .copied()
        .unwrap_or(EVENT_LOOKBACK_DAYS);
    let only_user = match sub.get_one::<String>("user") {
        Some(name) => Some(user_by_name(conn, name)?.id),
        None => None,
    };

    let svc = TransactionService::new(SqliteStore::new(conn));
    let mut events = svc.recent_events(days)?;
    if let Some(uid) = only_user {
        events.retain(|e| e.user_id == uid);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &events)? {
        let rows: Vec<Vec<String>> = events
            .iter()
            .map(|e| {
                vec![
                    e.timestamp.format(TS_FORMAT).to_string(),
                    e.user_id.to_string(),
                    e.description.clone(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Timestamp", "User", "Event"], rows));
    }
    Ok(())
}
