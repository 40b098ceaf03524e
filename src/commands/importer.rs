// Copyright (c) 2025 SpendWise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::service::TransactionService;
use crate::store::SqliteStore;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("file", sub)) => import_file(conn, sub),
        _ => Ok(()),
    }
}

fn import_file(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut svc = TransactionService::new(SqliteStore::new(conn));
    let n = svc.load_from(Path::new(path))?;
    println!("Imported {} transactions from {}", n, path);
    Ok(())
}
