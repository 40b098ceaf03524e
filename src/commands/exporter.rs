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
        Some(("file", sub)) => export_file(conn, sub),
        _ => Ok(()),
    }
}

fn export_file(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").unwrap();
    let svc = TransactionService::new(SqliteStore::new(conn));
    let n = svc.save_to(Path::new(out))?;
    println!("Exported {} transactions to {}", n, out);
    Ok(())
}
