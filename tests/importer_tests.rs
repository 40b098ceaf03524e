// Copyright (c) 2025 SpendWise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use spendwise::{cli, commands::exporter, commands::importer, db};
use std::io::Write;
use tempfile::NamedTempFile;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn importer_trims_cli_path_argument() {
    let conn = setup();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Groceries|50|true|Food|2025-01-05 18:30:00").unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let padded = format!("  {}  ", path);
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["spendwise", "import", "file", "--path", &padded]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(&conn, import_m).unwrap();
    } else {
        panic!("no import subcommand");
    }

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn import_appends_to_existing_rows() {
    let conn = setup();
    conn.execute(
        "INSERT INTO transactions(description, amount, is_expense, category, date)
         VALUES ('Existing', '5', 1, 'Misc', '2025-01-01 08:00:00')",
        [],
    )
    .unwrap();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Groceries|50|true|Food|2025-01-05 18:30:00").unwrap();
    writeln!(file, "Salary|2000|false|Work|2025-01-31 09:00:00").unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["spendwise", "import", "file", "--path", path]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(&conn, import_m).unwrap();
    } else {
        panic!("no import subcommand");
    }

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 3);
}

#[test]
fn export_then_import_round_trips() {
    let conn = setup();
    conn.execute(
        "INSERT INTO transactions(description, amount, is_expense, category, date)
         VALUES ('Groceries', '50', 1, 'Food', '2025-01-05 18:30:00'),
                ('Salary', '2000', 0, 'Work', '2025-01-31 09:00:00')",
        [],
    )
    .unwrap();

    let file = NamedTempFile::new().unwrap();
    let out = file.path().to_str().unwrap();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["spendwise", "export", "file", "--out", out]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&conn, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let other = setup();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["spendwise", "import", "file", "--path", out]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(&other, import_m).unwrap();
    } else {
        panic!("no import subcommand");
    }

    let first: String = other
        .query_row(
            "SELECT description FROM transactions ORDER BY id LIMIT 1",
            [],
            |r| r.get(0),
        )
        .unwrap();
    // Export writes oldest-first, so import re-inserts in the same order.
    assert_eq!(first, "Groceries");
    let count: i64 = other
        .query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 2);
}
