// Copyright (c) 2025 SpendWise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendwise::flatfile;
use spendwise::models::Transaction;
use std::io::Write;
use tempfile::NamedTempFile;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn save_then_load_preserves_rows() {
    let txs = vec![
        Transaction {
            id: 1,
            description: "Groceries".into(),
            amount: dec("50"),
            is_expense: true,
            category: "Food".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 5)
                .unwrap()
                .and_hms_opt(18, 30, 0)
                .unwrap(),
            owner_id: None,
        },
        Transaction {
            id: 2,
            description: "Freelance".into(),
            amount: dec("200"),
            is_expense: false,
            category: "Work".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 6)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            owner_id: None,
        },
    ];

    let file = NamedTempFile::new().unwrap();
    flatfile::save(file.path(), &txs).unwrap();
    let loaded = flatfile::load(file.path()).unwrap();

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].description, "Groceries");
    assert_eq!(loaded[0].amount, dec("50"));
    assert!(loaded[0].is_expense);
    assert_eq!(loaded[0].category, "Food");
    assert_eq!(loaded[0].date, txs[0].date);
    assert_eq!(loaded[1].description, "Freelance");
    assert!(!loaded[1].is_expense);
}

#[test]
fn malformed_rows_are_skipped() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Groceries|50|true|Food|2025-01-05 18:30:00").unwrap();
    writeln!(file, "too|few|fields").unwrap();
    writeln!(file, "Bad amount|abc|true|Food|2025-01-05 18:30:00").unwrap();
    writeln!(file, "Bad flag|10|maybe|Food|2025-01-05 18:30:00").unwrap();
    writeln!(file, "|10|true|Food|2025-01-05 18:30:00").unwrap();
    writeln!(file, "Bad date|10|true|Food|sometime").unwrap();
    writeln!(file, "Salary|2000|false|Work|2025-01-31 09:00:00").unwrap();
    file.flush().unwrap();

    let loaded = flatfile::load(file.path()).unwrap();
    let names: Vec<&str> = loaded.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(names, ["Groceries", "Salary"]);
}

#[test]
fn date_only_rows_load_at_midnight() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Rent|900|true|Housing|2025-02-01").unwrap();
    file.flush().unwrap();

    let loaded = flatfile::load(file.path()).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(
        loaded[0].date,
        NaiveDate::from_ymd_opt(2025, 2, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    );
}
