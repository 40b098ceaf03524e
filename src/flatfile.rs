// Copyright (c) 2025 SpendWise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Legacy pipe-delimited transaction file:
//! `description|amount|is_expense|category|date`, one row per line, no
//! header. Load skips malformed rows instead of failing the whole file.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, WriterBuilder};
use rust_decimal::Decimal;
use std::path::Path;

use crate::models::Transaction;
use crate::utils::TS_FORMAT;

pub fn save(path: &Path, transactions: &[Transaction]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Open {} for writing", path.display()))?;
    for t in transactions {
        let amount = t.amount.to_string();
        let date = t.date.format(TS_FORMAT).to_string();
        wtr.write_record([
            t.description.as_str(),
            amount.as_str(),
            if t.is_expense { "true" } else { "false" },
            t.category.as_str(),
            date.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn load(path: &Path) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Open {} for reading", path.display()))?;

    let mut out = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        if rec.len() != 5 {
            continue;
        }
        let description = rec[0].trim();
        let category = rec[3].trim();
        if description.is_empty() || category.is_empty() {
            continue;
        }
        let Ok(amount) = rec[1].trim().parse::<Decimal>() else {
            continue;
        };
        let Ok(is_expense) = rec[2].trim().parse::<bool>() else {
            continue;
        };
        let Some(date) = parse_row_date(rec[4].trim()) else {
            continue;
        };
        out.push(Transaction {
            id: 0,
            description: description.to_string(),
            amount,
            is_expense,
            category: category.to_string(),
            date,
            owner_id: None,
        });
    }
    Ok(out)
}

fn parse_row_date(s: &str) -> Option<NaiveDateTime> {
    if let Ok(ts) = NaiveDateTime::parse_from_str(s, TS_FORMAT) {
        return Some(ts);
    }
    // Date-only rows from older files load as midnight.
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
