// Copyright (c) 2025 SpendWise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime};
use rusqlite::{Connection, params};
use uuid::Uuid;

use crate::models::{Event, Transaction};
use crate::utils::{TS_FORMAT, parse_decimal, parse_ts};

/// Optional restrictions on `TransactionStore::transactions`. `month` is a
/// calendar `(year, month)` pair, matched on the date's month and year only.
#[derive(Debug, Default, Clone)]
pub struct TransactionFilter {
    pub owner: Option<Uuid>,
    pub category: Option<String>,
    pub month: Option<(i32, u32)>,
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn month(year: i32, month: u32) -> Self {
        TransactionFilter {
            month: Some((year, month)),
            ..Default::default()
        }
    }
}

/// The transaction store owns the transaction list exclusively; callers get
/// snapshots back from queries, never live references. No uniqueness or
/// foreign-key enforcement, no concurrency control; last write wins.
pub trait TransactionStore {
    /// Appends, assigning the next identifier when the incoming id is 0.
    /// Returns the id the row was stored under.
    fn add_transaction(&mut self, tx: Transaction) -> Result<i64>;

    /// All matching transactions, descending by date then id.
    fn transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>>;

    /// Deletes the matching row; silent no-op when absent.
    fn remove_transaction(&mut self, id: i64) -> Result<()>;

    /// Clears and bulk-inserts. The "save" operation has no differential
    /// semantics; it is a full overwrite every time.
    fn replace_all(&mut self, txs: Vec<Transaction>) -> Result<()>;

    fn add_event(&mut self, event: Event) -> Result<i64>;

    /// Events at or after `cutoff`, newest first.
    fn events_since(&self, cutoff: NaiveDateTime) -> Result<Vec<Event>>;
}

/// Vec-backed store for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryStore {
    transactions: Vec<Transaction>,
    events: Vec<Event>,
    next_tx_id: i64,
    next_event_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            next_tx_id: 1,
            next_event_id: 1,
            ..Default::default()
        }
    }
}

impl TransactionStore for MemoryStore {
    fn add_transaction(&mut self, mut tx: Transaction) -> Result<i64> {
        if tx.id == 0 {
            tx.id = self.next_tx_id;
        }
        self.next_tx_id = self.next_tx_id.max(tx.id) + 1;
        let id = tx.id;
        self.transactions.push(tx);
        Ok(id)
    }

    fn transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let mut out: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|t| match filter.owner {
                Some(owner) => t.owner_id == Some(owner),
                None => true,
            })
            .filter(|t| match &filter.category {
                Some(cat) => &t.category == cat,
                None => true,
            })
            .filter(|t| match filter.month {
                Some((y, m)) => t.date.year() == y && t.date.month() == m,
                None => true,
            })
            .cloned()
            .collect();
        out.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        if let Some(limit) = filter.limit {
            out.truncate(limit);
        }
        Ok(out)
    }

    fn remove_transaction(&mut self, id: i64) -> Result<()> {
        self.transactions.retain(|t| t.id != id);
        Ok(())
    }

    fn replace_all(&mut self, txs: Vec<Transaction>) -> Result<()> {
        self.transactions.clear();
        for tx in txs {
            self.add_transaction(tx)?;
        }
        Ok(())
    }

    fn add_event(&mut self, mut event: Event) -> Result<i64> {
        if event.id == 0 {
            event.id = self.next_event_id;
        }
        self.next_event_id = self.next_event_id.max(event.id) + 1;
        let id = event.id;
        self.events.push(event);
        Ok(id)
    }

    fn events_since(&self, cutoff: NaiveDateTime) -> Result<Vec<Event>> {
        let mut out: Vec<Event> = self
            .events
            .iter()
            .filter(|e| e.timestamp >= cutoff)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(out)
    }
}

/// SQLite-backed store over a borrowed connection. Amounts travel as TEXT,
/// timestamps as `YYYY-MM-DD HH:MM:SS` so `substr(date,1,7)` is the calendar
/// month.
pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        SqliteStore { conn }
    }

    fn row_to_transaction(r: &rusqlite::Row<'_>) -> rusqlite::Result<(i64, String, String, bool, String, String, Option<String>)> {
        Ok((
            r.get(0)?,
            r.get(1)?,
            r.get(2)?,
            r.get(3)?,
            r.get(4)?,
            r.get(5)?,
            r.get(6)?,
        ))
    }
}

impl TransactionStore for SqliteStore<'_> {
    fn add_transaction(&mut self, tx: Transaction) -> Result<i64> {
        if tx.id == 0 {
            self.conn.execute(
                "INSERT INTO transactions(description, amount, is_expense, category, date, owner_id)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    tx.description,
                    tx.amount.to_string(),
                    tx.is_expense,
                    tx.category,
                    tx.date.format(TS_FORMAT).to_string(),
                    tx.owner_id.map(|u| u.to_string()),
                ],
            )?;
            Ok(self.conn.last_insert_rowid())
        } else {
            self.conn.execute(
                "INSERT INTO transactions(id, description, amount, is_expense, category, date, owner_id)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    tx.id,
                    tx.description,
                    tx.amount.to_string(),
                    tx.is_expense,
                    tx.category,
                    tx.date.format(TS_FORMAT).to_string(),
                    tx.owner_id.map(|u| u.to_string()),
                ],
            )?;
            Ok(tx.id)
        }
    }

    fn transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let mut sql = String::from(
            "SELECT id, description, amount, is_expense, category, date, owner_id
             FROM transactions WHERE 1=1",
        );
        let mut params_vec: Vec<String> = Vec::new();

        if let Some(owner) = filter.owner {
            sql.push_str(" AND owner_id=?");
            params_vec.push(owner.to_string());
        }
        if let Some(ref cat) = filter.category {
            sql.push_str(" AND category=?");
            params_vec.push(cat.clone());
        }
        if let Some((y, m)) = filter.month {
            sql.push_str(" AND substr(date,1,7)=?");
            params_vec.push(format!("{:04}-{:02}", y, m));
        }
        sql.push_str(" ORDER BY date DESC, id DESC");
        if let Some(limit) = filter.limit {
            sql.push_str(" LIMIT ?");
            params_vec.push(limit.to_string());
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = if params_vec.is_empty() {
            stmt.query([])?
        } else {
            let params: Vec<&dyn rusqlite::ToSql> = params_vec
                .iter()
                .map(|s| s as &dyn rusqlite::ToSql)
                .collect();
            stmt.query(rusqlite::params_from_iter(params))?
        };

        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            let (id, description, amount, is_expense, category, date, owner) =
                Self::row_to_transaction(r)?;
            out.push(Transaction {
                id,
                description,
                amount: parse_decimal(&amount)
                    .with_context(|| format!("Invalid amount for transaction {}", id))?,
                is_expense,
                category,
                date: parse_ts(&date)
                    .with_context(|| format!("Invalid date for transaction {}", id))?,
                owner_id: match owner {
                    Some(s) => Some(
                        Uuid::parse_str(&s)
                            .with_context(|| format!("Invalid owner id '{}'", s))?,
                    ),
                    None => None,
                },
            });
        }
        Ok(out)
    }

    fn remove_transaction(&mut self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        Ok(())
    }

    fn replace_all(&mut self, txs: Vec<Transaction>) -> Result<()> {
        self.conn.execute("DELETE FROM transactions", [])?;
        for tx in txs {
            self.add_transaction(tx)?;
        }
        Ok(())
    }

    fn add_event(&mut self, event: Event) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO events(user_id, description, timestamp) VALUES (?1, ?2, ?3)",
            params![
                event.user_id.to_string(),
                event.description,
                event.timestamp.format(TS_FORMAT).to_string(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn events_since(&self, cutoff: NaiveDateTime) -> Result<Vec<Event>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, description, timestamp FROM events
             WHERE timestamp >= ?1 ORDER BY timestamp DESC, id DESC",
        )?;
        let mut rows = stmt.query(params![cutoff.format(TS_FORMAT).to_string()])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            let id: i64 = r.get(0)?;
            let user_id: String = r.get(1)?;
            let description: String = r.get(2)?;
            let timestamp: String = r.get(3)?;
            out.push(Event {
                id,
                user_id: Uuid::parse_str(&user_id)
                    .with_context(|| format!("Invalid user id '{}' on event {}", user_id, id))?,
                description,
                timestamp: parse_ts(&timestamp)
                    .with_context(|| format!("Invalid timestamp on event {}", id))?,
            });
        }
        Ok(out)
    }
}
