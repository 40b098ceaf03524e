// Copyright (c) 2025 SpendWise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single income or expense record. `amount` is an unsigned magnitude;
/// the sign is derived from `is_expense` at aggregation time and is never
/// stored negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    pub amount: Decimal,
    pub is_expense: bool,
    pub category: String,
    pub date: NaiveDateTime,
    pub owner_id: Option<Uuid>,
}

impl Transaction {
    pub fn signed_amount(&self) -> Decimal {
        if self.is_expense {
            -self.amount
        } else {
            self.amount
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        User {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// An audit-log line, appended whenever a transaction is added. Never
/// mutated; read back only through a recency filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub user_id: Uuid,
    pub description: String,
    pub timestamp: NaiveDateTime,
}

impl Event {
    pub fn new(user_id: Uuid, description: impl Into<String>) -> Self {
        Event {
            id: 0,
            user_id,
            description: description.into(),
            timestamp: Local::now().naive_local(),
        }
    }
}

/// Derived totals over a transaction list. Recomputed on demand, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessState {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub current_balance: Decimal,
    pub transactions: Vec<Transaction>,
}

impl ProcessState {
    pub fn compute(transactions: Vec<Transaction>) -> Self {
        let mut total_income = Decimal::ZERO;
        let mut total_expenses = Decimal::ZERO;
        for t in &transactions {
            if t.is_expense {
                total_expenses += t.amount;
            } else {
                total_income += t.amount;
            }
        }
        ProcessState {
            total_income,
            total_expenses,
            current_balance: total_income - total_expenses,
            transactions,
        }
    }
}

/// `Σ (is_expense ? -amount : +amount)` over the slice.
pub fn balance(transactions: &[Transaction]) -> Decimal {
    transactions.iter().map(Transaction::signed_amount).sum()
}
