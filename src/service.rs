// Copyright (c) 2025 SpendWise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, Local, NaiveDateTime};
use rust_decimal::Decimal;
use std::path::Path;

use crate::errors::ServiceError;
use crate::flatfile;
use crate::models::{self, Category, Event, ProcessState, Transaction, User};
use crate::store::{TransactionFilter, TransactionStore};

/// Default lookback window for event queries. Reports use calendar-month
/// equality instead; the two filters intentionally disagree.
pub const EVENT_LOOKBACK_DAYS: i64 = 30;

/// Validates inputs and delegates to the store. This is the only layer that
/// raises domain errors; the store below ignores missing rows.
pub struct TransactionService<S: TransactionStore> {
    store: S,
}

impl<S: TransactionStore> TransactionService<S> {
    pub fn new(store: S) -> Self {
        TransactionService { store }
    }

    /// Validates, then appends the transaction row and its companion audit
    /// event. The two writes are not atomic: a failure between them leaves
    /// an orphaned transaction with no event.
    pub fn add_transaction(
        &mut self,
        description: &str,
        amount: Decimal,
        is_expense: bool,
        category: Option<&Category>,
        user: Option<&User>,
        date: Option<NaiveDateTime>,
    ) -> Result<Transaction, ServiceError> {
        if description.trim().is_empty() {
            return Err(ServiceError::EmptyDescription);
        }
        if amount <= Decimal::ZERO {
            return Err(ServiceError::NonPositiveAmount);
        }
        let category = category.ok_or(ServiceError::MissingCategory)?;
        let user = user.ok_or(ServiceError::MissingUser)?;

        let mut tx = Transaction {
            id: 0,
            description: description.to_string(),
            amount,
            is_expense,
            category: category.name.clone(),
            date: date.unwrap_or_else(|| Local::now().naive_local()),
            owner_id: Some(user.id),
        };
        tx.id = self.store.add_transaction(tx.clone())?;

        let event = Event::new(
            user.id,
            format!(
                "User {} added transaction: {}, Amount: {}, Category: {}",
                user.name, description, amount, category.name
            ),
        );
        self.store.add_event(event)?;
        Ok(tx)
    }

    pub fn transactions(&self) -> Result<Vec<Transaction>, ServiceError> {
        Ok(self.store.transactions(&TransactionFilter::default())?)
    }

    pub fn transactions_matching(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>, ServiceError> {
        Ok(self.store.transactions(filter)?)
    }

    pub fn remove_transaction(&mut self, id: i64) -> Result<(), ServiceError> {
        Ok(self.store.remove_transaction(id)?)
    }

    pub fn balance(&self) -> Result<Decimal, ServiceError> {
        let txs = self.transactions()?;
        Ok(models::balance(&txs))
    }

    pub fn process_state(&self) -> Result<ProcessState, ServiceError> {
        let txs = self.transactions()?;
        Ok(ProcessState::compute(txs))
    }

    /// Transactions whose date falls in the given calendar month, regardless
    /// of time of day.
    pub fn monthly_report(&self, month: u32, year: i32) -> Result<Vec<Transaction>, ServiceError> {
        Ok(self.store.transactions(&TransactionFilter::month(year, month))?)
    }

    pub fn recent_events(&self, days: i64) -> Result<Vec<Event>, ServiceError> {
        let cutoff = Local::now().naive_local() - Duration::days(days);
        Ok(self.store.events_since(cutoff)?)
    }

    /// Re-saves the current list via a full overwrite.
    pub fn save_transactions(&mut self) -> Result<(), ServiceError> {
        let txs = self.transactions()?;
        Ok(self.store.replace_all(txs)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<usize, ServiceError> {
        let mut txs = self.transactions()?;
        txs.reverse(); // file keeps oldest-first order
        flatfile::save(path, &txs)?;
        Ok(txs.len())
    }

    /// Loads the legacy flat file and appends every well-formed row to the
    /// store; loading never replaces what is already there.
    pub fn load_from(&mut self, path: &Path) -> Result<usize, ServiceError> {
        let loaded = flatfile::load(path)?;
        let n = loaded.len();
        for tx in loaded {
            self.store.add_transaction(tx)?;
        }
        Ok(n)
    }
}
