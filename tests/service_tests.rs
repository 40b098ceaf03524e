// Copyright (c) 2025 SpendWise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, Local, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use spendwise::errors::ServiceError;
use spendwise::models::{Category, Transaction, User};
use spendwise::service::TransactionService;
use spendwise::store::{MemoryStore, TransactionStore};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn food() -> Category {
    Category {
        id: 1,
        name: "Food".into(),
        description: "Groceries and dining".into(),
    }
}

fn work() -> Category {
    Category {
        id: 2,
        name: "Work".into(),
        description: "".into(),
    }
}

fn svc() -> TransactionService<MemoryStore> {
    TransactionService::new(MemoryStore::new())
}

#[test]
fn balance_of_empty_store_is_zero() {
    let s = svc();
    assert_eq!(s.balance().unwrap(), Decimal::ZERO);
}

#[test]
fn expense_and_income_yield_net_balance() {
    let mut s = svc();
    let user = User::new("Alice");
    s.add_transaction("Groceries", dec("50"), true, Some(&food()), Some(&user), None)
        .unwrap();
    s.add_transaction("Freelance", dec("200"), false, Some(&work()), Some(&user), None)
        .unwrap();
    assert_eq!(s.balance().unwrap(), dec("150"));
}

#[test]
fn balance_is_insertion_order_independent() {
    let user = User::new("Alice");
    let entries: [(&str, &str, bool); 4] = [
        ("Rent", "900", true),
        ("Salary", "2500", false),
        ("Coffee", "3.50", true),
        ("Refund", "40", false),
    ];

    let mut forward = svc();
    for (d, a, e) in entries {
        forward
            .add_transaction(d, dec(a), e, Some(&food()), Some(&user), None)
            .unwrap();
    }
    let mut backward = svc();
    for (d, a, e) in entries.iter().rev() {
        backward
            .add_transaction(d, dec(a), *e, Some(&food()), Some(&user), None)
            .unwrap();
    }
    assert_eq!(forward.balance().unwrap(), dec("1636.50"));
    assert_eq!(forward.balance().unwrap(), backward.balance().unwrap());
}

#[test]
fn empty_description_is_rejected() {
    let mut s = svc();
    let user = User::new("Alice");
    let err = s
        .add_transaction("", dec("10"), true, Some(&food()), Some(&user), None)
        .unwrap_err();
    assert!(matches!(err, ServiceError::EmptyDescription));

    let err = s
        .add_transaction("   ", dec("10"), true, Some(&food()), Some(&user), None)
        .unwrap_err();
    assert!(matches!(err, ServiceError::EmptyDescription));
}

#[test]
fn non_positive_amount_is_rejected_with_no_partial_state() {
    let mut s = svc();
    let user = User::new("Alice");
    for amount in ["0", "-5"] {
        let err = s
            .add_transaction("Lunch", dec(amount), true, Some(&food()), Some(&user), None)
            .unwrap_err();
        assert!(matches!(err, ServiceError::NonPositiveAmount));
    }
    // Neither a transaction row nor an audit event was written.
    assert!(s.transactions().unwrap().is_empty());
    assert!(s.recent_events(365).unwrap().is_empty());
}

#[test]
fn missing_category_or_user_is_rejected() {
    let mut s = svc();
    let user = User::new("Alice");
    let err = s
        .add_transaction("Lunch", dec("10"), true, None, Some(&user), None)
        .unwrap_err();
    assert!(matches!(err, ServiceError::MissingCategory));

    let err = s
        .add_transaction("Lunch", dec("10"), true, Some(&food()), None, None)
        .unwrap_err();
    assert!(matches!(err, ServiceError::MissingUser));
    assert!(s.transactions().unwrap().is_empty());
}

#[test]
fn add_appends_audit_event_with_expected_wording() {
    let mut s = svc();
    let user = User::new("Alice");
    s.add_transaction("Groceries", dec("50"), true, Some(&food()), Some(&user), None)
        .unwrap();

    let events = s.recent_events(30).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].user_id, user.id);
    assert_eq!(
        events[0].description,
        "User Alice added transaction: Groceries, Amount: 50, Category: Food"
    );
}

#[test]
fn monthly_report_matches_calendar_month_regardless_of_time() {
    let mut s = svc();
    let user = User::new("Alice");
    let jan_morning = NaiveDate::from_ymd_opt(2025, 1, 3)
        .unwrap()
        .and_hms_opt(8, 15, 0)
        .unwrap();
    let jan_night = NaiveDate::from_ymd_opt(2025, 1, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    let feb = NaiveDate::from_ymd_opt(2025, 2, 1)
        .unwrap()
        .and_time(NaiveTime::MIN);
    let jan_2024 = NaiveDate::from_ymd_opt(2024, 1, 10)
        .unwrap()
        .and_time(NaiveTime::MIN);

    for (desc, date) in [
        ("A", jan_morning),
        ("B", jan_night),
        ("C", feb),
        ("D", jan_2024),
    ] {
        s.add_transaction(desc, dec("10"), true, Some(&food()), Some(&user), Some(date))
            .unwrap();
    }

    let report = s.monthly_report(1, 2025).unwrap();
    let mut names: Vec<&str> = report.iter().map(|t| t.description.as_str()).collect();
    names.sort();
    assert_eq!(names, ["A", "B"]);
}

#[test]
fn process_state_recomputes_totals() {
    let mut s = svc();
    let user = User::new("Alice");
    s.add_transaction("Salary", dec("2000"), false, Some(&work()), Some(&user), None)
        .unwrap();
    s.add_transaction("Rent", dec("800"), true, Some(&food()), Some(&user), None)
        .unwrap();
    s.add_transaction("Dinner", dec("45.50"), true, Some(&food()), Some(&user), None)
        .unwrap();

    let state = s.process_state().unwrap();
    assert_eq!(state.total_income, dec("2000"));
    assert_eq!(state.total_expenses, dec("845.50"));
    assert_eq!(state.current_balance, dec("1154.50"));
    assert_eq!(state.transactions.len(), 3);
}

#[test]
fn recent_events_excludes_entries_older_than_lookback() {
    let mut store = MemoryStore::new();
    let user = User::new("Alice");
    let now = Local::now().naive_local();

    let mut old = spendwise::models::Event::new(user.id, "stale");
    old.timestamp = now - Duration::days(40);
    let mut fresh = spendwise::models::Event::new(user.id, "fresh");
    fresh.timestamp = now - Duration::days(1);
    store.add_event(old).unwrap();
    store.add_event(fresh).unwrap();

    let s = TransactionService::new(store);
    let events = s.recent_events(30).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].description, "fresh");
}

#[test]
fn save_transactions_is_a_full_overwrite_of_the_same_list() {
    let mut s = svc();
    let user = User::new("Alice");
    s.add_transaction("Groceries", dec("50"), true, Some(&food()), Some(&user), None)
        .unwrap();
    s.add_transaction("Salary", dec("2000"), false, Some(&work()), Some(&user), None)
        .unwrap();

    s.save_transactions().unwrap();
    let txs = s.transactions().unwrap();
    assert_eq!(txs.len(), 2);
    assert_eq!(s.balance().unwrap(), dec("1950"));
}

#[test]
fn removing_missing_id_is_a_noop() {
    let mut s = svc();
    let user = User::new("Alice");
    s.add_transaction("Groceries", dec("50"), true, Some(&food()), Some(&user), None)
        .unwrap();

    s.remove_transaction(999).unwrap();
    assert_eq!(s.transactions().unwrap().len(), 1);
}

#[test]
fn replace_all_with_empty_list_clears_the_store() {
    let mut store = MemoryStore::new();
    store
        .add_transaction(Transaction {
            id: 0,
            description: "X".into(),
            amount: dec("1"),
            is_expense: false,
            category: "Misc".into(),
            date: Local::now().naive_local(),
            owner_id: None,
        })
        .unwrap();
    store.replace_all(Vec::new()).unwrap();

    let s = TransactionService::new(store);
    assert!(s.transactions().unwrap().is_empty());
    assert_eq!(s.balance().unwrap(), Decimal::ZERO);
}
