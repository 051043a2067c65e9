//! Store tests

use chrono::{Duration, FixedOffset, TimeZone, Utc};

use super::*;
use crate::models::NewExpense;

fn store_with(expenses: &[(&str, f64, &str)]) -> Store {
    let store = Store::new();
    for (category, amount, date) in expenses {
        store
            .append_expense(&NewExpense::new(category, *amount, date))
            .unwrap();
    }
    store
}

// ========== Expense Tests ==========

#[test]
fn test_new_store_is_empty() {
    let store = Store::new();
    assert!(store.list_expenses().unwrap().is_empty());
    assert_eq!(store.expense_count().unwrap(), 0);
    for period in ReportPeriod::ALL {
        assert!(store.list_reports(period).unwrap().is_empty());
    }
}

#[test]
fn test_append_assigns_sequential_ids() {
    let store = store_with(&[
        ("food", 10.0, "2024-01-01"),
        ("rent", 900.0, "2024-01-02"),
        ("food", 4.5, "2024-01-03"),
    ]);

    let ids: Vec<u64> = store.list_expenses().unwrap().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_append_returns_stored_record() {
    let store = Store::new();
    let expense = store
        .append_expense(&NewExpense::new("books", "12.75", "2024-05-06T08:00:00Z"))
        .unwrap();

    assert_eq!(expense.id, 1);
    assert_eq!(expense.category, "books");
    assert_eq!(expense.amount, 12.75);
    assert_eq!(expense.date, Utc.with_ymd_and_hms(2024, 5, 6, 8, 0, 0).unwrap());
    assert_eq!(store.list_expenses().unwrap(), vec![expense]);
}

#[test]
fn test_append_validation_does_not_mutate() {
    let store = store_with(&[("food", 10.0, "2024-01-01")]);

    let bad_amount = store.append_expense(&NewExpense::new("food", "ten", "2024-01-01"));
    assert!(bad_amount.unwrap_err().is_validation());

    let bad_date = store.append_expense(&NewExpense::new("food", 1.0, "yesterday"));
    assert!(bad_date.unwrap_err().is_validation());

    let blank_category = store.append_expense(&NewExpense::new(" ", 1.0, "2024-01-01"));
    assert!(blank_category.unwrap_err().is_validation());

    let missing = store.append_expense(&NewExpense::default());
    assert!(missing.unwrap_err().is_validation());

    assert_eq!(store.expense_count().unwrap(), 1);

    // The next successful append continues the sequence
    let next = store
        .append_expense(&NewExpense::new("food", 2.0, "2024-01-02"))
        .unwrap();
    assert_eq!(next.id, 2);
}

#[test]
fn test_category_is_stored_as_sent() {
    let store = store_with(&[(" food ", 1.0, "2024-01-01"), ("food", 2.0, "2024-01-02")]);

    let expenses = store.list_expenses().unwrap();
    assert_eq!(expenses[0].category, " food ");
    assert_eq!(expenses[1].category, "food");

    let analysis = store.analyze_expenses().unwrap();
    let keys: Vec<&str> = analysis.total_by_category.keys().map(String::as_str).collect();
    assert_eq!(keys, vec![" food ", "food"]);
    assert_eq!(analysis.total_by_category[" food "], 1.0);
    assert_eq!(analysis.total_by_category["food"], 2.0);
}

#[test]
fn test_concurrent_appends_get_unique_ids() {
    let store = Store::new();

    std::thread::scope(|scope| {
        for worker in 0..8 {
            let store = store.clone();
            scope.spawn(move || {
                for i in 0..25 {
                    let category = format!("worker-{}", worker);
                    store
                        .append_expense(&NewExpense::new(&category, i as f64, "2024-01-01"))
                        .unwrap();
                }
            });
        }
    });

    let mut ids: Vec<u64> = store.list_expenses().unwrap().iter().map(|e| e.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=200).collect::<Vec<u64>>());
}

#[test]
fn test_analyze_empty_store() {
    let analysis = Store::new().analyze_expenses().unwrap();
    assert_eq!(analysis.total_amount, 0.0);
    assert!(analysis.total_by_category.is_empty());
}

#[test]
fn test_analyze_sums_by_category() {
    let store = store_with(&[("food", 10.0, "2024-01-01"), ("food", 5.0, "2024-01-02")]);

    let analysis = store.analyze_expenses().unwrap();
    assert_eq!(analysis.total_by_category.len(), 1);
    assert_eq!(analysis.total_by_category["food"], 15.0);
    assert_eq!(analysis.total_amount, 15.0);
}

// ========== Report Tests ==========

#[test]
fn test_daily_report_window() {
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
    let store = Store::new();
    let old = (now - Duration::days(2)).to_rfc3339();
    let recent = (now - Duration::hours(6)).to_rfc3339();
    store.append_expense(&NewExpense::new("old", 100.0, &old)).unwrap();
    store.append_expense(&NewExpense::new("recent", 7.0, &recent)).unwrap();

    let report = store.generate_report(ReportPeriod::Daily, &now).unwrap();

    assert_eq!(report.period, ReportPeriod::Daily);
    assert_eq!(report.generated_at, now);
    assert_eq!(report.total_amount, 7.0);
    assert_eq!(report.total_by_category.len(), 1);
    assert_eq!(report.total_by_category["recent"], 7.0);
}

#[test]
fn test_daily_report_excludes_only_old_expense() {
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
    let store = store_with(&[("food", 10.0, "2024-03-01")]);

    let report = store.generate_report(ReportPeriod::Daily, &now).unwrap();

    assert_eq!(report.total_amount, 0.0);
    assert!(report.total_by_category.is_empty());
}

#[test]
fn test_report_window_is_inclusive() {
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
    let store = store_with(&[
        ("start", 1.0, "2024-03-03T00:00:00Z"),
        ("end", 2.0, "2024-03-10T00:00:00Z"),
        ("before", 4.0, "2024-03-02T23:59:59Z"),
        ("future", 8.0, "2024-03-10T00:00:01Z"),
    ]);

    let report = store.generate_report(ReportPeriod::Weekly, &now).unwrap();

    assert_eq!(report.total_amount, 3.0);
    assert!(report.total_by_category.contains_key("start"));
    assert!(report.total_by_category.contains_key("end"));
}

#[test]
fn test_monthly_report_window() {
    let now = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();
    let store = store_with(&[
        ("in", 5.0, "2024-02-29"),
        ("out", 9.0, "2024-02-28T23:00:00Z"),
    ]);

    let report = store.generate_report(ReportPeriod::Monthly, &now).unwrap();

    assert_eq!(report.total_amount, 5.0);
    assert_eq!(report.total_by_category.keys().collect::<Vec<_>>(), vec!["in"]);
}

#[test]
fn test_report_with_offset_now_is_stored_in_utc() {
    let tz = FixedOffset::east_opt(3600).unwrap();
    let now = tz.with_ymd_and_hms(2024, 3, 10, 1, 0, 0).unwrap();
    let store = store_with(&[("food", 3.0, "2024-03-09T12:00:00Z")]);

    let report = store.generate_report(ReportPeriod::Daily, &now).unwrap();

    assert_eq!(
        report.generated_at,
        Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap()
    );
    assert_eq!(report.total_amount, 3.0);
}

#[test]
fn test_reports_append_per_period() {
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
    let store = store_with(&[("food", 10.0, "2024-03-09T18:00:00Z")]);

    store.generate_report(ReportPeriod::Daily, &now).unwrap();
    store
        .generate_report(ReportPeriod::Daily, &(now + Duration::days(1)))
        .unwrap();
    store.generate_report(ReportPeriod::Monthly, &now).unwrap();

    let daily = store.list_reports(ReportPeriod::Daily).unwrap();
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].total_amount, 10.0);
    // A day later the expense has left the daily window
    assert_eq!(daily[1].total_amount, 0.0);
    assert!(daily[0].generated_at < daily[1].generated_at);

    assert!(store.list_reports(ReportPeriod::Weekly).unwrap().is_empty());
    assert_eq!(store.list_reports(ReportPeriod::Monthly).unwrap().len(), 1);
}

#[test]
fn test_report_on_empty_store() {
    let store = Store::new();
    let report = store
        .generate_report(ReportPeriod::Weekly, &Utc::now())
        .unwrap();

    assert_eq!(report.total_amount, 0.0);
    assert!(report.total_by_category.is_empty());
    assert_eq!(store.list_reports(ReportPeriod::Weekly).unwrap().len(), 1);
}

#[test]
fn test_clones_share_state() {
    let store = Store::new();
    let handle = store.clone();

    handle
        .append_expense(&NewExpense::new("food", 1.0, "2024-01-01"))
        .unwrap();
    handle
        .generate_report(ReportPeriod::Daily, &Utc::now())
        .unwrap();

    assert_eq!(store.expense_count().unwrap(), 1);
    assert_eq!(store.list_reports(ReportPeriod::Daily).unwrap().len(), 1);
}
