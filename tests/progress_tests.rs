// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use std::collections::BTreeMap;

use common::{agg, d, dec, tx};
use pacebudget::engine::progress::expected_spending_percentage;
use pacebudget::engine::{budget_progress, category_aggregates, FallbackBudgets, TrendDirection};
use rust_decimal::Decimal;

#[test]
fn expected_pace_follows_day_of_month() {
    assert_eq!(expected_spending_percentage(d(2025, 6, 15)), dec("50"));
    assert_eq!(expected_spending_percentage(d(2025, 6, 30)), dec("100"));
    assert_eq!(expected_spending_percentage(d(2024, 2, 29)), dec("100"));
    assert_eq!(expected_spending_percentage(d(2025, 2, 28)), dec("100"));
}

#[test]
fn pace_flags_use_ten_percent_band() {
    let now = d(2025, 6, 15);
    let aggs = vec![
        agg("Shopping", "60", "100", "0"),
        agg("Travel", "55", "100", "0"),
        agg("Entertainment", "40", "100", "0"),
    ];
    let progress = budget_progress(now, &aggs, &FallbackBudgets::default());
    assert_eq!(progress.len(), 3);

    assert!(progress[0].is_over_pace);
    assert!(!progress[0].is_under_pace);

    // exactly 1.1x expected is still inside the band
    assert_eq!(progress[1].spent_percentage, dec("55"));
    assert!(!progress[1].is_over_pace);
    assert!(!progress[1].is_under_pace);

    assert!(progress[2].is_under_pace);
    assert_eq!(progress[2].expected_spending_percentage, dec("50"));
}

#[test]
fn keeps_top_three_in_aggregate_order() {
    let now = d(2025, 6, 15);
    let aggs = vec![
        agg("A", "500", "400", "0"),
        agg("B", "400", "400", "0"),
        agg("C", "0", "400", "0"),
        agg("D", "300", "400", "0"),
        agg("E", "200", "400", "0"),
    ];
    let progress = budget_progress(now, &aggs, &FallbackBudgets::default());
    let names: Vec<&str> = progress.iter().map(|p| p.category.as_str()).collect();
    assert_eq!(names, ["A", "B", "D"]);
}

#[test]
fn no_budget_and_no_fallback_is_excluded() {
    let now = d(2025, 6, 15);
    let aggs = vec![agg("Gifts", "250", "0", "0")];
    assert!(budget_progress(now, &aggs, &FallbackBudgets::default()).is_empty());
}

#[test]
fn fallback_table_covers_missing_adaptive_budget() {
    let now = d(2025, 6, 15);
    let aggs = vec![agg("Travel", "100", "0", "0")];
    let progress = budget_progress(now, &aggs, &FallbackBudgets::default());
    assert_eq!(progress.len(), 1);
    let p = &progress[0];
    assert!(p.used_fallback);
    assert_eq!(p.budget, dec("500"));
    assert_eq!(p.spent_percentage, dec("20"));
    assert_eq!(p.adaptive_percentage, Decimal::ZERO);
}

#[test]
fn configured_fallback_replaces_defaults() {
    let now = d(2025, 6, 15);
    let mut table = BTreeMap::new();
    table.insert("Gifts".to_string(), dec("50"));
    let fallback = FallbackBudgets::new(table);
    let aggs = vec![agg("Gifts", "25", "0", "0"), agg("Travel", "25", "0", "0")];
    let progress = budget_progress(now, &aggs, &fallback);
    assert_eq!(progress.len(), 1);
    assert_eq!(progress[0].category, "Gifts");
    assert_eq!(progress[0].spent_percentage, dec("50"));
}

#[test]
fn trend_direction_thresholds() {
    assert_eq!(TrendDirection::from_trend(dec("5.01")), TrendDirection::Increasing);
    assert_eq!(TrendDirection::from_trend(dec("5")), TrendDirection::Stable);
    assert_eq!(TrendDirection::from_trend(dec("-5")), TrendDirection::Stable);
    assert_eq!(TrendDirection::from_trend(dec("-5.01")), TrendDirection::Decreasing);
}

#[test]
fn category_with_nothing_spent_this_month_is_skipped() {
    let now = d(2025, 6, 15);
    let aggs = category_aggregates(&[tx(d(2025, 5, 15), "100", &["Food and Drink"])], now);
    assert_eq!(aggs[0].historical_avg_spend, dec("100"));
    assert!(budget_progress(now, &aggs, &FallbackBudgets::default()).is_empty());
}

#[test]
fn rising_category_end_to_end() {
    let now = d(2025, 6, 15);
    let txs = vec![
        tx(d(2025, 1, 10), "100", &["Shopping"]),
        tx(d(2025, 4, 1), "300", &["Shopping"]),
        tx(d(2025, 5, 1), "300", &["Shopping"]),
        tx(d(2025, 6, 1), "300", &["Shopping"]),
    ];
    let aggs = category_aggregates(&txs, now);
    let progress = budget_progress(now, &aggs, &FallbackBudgets::default());
    let p = &progress[0];
    assert_eq!(p.budget, dec("270"));
    assert!(!p.used_fallback);
    assert_eq!(p.trend_direction, TrendDirection::Increasing);
    assert!(p.is_over_pace);
}
