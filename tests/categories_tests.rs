// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{d, dec, tx};
use pacebudget::engine::categories::{adaptive_weights, months_between, recent_window_start};
use pacebudget::engine::{analyze, category_aggregates, FallbackBudgets};
use rust_decimal::Decimal;

#[test]
fn empty_list_has_no_categories() {
    assert!(category_aggregates(&[], d(2025, 6, 15)).is_empty());
}

#[test]
fn single_expense_last_month() {
    let now = d(2025, 6, 15);
    let cats = category_aggregates(&[tx(d(2025, 5, 15), "100", &["Food and Drink"])], now);
    assert_eq!(cats.len(), 1);
    let c = &cats[0];
    assert_eq!(c.name, "Food and Drink");
    assert_eq!(c.months_span, 1);
    assert_eq!(c.historical_avg_spend, dec("100"));
    assert_eq!(c.current_month_spent, Decimal::ZERO);
    assert_eq!(c.recent_weight, dec("0.25"));
    assert_eq!(c.percentage, Decimal::ZERO);
}

#[test]
fn rising_category_blends_recent_and_historical() {
    let now = d(2025, 6, 15);
    let txs = vec![
        tx(d(2025, 1, 10), "100", &["Shopping", "Clothing"]),
        tx(d(2025, 4, 1), "300", &["Shopping"]),
        tx(d(2025, 5, 1), "300", &["Shopping", "Online"]),
        tx(d(2025, 6, 1), "300", &["Shopping"]),
    ];
    let cats = category_aggregates(&txs, now);
    let c = &cats[0];
    assert_eq!(c.months_span, 5);
    assert_eq!(c.total_spent, dec("1000"));
    assert_eq!(c.transaction_count, 4);
    assert_eq!(c.historical_avg_spend, dec("200"));
    assert_eq!(c.recent_trend_spend, dec("300"));
    assert_eq!(c.recent_weight, dec("0.7"));
    assert_eq!(c.adaptive_budget, dec("270"));
    assert_eq!(c.trend_percentage, dec("50"));
    assert_eq!(c.current_month_spent, dec("300"));
    assert_eq!(c.percentage, dec("100"));
}

#[test]
fn income_is_not_spending() {
    let now = d(2025, 6, 15);
    let txs = vec![
        tx(d(2025, 6, 1), "-2500", &["Transfer", "Payroll"]),
        tx(d(2025, 6, 2), "40", &["Transportation"]),
    ];
    let cats = category_aggregates(&txs, now);
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].name, "Transportation");
}

#[test]
fn empty_category_path_is_uncategorized() {
    let now = d(2025, 6, 15);
    let cats = category_aggregates(&[tx(d(2025, 6, 1), "12.50", &[])], now);
    assert_eq!(cats[0].name, "Uncategorized");
}

#[test]
fn sorted_by_current_month_spend_with_shares() {
    let now = d(2025, 6, 15);
    let txs = vec![
        tx(d(2025, 6, 1), "100", &["Travel"]),
        tx(d(2025, 6, 2), "300", &["Food and Drink"]),
        tx(d(2025, 6, 3), "200", &["Shopping"]),
        tx(d(2024, 1, 3), "5000", &["Entertainment"]),
    ];
    let cats = category_aggregates(&txs, now);
    let names: Vec<&str> = cats.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Food and Drink", "Shopping", "Travel", "Entertainment"]);
    assert_eq!(cats[0].percentage, dec("50"));
    assert_eq!(cats[3].percentage, Decimal::ZERO);

    let total: Decimal = cats.iter().map(|c| c.percentage).sum();
    assert!((total - dec("100")).abs() < dec("0.0000001"), "total was {}", total);
}

#[test]
fn shares_are_zero_when_nothing_spent_this_month() {
    let now = d(2025, 6, 15);
    let txs = vec![
        tx(d(2025, 2, 1), "100", &["Travel"]),
        tx(d(2025, 3, 2), "300", &["Shopping"]),
    ];
    for c in category_aggregates(&txs, now) {
        assert_eq!(c.percentage, Decimal::ZERO);
    }
}

#[test]
fn months_span_is_at_least_one() {
    let now = d(2025, 6, 15);
    let txs = vec![
        tx(d(2025, 6, 1), "10", &["Travel"]),
        tx(d(2025, 9, 1), "10", &["Shopping"]),
        tx(d(2019, 3, 1), "10", &["Entertainment"]),
    ];
    for c in category_aggregates(&txs, now) {
        assert!(c.months_span >= 1, "{} had span {}", c.name, c.months_span);
    }
}

#[test]
fn months_between_ignores_day_of_month() {
    assert_eq!(months_between(d(2025, 6, 1), d(2025, 5, 31)), 1);
    assert_eq!(months_between(d(2025, 1, 15), d(2024, 11, 1)), 2);
    assert_eq!(months_between(d(2025, 6, 30), d(2025, 6, 1)), 0);
    assert_eq!(months_between(d(2025, 6, 30), d(2025, 8, 1)), -2);
}

#[test]
fn weights_grow_with_history_and_cap() {
    assert_eq!(adaptive_weights(1), (dec("0.25"), dec("0.75")));
    assert_eq!(adaptive_weights(2), (dec("0.5"), dec("0.5")));
    assert_eq!(adaptive_weights(3), (dec("0.7"), dec("0.3")));
    assert_eq!(adaptive_weights(40), (dec("0.7"), dec("0.3")));
    for span in -3..24 {
        let (recent, historical) = adaptive_weights(span);
        assert!(recent >= dec("0.25") && recent <= dec("0.7"));
        assert_eq!(recent + historical, Decimal::ONE);
    }
}

#[test]
fn recent_window_spans_three_calendar_months() {
    assert_eq!(recent_window_start(d(2025, 6, 15)), d(2025, 3, 15));
    assert_eq!(recent_window_start(d(2025, 5, 31)), d(2025, 2, 28));
}

#[test]
fn short_history_divides_recent_by_months_seen() {
    // two months of history: recent spend is averaged over 2, not 3
    let now = d(2025, 6, 15);
    let txs = vec![
        tx(d(2025, 4, 20), "100", &["Entertainment"]),
        tx(d(2025, 6, 5), "300", &["Entertainment"]),
    ];
    let c = &category_aggregates(&txs, now)[0];
    assert_eq!(c.months_span, 2);
    assert_eq!(c.historical_avg_spend, dec("200"));
    assert_eq!(c.recent_trend_spend, dec("200"));
    assert_eq!(c.adaptive_budget, dec("200"));
    assert_eq!(c.trend_percentage, Decimal::ZERO);
}

#[test]
fn running_totals_saturate_instead_of_overflowing() {
    let now = d(2025, 6, 15);
    let txs = vec![
        tx(d(2025, 6, 1), "50000000000000000000000000000", &["A"]),
        tx(d(2025, 6, 2), "50000000000000000000000000000", &["A"]),
        tx(d(2025, 6, 3), "10", &["B"]),
    ];
    let cats = category_aggregates(&txs, now);
    let a = &cats[0];
    assert_eq!(a.name, "A");
    assert_eq!(a.total_spent, Decimal::MAX);
    assert_eq!(a.current_month_spent, Decimal::MAX);
    assert_eq!(a.transaction_count, 2);
    assert_eq!(a.percentage, dec("100"));
    assert_eq!(a.trend_percentage, Decimal::ZERO);

    let analysis = analyze(&txs, now, &FallbackBudgets::default(), "USD");
    assert_eq!(analysis.progress.len(), 2);
}
