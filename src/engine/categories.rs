// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-category spending history and the adaptive budget derived from it.

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Transaction;
use crate::utils::{percent_of, safe_div, same_month, saturating_sum};

/// Length of the trailing window used for the recent trend, in calendar months.
pub const RECENT_WINDOW_MONTHS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub name: String,
    pub total_spent: Decimal,
    pub current_month_spent: Decimal,
    pub transaction_count: usize,
    pub months_span: i64,
    pub historical_avg_spend: Decimal,
    pub recent_trend_spend: Decimal,
    pub recent_weight: Decimal,
    pub adaptive_budget: Decimal,
    pub trend_percentage: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug)]
struct Running {
    total: Decimal,
    current: Decimal,
    recent: Decimal,
    count: usize,
    oldest: NaiveDate,
}

/// Calendar-month distance from `oldest` to `now`, ignoring the day of month.
/// Negative when `oldest` lies in a later month than `now`.
pub fn months_between(now: NaiveDate, oldest: NaiveDate) -> i64 {
    (now.month() as i64 - oldest.month() as i64) + 12 * (now.year() as i64 - oldest.year() as i64)
}

/// Weights applied to (recent trend, historical average) for a category with
/// `months_span` months of history. The recent weight grows with history and
/// caps at 0.7.
pub fn adaptive_weights(months_span: i64) -> (Decimal, Decimal) {
    let recent_months = months_span.clamp(1, RECENT_WINDOW_MONTHS as i64);
    let recent_weight = (Decimal::from(recent_months) / Decimal::from(4)).min(Decimal::new(7, 1));
    (recent_weight, Decimal::ONE - recent_weight)
}

/// Start of the trailing recent window (inclusive).
pub fn recent_window_start(now: NaiveDate) -> NaiveDate {
    now.checked_sub_months(Months::new(RECENT_WINDOW_MONTHS))
        .unwrap_or(NaiveDate::MIN)
}

/// Groups expenses by primary category and derives each category's averages,
/// trend and adaptive budget. Sorted by current-month spend, largest first.
pub fn category_aggregates(transactions: &[Transaction], now: NaiveDate) -> Vec<CategoryAggregate> {
    let window_start = recent_window_start(now);

    let mut by_category: BTreeMap<&str, Running> = BTreeMap::new();
    for t in transactions.iter().filter(|t| t.is_expense()) {
        let entry = by_category
            .entry(t.primary_category())
            .or_insert_with(|| Running {
                total: Decimal::ZERO,
                current: Decimal::ZERO,
                recent: Decimal::ZERO,
                count: 0,
                oldest: t.date,
            });
        entry.total = entry.total.saturating_add(t.amount);
        entry.count += 1;
        if t.date < entry.oldest {
            entry.oldest = t.date;
        }
        if same_month(t.date, now) {
            entry.current = entry.current.saturating_add(t.amount);
        }
        if t.date >= window_start {
            entry.recent = entry.recent.saturating_add(t.amount);
        }
    }

    let mut aggregates: Vec<CategoryAggregate> = by_category
        .into_iter()
        .map(|(name, run)| {
            let months_span = months_between(now, run.oldest).max(1);
            let recent_months = months_span.min(RECENT_WINDOW_MONTHS as i64);
            let historical_avg_spend = safe_div(run.total, Decimal::from(months_span));
            let recent_trend_spend = safe_div(run.recent, Decimal::from(recent_months));
            let (recent_weight, historical_weight) = adaptive_weights(months_span);
            let adaptive_budget = recent_trend_spend
                .saturating_mul(recent_weight)
                .saturating_add(historical_avg_spend.saturating_mul(historical_weight));
            let trend_percentage = percent_of(
                recent_trend_spend.saturating_sub(historical_avg_spend),
                historical_avg_spend,
            );
            CategoryAggregate {
                name: name.to_string(),
                total_spent: run.total,
                current_month_spent: run.current,
                transaction_count: run.count,
                months_span,
                historical_avg_spend,
                recent_trend_spend,
                recent_weight,
                adaptive_budget,
                trend_percentage,
                percentage: Decimal::ZERO,
            }
        })
        .collect();

    aggregates.sort_by(|a, b| b.current_month_spent.cmp(&a.current_month_spent));

    let month_total = saturating_sum(aggregates.iter().map(|c| c.current_month_spent));
    for c in aggregates.iter_mut() {
        c.percentage = percent_of(c.current_month_spent, month_total);
    }

    tracing::debug!(
        categories = aggregates.len(),
        %month_total,
        "category aggregates computed"
    );
    aggregates
}
