// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::categories::CategoryAggregate;
use crate::utils::{days_in_month, percent_of};

/// Number of categories tracked against a budget.
pub const TRACKED_CATEGORIES: usize = 3;

/// Band around the expected pace (as a fraction) inside which a category is on pace.
const PACE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);
const TREND_THRESHOLD: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

static DEFAULT_FALLBACK_BUDGETS: Lazy<BTreeMap<String, Decimal>> = Lazy::new(|| {
    [
        ("Food and Drink", 800),
        ("Travel", 500),
        ("Entertainment", 400),
        ("Shopping", 600),
        ("Transportation", 900),
    ]
    .into_iter()
    .map(|(name, amount)| (name.to_string(), Decimal::from(amount)))
    .collect()
});

/// Budgets used for categories that have no adaptive budget yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FallbackBudgets(BTreeMap<String, Decimal>);

impl Default for FallbackBudgets {
    fn default() -> Self {
        Self(DEFAULT_FALLBACK_BUDGETS.clone())
    }
}

impl FallbackBudgets {
    pub fn new(table: BTreeMap<String, Decimal>) -> Self {
        Self(table)
    }

    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.0.get(category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Decimal)> {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    pub fn from_trend(trend_percentage: Decimal) -> Self {
        if trend_percentage > TREND_THRESHOLD {
            TrendDirection::Increasing
        } else if trend_percentage < -TREND_THRESHOLD {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetProgress {
    pub category: String,
    pub spent: Decimal,
    pub budget: Decimal,
    pub adaptive_budget: Decimal,
    pub used_fallback: bool,
    pub spent_percentage: Decimal,
    pub adaptive_percentage: Decimal,
    pub expected_spending_percentage: Decimal,
    pub is_over_pace: bool,
    pub is_under_pace: bool,
    pub trend_percentage: Decimal,
    pub trend_direction: TrendDirection,
}

/// Share of the month elapsed as of `now`, counting `now` itself.
pub fn expected_spending_percentage(now: NaiveDate) -> Decimal {
    percent_of(Decimal::from(now.day()), Decimal::from(days_in_month(now)))
}

/// Compares this month's spend in the top categories with their budgets and the
/// month's pacing. `aggregates` must already be sorted by current-month spend.
pub fn budget_progress(
    now: NaiveDate,
    aggregates: &[CategoryAggregate],
    fallback: &FallbackBudgets,
) -> Vec<BudgetProgress> {
    let expected = expected_spending_percentage(now);
    let upper = expected * (Decimal::ONE + PACE_TOLERANCE);
    let lower = expected * (Decimal::ONE - PACE_TOLERANCE);

    aggregates
        .iter()
        .filter_map(|c| {
            let (budget, used_fallback) = if c.adaptive_budget > Decimal::ZERO {
                (c.adaptive_budget, false)
            } else {
                (fallback.get(&c.name).unwrap_or(Decimal::ZERO), true)
            };
            if budget <= Decimal::ZERO || c.current_month_spent <= Decimal::ZERO {
                return None;
            }
            let spent_percentage = percent_of(c.current_month_spent, budget);
            Some(BudgetProgress {
                category: c.name.clone(),
                spent: c.current_month_spent,
                budget,
                adaptive_budget: c.adaptive_budget,
                used_fallback,
                spent_percentage,
                adaptive_percentage: percent_of(c.current_month_spent, c.adaptive_budget),
                expected_spending_percentage: expected,
                is_over_pace: spent_percentage > upper,
                is_under_pace: spent_percentage < lower,
                trend_percentage: c.trend_percentage,
                trend_direction: TrendDirection::from_trend(c.trend_percentage),
            })
        })
        .take(TRACKED_CATEGORIES)
        .collect()
}
