// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use chrono::NaiveDate;
use pacebudget::engine::{BudgetProgress, CategoryAggregate, TrendDirection};
use pacebudget::models::Transaction;
use rust_decimal::Decimal;

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub fn tx(date: NaiveDate, amount: &str, category: &[&str]) -> Transaction {
    Transaction {
        date,
        amount: dec(amount),
        category: category.iter().map(|c| c.to_string()).collect(),
        account_id: "acc-1".into(),
        name: None,
    }
}

/// Aggregate with only the fields budget progress looks at filled in.
pub fn agg(name: &str, current: &str, adaptive: &str, trend: &str) -> CategoryAggregate {
    CategoryAggregate {
        name: name.into(),
        total_spent: dec(current),
        current_month_spent: dec(current),
        transaction_count: 1,
        months_span: 1,
        historical_avg_spend: dec(adaptive),
        recent_trend_spend: dec(adaptive),
        recent_weight: dec("0.25"),
        adaptive_budget: dec(adaptive),
        trend_percentage: dec(trend),
        percentage: Decimal::ZERO,
    }
}

pub fn progress(category: &str, spent: &str, budget: &str, expected: &str) -> BudgetProgress {
    let spent = dec(spent);
    let budget = dec(budget);
    let expected = dec(expected);
    let spent_percentage = spent / budget * Decimal::ONE_HUNDRED;
    BudgetProgress {
        category: category.into(),
        spent,
        budget,
        adaptive_budget: budget,
        used_fallback: false,
        spent_percentage,
        adaptive_percentage: spent_percentage,
        expected_spending_percentage: expected,
        is_over_pace: spent_percentage > expected * dec("1.1"),
        is_under_pace: spent_percentage < expected * dec("0.9"),
        trend_percentage: Decimal::ZERO,
        trend_direction: TrendDirection::Stable,
    }
}
