// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Transaction;
use crate::utils::{percent_of, same_month};

/// Income, expenses and savings for the calendar month containing `now`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyMetrics {
    pub income: Decimal,
    pub expenses: Decimal,
    pub savings: Decimal,
    pub expense_percentage: Decimal,
    pub savings_percentage: Decimal,
}

/// Returns `None` when there are no transactions at all. A non-empty list with
/// nothing dated this month yields all-zero metrics.
pub fn monthly_metrics(transactions: &[Transaction], now: NaiveDate) -> Option<MonthlyMetrics> {
    if transactions.is_empty() {
        return None;
    }

    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for t in transactions.iter().filter(|t| same_month(t.date, now)) {
        if t.is_income() {
            income = income.saturating_add(t.amount);
        } else if t.is_expense() {
            expenses = expenses.saturating_add(t.amount);
        }
    }
    let income = income.abs();
    let savings = income.saturating_sub(expenses).max(Decimal::ZERO);

    tracing::debug!(%income, %expenses, %savings, "monthly metrics computed");
    Some(MonthlyMetrics {
        income,
        expenses,
        savings,
        expense_percentage: percent_of(expenses, income),
        savings_percentage: percent_of(savings, income),
    })
}
