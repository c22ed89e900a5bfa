// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Human-readable judgments built from the metrics, aggregates and progress.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::categories::CategoryAggregate;
use super::metrics::MonthlyMetrics;
use super::progress::{BudgetProgress, TrendDirection};
use crate::utils::{fmt_money, fmt_pct, percent_of, safe_div, saturating_sum};

const TREND_ALERT_THRESHOLD: Decimal = Decimal::from_parts(15, 0, 0, false, 0);
const HEALTHY_SAVINGS_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 0);
const LOW_SAVINGS_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 0);
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    OverPace,
    TrendAlert,
    SavingsOnTrack,
    Recommendation,
    Projection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

impl Insight {
    fn new(kind: InsightKind, severity: Severity, title: &str, message: String) -> Self {
        Self {
            kind,
            severity,
            title: title.to_string(),
            message,
            category: None,
            amount: None,
        }
    }

    fn for_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualProjection {
    pub projected_annual_spend: Decimal,
    pub projected_annual_income: Decimal,
    pub projected_annual_savings: Decimal,
    pub projected_savings_rate: Decimal,
}

/// Twelve months of the tracked categories' adaptive budgets against twelve
/// months of this month's income.
pub fn annual_projection(
    metrics: Option<&MonthlyMetrics>,
    progress: &[BudgetProgress],
) -> AnnualProjection {
    let monthly_budget = saturating_sum(progress.iter().map(|p| p.adaptive_budget));
    let monthly_income = metrics.map(|m| m.income).unwrap_or(Decimal::ZERO);
    let projected_annual_spend = monthly_budget.saturating_mul(MONTHS_PER_YEAR);
    let projected_annual_income = monthly_income.saturating_mul(MONTHS_PER_YEAR);
    let projected_annual_savings = projected_annual_income.saturating_sub(projected_annual_spend);
    AnnualProjection {
        projected_annual_spend,
        projected_annual_income,
        projected_annual_savings,
        projected_savings_rate: percent_of(projected_annual_savings, projected_annual_income),
    }
}

/// Month-end spend for `p` by linear extrapolation, minus its adaptive budget.
pub fn projected_overage(p: &BudgetProgress) -> Decimal {
    safe_div(p.spent, p.expected_spending_percentage)
        .saturating_mul(Decimal::ONE_HUNDRED)
        .saturating_sub(p.adaptive_budget)
}

/// Builds at most one card of each kind, in a fixed order: over-pace warning,
/// trend alert, savings on track, recommendation, annual projection.
pub fn generate_insights(
    metrics: Option<&MonthlyMetrics>,
    aggregates: &[CategoryAggregate],
    progress: &[BudgetProgress],
    currency: &str,
) -> Vec<Insight> {
    if metrics.is_none() && aggregates.is_empty() {
        return Vec::new();
    }

    let mut cards = Vec::new();

    let over_pace = progress.iter().find(|p| p.is_over_pace);
    if let Some(p) = over_pace {
        let overage = projected_overage(p).max(Decimal::ZERO);
        cards.push(
            Insight::new(
                InsightKind::OverPace,
                Severity::Warning,
                "Spending ahead of pace",
                format!(
                    "{} has used {} of its budget with {} of the month gone. At this rate it will end about {} over budget.",
                    p.category,
                    fmt_pct(&p.spent_percentage),
                    fmt_pct(&p.expected_spending_percentage),
                    fmt_money(&overage, currency),
                ),
            )
            .for_category(&p.category)
            .with_amount(overage),
        );
    }

    if let Some(c) = biggest_trend_shift(aggregates)
        .filter(|c| over_pace.is_none_or(|p| p.category != c.name))
    {
        let rising = c.trend_percentage > Decimal::ZERO;
        cards.push(
            Insight::new(
                InsightKind::TrendAlert,
                if rising { Severity::Warning } else { Severity::Info },
                if rising { "Spending trend rising" } else { "Spending trend falling" },
                format!(
                    "{} spending is {} {} versus its usual level ({} a month recently against {} on average).",
                    c.name,
                    if rising { "up" } else { "down" },
                    fmt_pct(&c.trend_percentage.abs()),
                    fmt_money(&c.recent_trend_spend, currency),
                    fmt_money(&c.historical_avg_spend, currency),
                ),
            )
            .for_category(&c.name)
            .with_amount(c.trend_percentage),
        );
    }

    if let Some(m) = metrics.filter(|m| m.savings_percentage >= HEALTHY_SAVINGS_RATE) {
        cards.push(
            Insight::new(
                InsightKind::SavingsOnTrack,
                Severity::Success,
                "Savings on track",
                format!(
                    "You are saving {} of this month's income ({}).",
                    fmt_pct(&m.savings_percentage),
                    fmt_money(&m.savings, currency),
                ),
            )
            .with_amount(m.savings),
        );
    }

    cards.push(recommendation(metrics, progress, currency));

    let projection = annual_projection(metrics, progress);
    if !projection.projected_annual_income.is_zero()
        || !projection.projected_annual_spend.is_zero()
    {
        cards.push(
            Insight::new(
                InsightKind::Projection,
                if projection.projected_annual_savings < Decimal::ZERO {
                    Severity::Warning
                } else {
                    Severity::Info
                },
                "Annual outlook",
                format!(
                    "At current budgets you would spend {} and earn {} over a year, saving {} ({} of income).",
                    fmt_money(&projection.projected_annual_spend, currency),
                    fmt_money(&projection.projected_annual_income, currency),
                    fmt_money(&projection.projected_annual_savings, currency),
                    fmt_pct(&projection.projected_savings_rate),
                ),
            )
            .with_amount(projection.projected_annual_savings),
        );
    }

    tracing::debug!(cards = cards.len(), "insights generated");
    cards
}

fn biggest_trend_shift(aggregates: &[CategoryAggregate]) -> Option<&CategoryAggregate> {
    aggregates
        .iter()
        .filter(|c| c.trend_percentage.abs() > TREND_ALERT_THRESHOLD)
        .fold(None, |best: Option<&CategoryAggregate>, c| match best {
            Some(b) if b.trend_percentage.abs() >= c.trend_percentage.abs() => Some(b),
            _ => Some(c),
        })
}

fn recommendation(
    metrics: Option<&MonthlyMetrics>,
    progress: &[BudgetProgress],
    currency: &str,
) -> Insight {
    let kind = InsightKind::Recommendation;

    if let Some(p) = progress.iter().find(|p| p.is_over_pace) {
        return Insight::new(
            kind,
            Severity::Warning,
            "Slow down",
            format!(
                "Ease off {} for the rest of the month to stay near its {} budget.",
                p.category,
                fmt_money(&p.budget, currency),
            ),
        )
        .for_category(&p.category)
        .with_amount(p.budget);
    }

    if let Some(p) = progress
        .iter()
        .find(|p| p.trend_direction == TrendDirection::Increasing)
    {
        return Insight::new(
            kind,
            Severity::Info,
            "Budget adjusted upward",
            format!(
                "{} spending has been climbing, so its budget now sits at {}. Check whether the increase is intended.",
                p.category,
                fmt_money(&p.adaptive_budget, currency),
            ),
        )
        .for_category(&p.category)
        .with_amount(p.adaptive_budget);
    }

    if let Some(p) = progress
        .iter()
        .find(|p| p.trend_direction == TrendDirection::Decreasing)
    {
        return Insight::new(
            kind,
            Severity::Success,
            "Budget adjusted downward",
            format!(
                "{} spending has been falling, so its budget eased to {}. Consider moving the difference into savings.",
                p.category,
                fmt_money(&p.adaptive_budget, currency),
            ),
        )
        .for_category(&p.category)
        .with_amount(p.adaptive_budget);
    }

    if let Some(m) =
        metrics.filter(|m| m.income > Decimal::ZERO && m.savings_percentage < LOW_SAVINGS_RATE)
    {
        return Insight::new(
            kind,
            Severity::Warning,
            "Raise your savings rate",
            format!(
                "Only {} of this month's income is left over. Aim for at least {}.",
                fmt_pct(&m.savings_percentage),
                fmt_pct(&LOW_SAVINGS_RATE),
            ),
        )
        .with_amount(m.savings_percentage);
    }

    if let Some(p) = progress.iter().find(|p| p.is_under_pace) {
        return Insight::new(
            kind,
            Severity::Success,
            "Room in the budget",
            format!(
                "{} is well under pace at {} of its budget.",
                p.category,
                fmt_pct(&p.spent_percentage),
            ),
        )
        .for_category(&p.category)
        .with_amount(p.budget.saturating_sub(p.spent));
    }

    Insight::new(
        kind,
        Severity::Info,
        "Budgets well aligned",
        "Your spending matches your adaptive budgets. Keep it up.".to_string(),
    )
}
