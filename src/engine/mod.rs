// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The adaptive budget pipeline: metrics, category aggregates, budget progress
//! and insights, each computed from the one before it.

pub mod categories;
pub mod insights;
pub mod metrics;
pub mod progress;

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Transaction;

pub use categories::{category_aggregates, CategoryAggregate};
pub use insights::{
    annual_projection, generate_insights, AnnualProjection, Insight, InsightKind, Severity,
};
pub use metrics::{monthly_metrics, MonthlyMetrics};
pub use progress::{budget_progress, BudgetProgress, FallbackBudgets, TrendDirection};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAnalysis {
    pub as_of: NaiveDate,
    pub metrics: Option<MonthlyMetrics>,
    pub categories: Vec<CategoryAggregate>,
    pub progress: Vec<BudgetProgress>,
    pub insights: Vec<Insight>,
    pub projection: AnnualProjection,
}

/// Runs the whole pipeline from scratch.
pub fn analyze(
    transactions: &[Transaction],
    now: NaiveDate,
    fallback: &FallbackBudgets,
    currency: &str,
) -> BudgetAnalysis {
    let metrics = monthly_metrics(transactions, now);
    let categories = category_aggregates(transactions, now);
    let progress = budget_progress(now, &categories, fallback);
    let insights = generate_insights(metrics.as_ref(), &categories, &progress, currency);
    let projection = annual_projection(metrics.as_ref(), &progress);
    BudgetAnalysis {
        as_of: now,
        metrics,
        categories,
        progress,
        insights,
        projection,
    }
}

#[derive(Debug)]
struct CachedRun {
    transactions: Vec<Transaction>,
    now: NaiveDate,
    analysis: Arc<BudgetAnalysis>,
}

/// Memoizes [`analyze`] on the transaction list and `now`. Safe to share
/// between threads; a changed input recomputes the whole pipeline.
#[derive(Debug)]
pub struct BudgetEngine {
    fallback: FallbackBudgets,
    currency: String,
    last: Mutex<Option<CachedRun>>,
}

impl BudgetEngine {
    pub fn new(fallback: FallbackBudgets, currency: impl Into<String>) -> Self {
        Self {
            fallback,
            currency: currency.into(),
            last: Mutex::new(None),
        }
    }

    pub fn analyze(&self, transactions: &[Transaction], now: NaiveDate) -> Arc<BudgetAnalysis> {
        let mut last = match self.last.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(run) = last.as_ref() {
            if run.now == now && run.transactions.as_slice() == transactions {
                tracing::trace!("reusing cached budget analysis");
                return Arc::clone(&run.analysis);
            }
        }

        tracing::debug!(transactions = transactions.len(), %now, "recomputing budget analysis");
        let analysis = Arc::new(analyze(transactions, now, &self.fallback, &self.currency));
        *last = Some(CachedRun {
            transactions: transactions.to_vec(),
            now,
            analysis: Arc::clone(&analysis),
        });
        analysis
    }
}

impl Default for BudgetEngine {
    fn default() -> Self {
        Self::new(FallbackBudgets::default(), "USD")
    }
}
