// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod categories;
pub mod config;
pub mod doctor;
pub mod insights;
pub mod metrics;
pub mod progress;
pub mod report;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::Config;
use crate::engine::{BudgetAnalysis, BudgetEngine};
use crate::models::Snapshot;

/// Everything a command needs: the loaded snapshot, configuration and the
/// evaluation date.
#[derive(Debug)]
pub struct Session {
    pub snapshot: Snapshot,
    pub config: Config,
    pub as_of: NaiveDate,
    engine: BudgetEngine,
}

impl Session {
    pub fn new(snapshot: Snapshot, config: Config, as_of: NaiveDate) -> Self {
        let engine = BudgetEngine::new(config.fallback_budgets.clone(), config.currency.clone());
        Self {
            snapshot,
            config,
            as_of,
            engine,
        }
    }

    pub fn analysis(&self) -> Arc<BudgetAnalysis> {
        self.engine.analyze(&self.snapshot.transactions, self.as_of)
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }
}
