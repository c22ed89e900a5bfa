// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: String,
    pub name: String,
    pub r#type: String,
    #[serde(default)]
    pub balance: Decimal,
}

/// A single bank transaction as delivered by the aggregation sync.
///
/// Sign convention: negative amounts are income/credits, positive amounts are
/// expenses/debits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: Decimal,
    #[serde(default)]
    pub category: Vec<String>,
    pub account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Transaction {
    pub fn primary_category(&self) -> &str {
        self.category
            .first()
            .map(String::as_str)
            .unwrap_or(UNCATEGORIZED)
    }

    pub fn is_income(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn is_expense(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

/// Accounts and transactions handed over by the surrounding application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}
