// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Reads the account/transaction snapshot handed over by the sync layer.

use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use rust_decimal::Decimal;

use crate::errors::SnapshotError;
use crate::models::{Snapshot, Transaction};

/// Separator between levels of a category path in CSV input.
pub const CATEGORY_PATH_SEPARATOR: char = '>';

pub fn load(path: &Path) -> Result<Snapshot, SnapshotError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let io_err = |source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    };
    let snapshot = match ext.as_str() {
        "json" => from_json(&fs::read_to_string(path).map_err(io_err)?)?,
        "csv" => from_csv(fs::File::open(path).map_err(io_err)?)?,
        _ => return Err(SnapshotError::UnsupportedFormat(ext)),
    };
    tracing::info!(
        path = %path.display(),
        accounts = snapshot.accounts.len(),
        transactions = snapshot.transactions.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

pub fn from_json(data: &str) -> Result<Snapshot, SnapshotError> {
    Ok(serde_json::from_str(data)?)
}

/// Parses `date,amount,category,account_id[,name]` rows. Accounts are left empty.
pub fn from_csv<R: Read>(reader: R) -> Result<Snapshot, SnapshotError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let rec = result?;
        // header is line 1
        let row = idx + 2;
        let field = |i: usize| rec.get(i).unwrap_or("");

        let date_raw = field(0);
        let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d").map_err(|_| {
            SnapshotError::InvalidField {
                row,
                field: "date",
                value: date_raw.to_string(),
            }
        })?;
        let amount_raw = field(1);
        let amount = amount_raw
            .parse::<Decimal>()
            .map_err(|_| SnapshotError::InvalidField {
                row,
                field: "amount",
                value: amount_raw.to_string(),
            })?;
        let account_id = field(3);
        if account_id.is_empty() {
            return Err(SnapshotError::InvalidField {
                row,
                field: "account_id",
                value: String::new(),
            });
        }
        let name = Some(field(4))
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        transactions.push(Transaction {
            date,
            amount,
            category: parse_category_path(field(2)),
            account_id: account_id.to_string(),
            name,
        });
    }
    Ok(Snapshot {
        accounts: Vec::new(),
        transactions,
    })
}

/// `"Food and Drink > Restaurants"` becomes `["Food and Drink", "Restaurants"]`;
/// blank input becomes an empty path.
pub fn parse_category_path(raw: &str) -> Vec<String> {
    raw.split(CATEGORY_PATH_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
