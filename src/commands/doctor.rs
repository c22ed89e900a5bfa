// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use super::Session;
use crate::models::Snapshot;
use crate::utils::{maybe_print_json, pretty_table};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub issue: &'static str,
    pub detail: String,
}

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let found = findings(&session.snapshot, session.as_of);
    for f in &found {
        tracing::warn!(issue = f.issue, detail = %f.detail, "snapshot finding");
    }
    if maybe_print_json(json_flag, jsonl_flag, &found)? {
        return Ok(());
    }
    if found.is_empty() {
        println!("doctor: no issues found");
    } else {
        let rows = found
            .into_iter()
            .map(|f| vec![f.issue.to_string(), f.detail])
            .collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Data the engine accepts but treats specially. Nothing here changes the
/// analysis; it only explains it.
pub fn findings(snapshot: &Snapshot, as_of: NaiveDate) -> Vec<Finding> {
    let mut out = Vec::new();

    // 1) Duplicate account ids
    let mut seen = HashSet::new();
    for a in &snapshot.accounts {
        if !seen.insert(a.account_id.as_str()) {
            out.push(Finding {
                issue: "duplicate_account",
                detail: a.account_id.clone(),
            });
        }
    }

    for t in &snapshot.transactions {
        let label = match t.name.as_deref() {
            Some(name) => format!("{} {} {}", t.date, name, t.amount),
            None => format!("{} {}", t.date, t.amount),
        };
        // 2) Neither income nor expense
        if t.amount.is_zero() {
            out.push(Finding {
                issue: "zero_amount",
                detail: label.clone(),
            });
        }
        // 3) Counted as-is even though they have not happened yet
        if t.date > as_of {
            out.push(Finding {
                issue: "future_dated",
                detail: label.clone(),
            });
        }
        // 4) Falls back to Uncategorized
        if t.category.is_empty() {
            out.push(Finding {
                issue: "uncategorized",
                detail: label.clone(),
            });
        }
        // 5) Only meaningful when the snapshot carries accounts at all
        if !snapshot.accounts.is_empty() && !seen.contains(t.account_id.as_str()) {
            out.push(Finding {
                issue: "unknown_account",
                detail: format!("{} ({})", label, t.account_id),
            });
        }
    }
    out
}
