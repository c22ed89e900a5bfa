// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::Session;
use crate::engine::BudgetProgress;
use crate::engine::progress::expected_spending_percentage;
use crate::utils::{fmt_pct, maybe_print_json, pretty_table};

pub const HEADERS: [&str; 6] = ["Category", "Spent", "Budget", "Used", "Pace", "Trend"];

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let analysis = session.analysis();
    if maybe_print_json(json_flag, jsonl_flag, &analysis.progress)? {
        return Ok(());
    }
    println!(
        "Month elapsed: {}",
        fmt_pct(&expected_spending_percentage(session.as_of))
    );
    if analysis.progress.is_empty() {
        println!("No categories with spending and a budget this month");
    } else {
        println!("{}", pretty_table(&HEADERS, rows(&analysis.progress)));
    }
    Ok(())
}

pub fn pace_label(p: &BudgetProgress) -> &'static str {
    if p.is_over_pace {
        "over"
    } else if p.is_under_pace {
        "under"
    } else {
        "on pace"
    }
}

pub fn rows(progress: &[BudgetProgress]) -> Vec<Vec<String>> {
    progress
        .iter()
        .map(|p| {
            let budget = if p.used_fallback {
                format!("{:.2} (default)", p.budget.round_dp(2))
            } else {
                format!("{:.2}", p.budget.round_dp(2))
            };
            vec![
                p.category.clone(),
                format!("{:.2}", p.spent.round_dp(2)),
                budget,
                fmt_pct(&p.spent_percentage),
                pace_label(p).to_string(),
                format!("{} ({:+.1}%)", p.trend_direction.as_str(), p.trend_percentage.round_dp(1)),
            ]
        })
        .collect()
}
