// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::Session;
use crate::engine::CategoryAggregate;
use crate::utils::{maybe_print_json, pretty_table};

pub const HEADERS: [&str; 8] = [
    "Category",
    "This month",
    "Share",
    "Txns",
    "Hist avg/mo",
    "Recent avg/mo",
    "Trend",
    "Adaptive budget",
];

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let limit = sub.get_one::<usize>("limit").copied();
    let analysis = session.analysis();
    let shown: Vec<CategoryAggregate> = analysis
        .categories
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &shown)? {
        if shown.is_empty() {
            println!("No spending categories");
        } else {
            println!("{}", pretty_table(&HEADERS, rows(&shown)));
        }
    }
    Ok(())
}

pub fn rows(categories: &[CategoryAggregate]) -> Vec<Vec<String>> {
    categories
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                format!("{:.2}", c.current_month_spent.round_dp(2)),
                format!("{:.1}%", c.percentage.round_dp(1)),
                c.transaction_count.to_string(),
                format!("{:.2}", c.historical_avg_spend.round_dp(2)),
                format!("{:.2}", c.recent_trend_spend.round_dp(2)),
                format!("{:+.1}%", c.trend_percentage.round_dp(1)),
                format!("{:.2}", c.adaptive_budget.round_dp(2)),
            ]
        })
        .collect()
}
