// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::Session;
use crate::engine::MonthlyMetrics;
use crate::utils::{fmt_money, fmt_pct, maybe_print_json, pretty_table};

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let analysis = session.analysis();
    if maybe_print_json(json_flag, jsonl_flag, &analysis.metrics)? {
        return Ok(());
    }
    match analysis.metrics.as_ref() {
        Some(m) => println!(
            "{}",
            pretty_table(&["Metric", "Value"], rows(m, session.currency()))
        ),
        None => println!("No transactions in snapshot"),
    }
    Ok(())
}

pub fn rows(m: &MonthlyMetrics, ccy: &str) -> Vec<Vec<String>> {
    vec![
        vec!["Income".into(), fmt_money(&m.income, ccy)],
        vec!["Expenses".into(), fmt_money(&m.expenses, ccy)],
        vec!["Savings".into(), fmt_money(&m.savings, ccy)],
        vec!["Expenses / income".into(), fmt_pct(&m.expense_percentage)],
        vec!["Savings rate".into(), fmt_pct(&m.savings_percentage)],
    ]
}
