// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::{categories, insights, metrics, progress, Session};
use crate::engine::progress::expected_spending_percentage;
use crate::utils::{fmt_pct, maybe_print_json, pretty_table};

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let analysis = session.analysis();
    if maybe_print_json(sub.get_flag("json"), false, &*analysis)? {
        return Ok(());
    }
    let ccy = session.currency();

    println!("Budget report as of {}", analysis.as_of);
    println!();
    println!("== This month");
    match analysis.metrics.as_ref() {
        Some(m) => println!("{}", pretty_table(&["Metric", "Value"], metrics::rows(m, ccy))),
        None => {
            println!("No transactions in snapshot");
            return Ok(());
        }
    }

    println!();
    println!("== Categories");
    if analysis.categories.is_empty() {
        println!("No spending categories");
    } else {
        let rows = categories::rows(&analysis.categories);
        println!("{}", pretty_table(&categories::HEADERS, rows));
    }

    println!();
    println!(
        "== Budget progress ({} of month elapsed)",
        fmt_pct(&expected_spending_percentage(analysis.as_of))
    );
    if analysis.progress.is_empty() {
        println!("No categories with spending and a budget this month");
    } else {
        let rows = progress::rows(&analysis.progress);
        println!("{}", pretty_table(&progress::HEADERS, rows));
    }

    println!();
    println!("== Insights");
    insights::print_cards(&analysis.insights);

    println!();
    println!("== Annual projection");
    let rows = insights::projection_rows(&analysis.projection, ccy);
    println!("{}", pretty_table(&["Projection", "Annual"], rows));
    Ok(())
}
