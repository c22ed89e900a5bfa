// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::Session;
use crate::engine::{AnnualProjection, Insight, Severity};
use crate::utils::{fmt_money, fmt_pct, maybe_print_json, pretty_table};

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let analysis = session.analysis();
    if maybe_print_json(json_flag, jsonl_flag, &analysis.insights)? {
        return Ok(());
    }
    print_cards(&analysis.insights);
    Ok(())
}

pub fn projection(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let analysis = session.analysis();
    if !maybe_print_json(json_flag, jsonl_flag, &analysis.projection)? {
        println!(
            "{}",
            pretty_table(
                &["Projection", "Annual"],
                projection_rows(&analysis.projection, session.currency())
            )
        );
    }
    Ok(())
}

pub fn print_cards(cards: &[Insight]) {
    if cards.is_empty() {
        println!("No insights yet");
        return;
    }
    for card in cards {
        println!("{} {}", marker(card.severity), card.title);
        println!("  {}", card.message);
    }
}

fn marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Warning => "[!]",
        Severity::Info => "[i]",
        Severity::Success => "[+]",
    }
}

pub fn projection_rows(p: &AnnualProjection, ccy: &str) -> Vec<Vec<String>> {
    vec![
        vec!["Spend".into(), fmt_money(&p.projected_annual_spend, ccy)],
        vec!["Income".into(), fmt_money(&p.projected_annual_income, ccy)],
        vec!["Savings".into(), fmt_money(&p.projected_annual_savings, ccy)],
        vec!["Savings rate".into(), fmt_pct(&p.projected_savings_rate)],
    ]
}
