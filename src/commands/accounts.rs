// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use super::Session;
use crate::models::Account;
use crate::utils::{maybe_print_json, pretty_table, saturating_sum};

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let accounts = &session.snapshot.accounts;
    if maybe_print_json(json_flag, jsonl_flag, accounts)? {
        return Ok(());
    }
    if accounts.is_empty() {
        println!("No accounts in snapshot");
        return Ok(());
    }
    let mut data = rows(accounts);
    data.push(vec![
        "Total".into(),
        String::new(),
        String::new(),
        format!("{:.2}", total_balance(accounts)),
    ]);
    let hdr = format!("Balance ({})", session.currency());
    println!("{}", pretty_table(&["Account", "Type", "ID", hdr.as_str()], data));
    Ok(())
}

pub fn total_balance(accounts: &[Account]) -> Decimal {
    saturating_sum(accounts.iter().map(|a| a.balance))
}

pub fn rows(accounts: &[Account]) -> Vec<Vec<String>> {
    let mut sorted: Vec<&Account> = accounts.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted
        .into_iter()
        .map(|a| {
            vec![
                a.name.clone(),
                a.r#type.clone(),
                a.account_id.clone(),
                format!("{:.2}", a.balance),
            ]
        })
        .collect()
}
