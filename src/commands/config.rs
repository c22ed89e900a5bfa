// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::utils::pretty_table;

pub fn handle(config: &Config, path: &Path) -> Result<()> {
    let source = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("Config file: {}{}", path.display(), source);
    println!("Currency: {}", config.currency);
    println!("Log filter: {}", config.log_filter);
    let rows = config
        .fallback_budgets
        .iter()
        .map(|(name, amount)| vec![name.clone(), format!("{:.2}", amount)])
        .collect();
    println!("{}", pretty_table(&["Category", "Default budget"], rows));
    Ok(())
}
