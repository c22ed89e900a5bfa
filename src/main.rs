// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::{Context, Result};

use pacebudget::commands::{self, Session};
use pacebudget::{cli, config::Config, logging, snapshot, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let Some((name, sub)) = matches.subcommand() else {
        cli::build_cli().print_help()?;
        println!();
        return Ok(());
    };

    // global args are visible on the subcommand's matches
    let config_arg = sub.get_one::<String>("config").map(|s| Path::new(s.trim()));
    let (config, config_path) = Config::load(config_arg).context("Load configuration")?;
    logging::init_tracing(&config.log_filter);
    tracing::info!(command = name, "running");

    if name == "config" {
        return commands::config::handle(&config, &config_path);
    }

    let snapshot_path = sub
        .get_one::<String>("snapshot")
        .map(|s| s.trim().to_string())
        .context("--snapshot PATH is required for this command")?;
    let snapshot = snapshot::load(Path::new(&snapshot_path))
        .with_context(|| format!("Load snapshot {}", snapshot_path))?;
    let as_of = match sub.get_one::<String>("as-of") {
        Some(s) => utils::parse_date(s.trim())?,
        None => chrono::Utc::now().date_naive(),
    };
    let session = Session::new(snapshot, config, as_of);

    match name {
        "metrics" => commands::metrics::handle(&session, sub)?,
        "categories" => commands::categories::handle(&session, sub)?,
        "progress" => commands::progress::handle(&session, sub)?,
        "insights" => commands::insights::handle(&session, sub)?,
        "projection" => commands::insights::projection(&session, sub)?,
        "report" => commands::report::handle(&session, sub)?,
        "accounts" => commands::accounts::handle(&session, sub)?,
        "doctor" => commands::doctor::handle(&session, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
