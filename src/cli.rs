// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn output_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("pacebudget")
        .version(crate_version!())
        .about("Adaptive budgets, pacing and spending insights from a transaction snapshot")
        .arg(
            Arg::new("snapshot")
                .long("snapshot")
                .short('s')
                .global(true)
                .value_name("PATH")
                .help("Accounts/transactions snapshot (.json) or transactions (.csv)"),
        )
        .arg(
            Arg::new("as-of")
                .long("as-of")
                .global(true)
                .value_name("YYYY-MM-DD")
                .help("Evaluate as of this date instead of today"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("PATH")
                .help("Configuration file (defaults to the platform config dir)"),
        )
        .subcommand(output_flags(
            Command::new("metrics").about("Income, expenses and savings for the current month"),
        ))
        .subcommand(output_flags(
            Command::new("categories")
                .about("Per-category history, trend and adaptive budget")
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(clap::value_parser!(usize))
                        .help("Show only the first N categories"),
                ),
        ))
        .subcommand(output_flags(
            Command::new("progress")
                .about("Top categories against their budgets and the month's pace"),
        ))
        .subcommand(output_flags(
            Command::new("insights").about("Warnings, trend alerts and recommendations"),
        ))
        .subcommand(output_flags(
            Command::new("projection").about("Annualized spend, income and savings"),
        ))
        .subcommand(
            Command::new("report")
                .about("Every analysis section in pipeline order")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the full analysis as JSON"),
                ),
        )
        .subcommand(output_flags(
            Command::new("accounts").about("Linked accounts and balances"),
        ))
        .subcommand(output_flags(
            Command::new("doctor").about("Check the snapshot for data the engine treats specially"),
        ))
        .subcommand(Command::new("config").about("Show the effective configuration"))
}
