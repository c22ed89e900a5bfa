// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::engine::FallbackBudgets;
use crate::errors::ConfigError;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Pacebudget", "pacebudget"));

pub const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_LOG_FILTER: &str = "pacebudget=info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub fallback_budgets: FallbackBudgets,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            log_filter: Self::default_log_filter(),
            fallback_budgets: FallbackBudgets::default(),
        }
    }
}

impl Config {
    fn default_currency() -> String {
        "USD".into()
    }

    fn default_log_filter() -> String {
        DEFAULT_LOG_FILTER.into()
    }

    /// Reads `path`, or the platform config file when `path` is `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<(Config, PathBuf), ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => config_path()?,
        };
        if !path.exists() {
            return Ok((Config::default(), path));
        }
        let data = fs::read_to_string(&path)?;
        let config = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        Ok((config, path))
    }
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or(ConfigError::NoConfigDir)?;
    Ok(proj.config_dir().join(CONFIG_FILE))
}
