//! User configuration.
//!
//! ```toml
//! # ~/.config/case-cycle/config.toml
//! verbosity = 1
//! log-file = "/tmp/case-cycle.log"
//! ```
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use serde::Deserialize;

const APP_DIR: &str = "case-cycle";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
  /// Log level used when no `-v` flag is given: 0 warn, 1 info, 2 debug,
  /// 3 trace.
  pub verbosity: u8,
  pub log_file:  Option<PathBuf>,
}

impl Config {
  pub fn load(path: &Path) -> Result<Self> {
    let text = std::fs::read_to_string(path)
      .with_context(|| format!("failed to read config file {}", path.display()))?;
    Self::parse(&text).with_context(|| format!("failed to parse config file {}", path.display()))
  }

  /// Loads the config file from the config directory, falling back to the
  /// defaults when there is none.
  pub fn load_default() -> Result<Self> {
    let path = default_config_file()?;
    if !path.exists() {
      return Ok(Self::default());
    }
    Self::load(&path)
  }

  pub fn parse(text: &str) -> Result<Self> {
    Ok(toml::from_str(text)?)
  }
}

/// `$CASE_CYCLE_CONFIG_DIR`, or the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
  if let Some(dir) = std::env::var_os("CASE_CYCLE_CONFIG_DIR") {
    return Ok(PathBuf::from(dir));
  }
  let strategy = choose_base_strategy().context("unable to find the config directory")?;
  Ok(strategy.config_dir().join(APP_DIR))
}

pub fn cache_dir() -> Result<PathBuf> {
  if let Some(dir) = std::env::var_os("CASE_CYCLE_CACHE_DIR") {
    return Ok(PathBuf::from(dir));
  }
  let strategy = choose_base_strategy().context("unable to find the cache directory")?;
  Ok(strategy.cache_dir().join(APP_DIR))
}

pub fn default_config_file() -> Result<PathBuf> {
  Ok(config_dir()?.join("config.toml"))
}

pub fn default_log_file() -> Result<PathBuf> {
  Ok(cache_dir()?.join("case-cycle.log"))
}
