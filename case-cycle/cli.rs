use std::path::PathBuf;

use anyhow::{Result, bail};
use case_lib::Span;
use clap::{ArgAction, Parser};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
  /// Print the token switched to the next style.
  Switch { token: Option<String> },
  /// Print the style of the token.
  Detect { token: Option<String> },
  /// Switch spans of a file in place.
  Rewrite { file: PathBuf, spans: Vec<Span> },
}

#[derive(Clone, Debug)]
pub struct CliOptions {
  pub action:      Action,
  pub verbosity:   u8,
  pub log_file:    Option<PathBuf>,
  pub config_file: Option<PathBuf>,
}

impl CliOptions {
  pub fn parse() -> Result<Self> {
    let raw = RawCli::parse();
    raw.try_into()
  }

  #[cfg(test)]
  fn parse_from<I, T>(args: I) -> Result<Self>
  where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
  {
    let raw = RawCli::try_parse_from(args)?;
    raw.try_into()
  }
}

#[derive(Parser, Debug)]
#[command(
  name = "case-cycle",
  about = "Cycle an identifier through camelCase, under_score_case and TitleCase",
  long_about = None,
  version
)]
struct RawCli {
  /// Print the detected style instead of switching
  #[arg(long = "detect", conflicts_with = "file")]
  detect: bool,

  /// Rewrite spans of this file in place
  #[arg(long = "file", value_name = "FILE", requires = "spans")]
  file: Option<PathBuf>,

  /// Char span FROM:TO of --file to switch (repeatable)
  #[arg(long = "span", value_name = "FROM:TO", value_parser = parse_span, requires = "file")]
  spans: Vec<Span>,

  /// Increase logging verbosity (repeat for more detail)
  #[arg(short = 'v', action = ArgAction::Count)]
  verbosity: u8,

  /// Save logs to a specific file
  #[arg(long = "log", value_name = "FILE")]
  log_file: Option<PathBuf>,

  /// Load configuration from a specific file
  #[arg(short = 'c', long = "config", value_name = "FILE")]
  config_file: Option<PathBuf>,

  /// Token to switch; the first line of stdin is used when omitted
  #[arg(value_name = "TOKEN", conflicts_with = "file")]
  token: Option<String>,
}

impl TryFrom<RawCli> for CliOptions {
  type Error = anyhow::Error;

  fn try_from(raw: RawCli) -> Result<Self> {
    let action = match (raw.file, raw.detect) {
      (Some(file), _) => {
        if raw.spans.is_empty() {
          bail!("--file needs at least one --span");
        }
        Action::Rewrite {
          file,
          spans: raw.spans,
        }
      },
      (None, true) => Action::Detect { token: raw.token },
      (None, false) => Action::Switch { token: raw.token },
    };

    Ok(Self {
      action,
      verbosity: raw.verbosity,
      log_file: raw.log_file,
      config_file: raw.config_file,
    })
  }
}

fn parse_span(value: &str) -> std::result::Result<Span, String> {
  let (from, to) = value
    .split_once(':')
    .ok_or_else(|| format!("span '{value}' is not of the form FROM:TO"))?;
  let from: usize = from
    .trim()
    .parse()
    .map_err(|_| format!("invalid span start '{from}'"))?;
  let to: usize = to
    .trim()
    .parse()
    .map_err(|_| format!("invalid span end '{to}'"))?;
  if from > to {
    return Err(format!("span start {from} is after end {to}"));
  }
  Ok(Span::new(from, to))
}
