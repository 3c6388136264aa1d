use std::{io, process::ExitCode};

use anyhow::Result;

use crate::{cli::CliOptions, config::Config};

mod application;
mod cli;
mod config;
mod logging;

fn main() -> Result<ExitCode> {
  let args = CliOptions::parse()?;

  let config = match &args.config_file {
    Some(path) => Config::load(path)?,
    None => Config::load_default()?,
  };

  // -v on the command line wins over the configured level.
  let verbosity = if args.verbosity > 0 {
    args.verbosity
  } else {
    config.verbosity
  };
  // An explicitly requested log file must work, the default one may not.
  match args.log_file.or(config.log_file) {
    Some(path) => logging::setup_logging(verbosity, &path)?,
    None => {
      logging::setup_default_logging(verbosity, config::default_log_file(), &mut io::stderr())?
    },
  }

  let stdin = io::stdin();
  let outcome = application::run(
    &args.action,
    stdin.lock(),
    &mut io::stdout().lock(),
    &mut io::stderr().lock(),
  )?;
  Ok(outcome.into())
}
