use std::{
  io::{self, Write},
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::LevelFilter;

pub fn level_for(verbosity: u8) -> LevelFilter {
  match verbosity {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  }
}

/// Sends log records to `log_file`, creating its directory if needed.
pub fn setup_logging(verbosity: u8, log_file: &Path) -> Result<()> {
  if let Some(parent) = log_file.parent()
    && !parent.exists()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create log directory {}", parent.display()))?;
  }

  let file = fern::log_file(log_file)
    .with_context(|| format!("failed to open log file {}", log_file.display()))?;

  fern::Dispatch::new()
    .level(level_for(verbosity))
    .format(|out, message, record| {
      out.finish(format_args!(
        "{} {} [{}] {}",
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.target(),
        record.level(),
        message
      ))
    })
    .chain(file)
    .apply()
    .context("failed to install logger")?;

  Ok(())
}

/// Sets up logging to the default log file. When that is not possible the
/// run goes on without a log file and a warning is written to `err`.
pub fn setup_default_logging(
  verbosity: u8,
  log_file: Result<PathBuf>,
  err: &mut impl Write,
) -> io::Result<()> {
  if let Err(cause) = log_file.and_then(|path| setup_logging(verbosity, &path)) {
    writeln!(err, "warning: continuing without a log file: {cause:#}")?;
  }
  Ok(())
}
