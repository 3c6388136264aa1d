use std::{
  fs::File,
  io::{BufRead, BufReader, BufWriter, Write},
  path::Path,
  process::ExitCode,
};

use anyhow::{Context, Result};
use case_core::{detect_case, switch_case};
use case_lib::{RopeBuffer, Span, switch_case_selections};
use ropey::Rope;
use tempfile::NamedTempFile;

use crate::cli::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Success,
  /// Some text could not be switched and was left as it was.
  Unchanged,
}

impl From<Outcome> for ExitCode {
  fn from(outcome: Outcome) -> Self {
    match outcome {
      Outcome::Success => ExitCode::SUCCESS,
      Outcome::Unchanged => ExitCode::FAILURE,
    }
  }
}

/// Runs `action`, reading a missing token from `input`. Results go to `out`,
/// notices about text that was left unchanged go to `err`.
pub fn run(
  action: &Action,
  input: impl BufRead,
  out: &mut impl Write,
  err: &mut impl Write,
) -> Result<Outcome> {
  match action {
    Action::Switch { token } => {
      let token = resolve_token(token.as_deref(), input)?;
      match switch_case(&token) {
        Ok(switched) => {
          writeln!(out, "{switched}")?;
          Ok(Outcome::Success)
        },
        Err(unknown) => {
          writeln!(err, "{unknown}")?;
          Ok(Outcome::Unchanged)
        },
      }
    },
    Action::Detect { token } => {
      let token = resolve_token(token.as_deref(), input)?;
      writeln!(out, "{}", detect_case(&token))?;
      Ok(Outcome::Success)
    },
    Action::Rewrite { file, spans } => rewrite_file(file, spans, err),
  }
}

fn resolve_token(token: Option<&str>, mut input: impl BufRead) -> Result<String> {
  if let Some(token) = token {
    return Ok(token.to_string());
  }
  let mut line = String::new();
  input
    .read_line(&mut line)
    .context("failed to read token from stdin")?;
  Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn rewrite_file(path: &Path, spans: &[Span], err: &mut impl Write) -> Result<Outcome> {
  let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
  let text = Rope::from_reader(BufReader::new(file))
    .with_context(|| format!("failed to read {}", path.display()))?;

  let mut buffer = RopeBuffer::new(text, spans.iter().copied())
    .with_context(|| format!("invalid span for {}", path.display()))?;
  let report = switch_case_selections(&mut buffer)?;

  if report.replaced > 0 {
    replace_file(path, buffer.rope())?;
    log::info!("rewrote {} span(s) of {}", report.replaced, path.display());
  }

  match report.notice() {
    Some(notice) => {
      writeln!(err, "{notice}")?;
      Ok(Outcome::Unchanged)
    },
    None => Ok(Outcome::Success),
  }
}

/// Writes `text` to a temporary file next to `path` and moves it over `path`,
/// so a failed write leaves the original untouched.
fn replace_file(path: &Path, text: &Rope) -> Result<()> {
  let dir = match path.parent() {
    Some(dir) if !dir.as_os_str().is_empty() => dir,
    _ => Path::new("."),
  };
  let permissions = std::fs::metadata(path)
    .with_context(|| format!("failed to read metadata of {}", path.display()))?
    .permissions();

  let mut tmp = NamedTempFile::new_in(dir)
    .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
  {
    let mut writer = BufWriter::new(tmp.as_file_mut());
    text.write_to(&mut writer)?;
    writer.flush()?;
  }
  tmp.as_file().set_permissions(permissions)?;
  tmp
    .persist(path)
    .with_context(|| format!("failed to write {}", path.display()))?;
  Ok(())
}
