//! The switch case command.
//!
//! Every non-empty selection is switched to the next style independently.
//! Selections whose text is not an identifier are left alone and reported,
//! so the host can show a notice instead of failing the whole command.
use std::{borrow::Cow, cmp::Reverse, fmt::Write as _};

use case_core::{Tendril, UnknownCaseError, switch_case};
use smallvec::SmallVec;

use crate::error::Result;

/// A selected region, in char offsets. `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
  pub from: usize,
  pub to:   usize,
}

impl Span {
  pub fn new(from: usize, to: usize) -> Self {
    Self { from, to }
  }

  pub fn len(&self) -> usize {
    self.to.saturating_sub(self.from)
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// The text the command operates on, as provided by the host.
pub trait TextSurface {
  /// Currently selected spans.
  fn selections(&self) -> Vec<Span>;

  /// Text covered by `span`.
  fn text(&self, span: Span) -> Cow<'_, str>;

  /// Replaces the text covered by `span`.
  fn replace(&mut self, span: Span, text: &str) -> Result<()>;
}

/// Outcome of one [`switch_case_selections`] run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SwitchReport {
  pub replaced:  usize,
  pub unchanged: usize,
  /// Empty selections.
  pub skipped:   usize,
  pub failures:  Vec<UnknownCaseError>,
}

impl SwitchReport {
  pub fn is_clean(&self) -> bool {
    self.failures.is_empty()
  }

  /// A message for the user about the selections that were left untouched,
  /// or `None` when every selection could be switched.
  pub fn notice(&self) -> Option<String> {
    match self.failures.as_slice() {
      [] => None,
      [failure] => Some(failure.to_string()),
      failures => {
        let mut notice = format!("{} selections left unchanged:", failures.len());
        for failure in failures {
          let _ = write!(notice, " \"{}\"", failure.display_text());
        }
        Some(notice)
      },
    }
  }
}

/// Switches the case of every selection of `surface`.
///
/// Edits are applied from the last span to the first so the offsets of the
/// spans still to be replaced stay valid.
///
/// Edits are not transactional: if [`TextSurface::replace`] fails, the error
/// is returned and the spans after the failing one keep their switched text.
/// Surfaces that need all-or-nothing behaviour should validate spans up
/// front, as [`RopeBuffer::new`](crate::RopeBuffer::new) does.
pub fn switch_case_selections<S>(surface: &mut S) -> Result<SwitchReport>
where
  S: TextSurface + ?Sized,
{
  let mut report = SwitchReport::default();
  let mut edits: SmallVec<[(Span, Tendril); 1]> = SmallVec::new();

  for span in surface.selections() {
    if span.is_empty() {
      report.skipped += 1;
      continue;
    }

    let text = surface.text(span);
    match switch_case(&text) {
      Ok(switched) if switched.as_str() == text => report.unchanged += 1,
      Ok(switched) => edits.push((span, switched)),
      Err(err) => {
        log::warn!("leaving selection {}..{} untouched: {err}", span.from, span.to);
        report.failures.push(err);
      },
    }
  }

  edits.sort_by_key(|(span, _)| Reverse(span.from));
  for (span, switched) in edits {
    surface.replace(span, &switched)?;
    report.replaced += 1;
  }

  log::debug!(
    "switched case: {} replaced, {} unchanged, {} skipped, {} failed",
    report.replaced,
    report.unchanged,
    report.skipped,
    report.failures.len()
  );
  Ok(report)
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::Error;

  /// One string per selection, laid out back to back.
  struct Fragments {
    fragments: Vec<String>,
    replaced:  Vec<Span>,
  }

  impl Fragments {
    fn new(fragments: &[&str]) -> Self {
      Self {
        fragments: fragments.iter().map(|s| s.to_string()).collect(),
        replaced:  Vec::new(),
      }
    }

    fn index_of(&self, span: Span) -> usize {
      self
        .selections()
        .iter()
        .position(|s| *s == span)
        .expect("unknown span")
    }
  }

  impl TextSurface for Fragments {
    fn selections(&self) -> Vec<Span> {
      let mut pos = 0;
      self
        .fragments
        .iter()
        .map(|fragment| {
          let from = pos;
          pos += fragment.chars().count();
          Span::new(from, pos)
        })
        .collect()
    }

    fn text(&self, span: Span) -> Cow<'_, str> {
      Cow::Borrowed(&self.fragments[self.index_of(span)])
    }

    fn replace(&mut self, span: Span, text: &str) -> Result<()> {
      let idx = self.index_of(span);
      self.fragments[idx] = text.to_string();
      self.replaced.push(span);
      Ok(())
    }
  }

  #[test]
  fn test_switches_every_selection() {
    let mut surface = Fragments::new(&["underScored", "http_response", "UnderScored"]);
    let report = switch_case_selections(&mut surface).unwrap();

    assert_eq!(surface.fragments, ["under_scored", "HttpResponse", "underScored"]);
    assert_eq!(report.replaced, 3);
    assert!(report.is_clean());
    assert_eq!(report.notice(), None);
  }

  #[test]
  fn test_replaces_from_last_to_first() {
    let mut surface = Fragments::new(&["a_b", "c_d"]);
    switch_case_selections(&mut surface).unwrap();

    assert_eq!(surface.replaced, [Span::new(3, 6), Span::new(0, 3)]);
  }

  #[test]
  fn test_skips_empty_and_unchanged() {
    let mut surface = Fragments::new(&["", "__", "2"]);
    let report = switch_case_selections(&mut surface).unwrap();

    assert_eq!(report.skipped, 1);
    assert_eq!(report.unchanged, 2);
    assert_eq!(report.replaced, 0);
    assert!(surface.replaced.is_empty());
  }

  #[test]
  fn test_unknown_case_leaves_selection_untouched() {
    let mut surface = Fragments::new(&["foo bar", "fooBar"]);
    let report = switch_case_selections(&mut surface).unwrap();

    assert_eq!(surface.fragments, ["foo bar", "foo_bar"]);
    assert_eq!(report.replaced, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].token(), "foo bar");
    assert_eq!(report.notice().as_deref(), Some("unknown case: \"foo bar\""));
  }

  #[test]
  fn test_notice_lists_every_failure() {
    let mut surface = Fragments::new(&["a b", "c-d"]);
    let report = switch_case_selections(&mut surface).unwrap();

    assert_eq!(
      report.notice().as_deref(),
      Some("2 selections left unchanged: \"a b\" \"c-d\"")
    );
  }

  /// Accepts `limit` replacements, then reports the span as out of bounds.
  struct Flaky {
    inner: Fragments,
    limit: usize,
  }

  impl TextSurface for Flaky {
    fn selections(&self) -> Vec<Span> {
      self.inner.selections()
    }

    fn text(&self, span: Span) -> Cow<'_, str> {
      self.inner.text(span)
    }

    fn replace(&mut self, span: Span, text: &str) -> Result<()> {
      if self.inner.replaced.len() == self.limit {
        return Err(Error::RangeExceedsText {
          from: span.from,
          to:   span.to,
          len:  0,
        });
      }
      self.inner.replace(span, text)
    }
  }

  #[test]
  fn test_replace_error_keeps_later_edits() {
    let mut surface = Flaky {
      inner: Fragments::new(&["a_b", "c_d", "e_f"]),
      limit: 1,
    };
    let err = switch_case_selections(&mut surface).unwrap_err();

    assert_eq!(err, Error::RangeExceedsText {
      from: 3,
      to:   6,
      len:  0,
    });
    assert_eq!(surface.inner.fragments, ["a_b", "c_d", "EF"]);
  }

  #[test]
  fn test_span() {
    let span = Span::new(2, 7);
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());
    assert!(Span::new(4, 4).is_empty());
  }
}
