//! A rope with a set of selected spans.
//!
//! # Example
//!
//! ```
//! use case_lib::{RopeBuffer, Span, switch_case_selections};
//! use ropey::Rope;
//!
//! let mut buffer =
//!   RopeBuffer::new(Rope::from("let underScored = 1;"), [Span::new(4, 15)]).unwrap();
//! switch_case_selections(&mut buffer).unwrap();
//! assert_eq!(buffer.rope().to_string(), "let under_scored = 1;");
//! assert_eq!(buffer.spans(), &[Span::new(4, 16)]);
//! ```
use std::borrow::Cow;

use ropey::Rope;
use smallvec::SmallVec;

use crate::{
  command::{Span, TextSurface},
  error::{Error, Result},
};

#[derive(Debug, Clone)]
pub struct RopeBuffer {
  text:  Rope,
  /// Sorted by start, non-overlapping.
  spans: SmallVec<[Span; 1]>,
}

impl RopeBuffer {
  /// Creates a buffer selecting `spans` of `text`. Spans may be given in any
  /// order but must lie within the text and must not overlap.
  pub fn new<I>(text: Rope, spans: I) -> Result<Self>
  where
    I: IntoIterator<Item = Span>,
  {
    let len = text.len_chars();
    let mut spans: SmallVec<[Span; 1]> = spans.into_iter().collect();
    spans.sort_unstable();

    let mut last = 0;
    for span in &spans {
      validate_span(*span, len)?;
      if span.from < last {
        return Err(Error::OverlappingRange {
          prev_end: last,
          from:     span.from,
          to:       span.to,
        });
      }
      last = span.to;
    }

    Ok(Self { text, spans })
  }

  pub fn rope(&self) -> &Rope {
    &self.text
  }

  pub fn spans(&self) -> &[Span] {
    &self.spans
  }

  pub fn into_rope(self) -> Rope {
    self.text
  }
}

fn validate_span(span: Span, len: usize) -> Result<()> {
  if span.from > span.to {
    return Err(Error::InvertedRange {
      from: span.from,
      to:   span.to,
    });
  }
  if span.to > len {
    return Err(Error::RangeExceedsText {
      from: span.from,
      to:   span.to,
      len,
    });
  }
  Ok(())
}

impl TextSurface for RopeBuffer {
  fn selections(&self) -> Vec<Span> {
    self.spans.to_vec()
  }

  fn text(&self, span: Span) -> Cow<'_, str> {
    self.text.slice(span.from..span.to).into()
  }

  /// Replaces `span` and keeps the selection in sync: a selected span that was
  /// replaced now covers the new text, and spans after it are shifted.
  fn replace(&mut self, span: Span, text: &str) -> Result<()> {
    validate_span(span, self.text.len_chars())?;

    self.text.remove(span.from..span.to);
    self.text.insert(span.from, text);

    let new_len = text.chars().count();
    let old_len = span.len();
    for selected in self.spans.iter_mut() {
      if *selected == span {
        selected.to = selected.from + new_len;
      } else if selected.from >= span.to {
        selected.from = selected.from + new_len - old_len;
        selected.to = selected.to + new_len - old_len;
      }
    }
    Ok(())
  }
}
