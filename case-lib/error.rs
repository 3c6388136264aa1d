use thiserror::Error;

/// Errors raised while addressing spans of a text surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  #[error("invalid span: start {from} is after end {to}")]
  InvertedRange { from: usize, to: usize },
  #[error("span {from}..{to} is out of bounds for text length {len}")]
  RangeExceedsText {
    from: usize,
    to:   usize,
    len:  usize,
  },
  #[error("span {from}..{to} overlaps previous end {prev_end}")]
  OverlappingRange {
    prev_end: usize,
    from:     usize,
    to:       usize,
  },
}

pub type Result<T> = std::result::Result<T, Error>;
