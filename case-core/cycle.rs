//! Switching a token to the next style of the cycle.
use std::borrow::Cow;

use thiserror::Error;

use crate::{
  Tendril,
  affix::Affixed,
  convert::{to_camel, to_title, to_underscore},
  split::{split_camel, split_underscore},
  style::{CaseStyle, classify},
};

/// Maximum number of characters of the offending token shown in messages.
pub const DISPLAY_LIMIT: usize = 50;

/// The token is neither camel, underscore nor title case.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown case: \"{}\"", truncate_for_display(.token))]
pub struct UnknownCaseError {
  token: String,
}

impl UnknownCaseError {
  pub fn new(token: impl Into<String>) -> Self {
    Self {
      token: token.into(),
    }
  }

  /// The full token that failed detection.
  pub fn token(&self) -> &str {
    &self.token
  }

  /// The token shortened to [`DISPLAY_LIMIT`] characters, with `…` appended
  /// when something was cut.
  pub fn display_text(&self) -> Cow<'_, str> {
    truncate_for_display(&self.token)
  }
}

pub type Result<T> = std::result::Result<T, UnknownCaseError>;

fn truncate_for_display(text: &str) -> Cow<'_, str> {
  match text.char_indices().nth(DISPLAY_LIMIT) {
    Some((end, _)) => Cow::Owned(format!("{}…", &text[..end])),
    None => Cow::Borrowed(text),
  }
}

/// Detects the style of a whole token, ignoring enclosing underscores.
pub fn detect_case(token: &str) -> CaseStyle {
  classify(Affixed::split(token).core)
}

/// Rewrites `token` in the next style of the cycle:
/// camel to underscore, underscore to title, title to camel.
///
/// Enclosing underscores are kept verbatim. A token made only of underscores
/// is returned unchanged.
///
/// ```
/// use case_core::switch_case;
///
/// assert_eq!(switch_case("HTTPResponse").unwrap().as_str(), "http_response");
/// assert_eq!(switch_case("http_response").unwrap().as_str(), "HttpResponse");
/// assert_eq!(switch_case("__single___").unwrap().as_str(), "__Single___");
/// assert_eq!(switch_case("__").unwrap().as_str(), "__");
/// ```
pub fn switch_case(token: &str) -> Result<Tendril> {
  let affixed = Affixed::split(token);
  if !affixed.has_core() {
    return Ok(Tendril::from(token));
  }

  let core = affixed.core;
  let style = classify(core);
  let converted = match style {
    CaseStyle::Camel => to_underscore(&split_camel(core)),
    CaseStyle::Underscore => to_title(&split_underscore(core)),
    CaseStyle::Title => to_camel(&split_camel(core)),
    CaseStyle::Unclassifiable => {
      log::debug!("cannot detect case of {:?}", token);
      return Err(UnknownCaseError::new(token));
    },
  };

  log::trace!("switched {style} token {core:?} to {converted:?}");
  Ok(affixed.rejoin(&converted))
}
