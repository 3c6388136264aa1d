//! Case style detection.
use std::fmt;

use crate::{
  chars::{part_is_acronym, part_is_alphanumeric, starts_uppercase},
  split::{split_camel, split_underscore},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
  /// `underScored`, `httpResponse`, `HTTPResponse`.
  Camel,
  /// `under_scored`, and single lowercase words such as `handler`.
  Underscore,
  /// `UnderScored`, `Single`.
  Title,
  /// Empty, or contains characters other than letters, digits and `_`.
  Unclassifiable,
}

impl CaseStyle {
  /// The style a token of this style is switched to.
  pub fn next(self) -> Option<Self> {
    match self {
      Self::Camel => Some(Self::Underscore),
      Self::Underscore => Some(Self::Title),
      Self::Title => Some(Self::Camel),
      Self::Unclassifiable => None,
    }
  }

  pub fn is_classified(self) -> bool {
    self != Self::Unclassifiable
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Camel => "camel",
      Self::Underscore => "underscore",
      Self::Title => "title",
      Self::Unclassifiable => "unclassifiable",
    }
  }
}

impl fmt::Display for CaseStyle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Detects the style of a core token, i.e. one whose enclosing underscores
/// were already stripped.
///
/// Letter case only matters in two places: the first character (title versus
/// camel) and the camel word boundaries. A camel token led by an acronym
/// (`HTTPResponse`) is camel even though it starts uppercase.
pub fn classify(core: &str) -> CaseStyle {
  let parts = split_underscore(core);
  if parts.is_empty() || !parts.iter().all(|part| part_is_alphanumeric(part)) {
    return CaseStyle::Unclassifiable;
  }

  if parts.len() > 1 {
    return CaseStyle::Underscore;
  }

  let word = parts[0];
  let camel_parts = split_camel(word);
  let acronym_led = camel_parts.len() > 1 && part_is_acronym(camel_parts[0]);

  if starts_uppercase(word) && !acronym_led {
    CaseStyle::Title
  } else if camel_parts.len() == 1 {
    CaseStyle::Underscore
  } else {
    CaseStyle::Camel
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_classify_camel() {
    assert_eq!(classify("underScored"), CaseStyle::Camel);
    assert_eq!(classify("httpResponse"), CaseStyle::Camel);
    assert_eq!(classify("getHTTPResponse"), CaseStyle::Camel);
    assert_eq!(classify("utf8String"), CaseStyle::Camel);
  }

  #[test]
  fn test_classify_acronym_led_is_camel() {
    assert_eq!(classify("HTTPResponse"), CaseStyle::Camel);
    assert_eq!(classify("IOError"), CaseStyle::Camel);
    assert_eq!(classify("HTTP2Response"), CaseStyle::Camel);
  }

  #[test]
  fn test_classify_underscore() {
    assert_eq!(classify("under_scored"), CaseStyle::Underscore);
    assert_eq!(classify("http_response"), CaseStyle::Underscore);
    assert_eq!(classify("Mixed_Parts"), CaseStyle::Underscore);
    assert_eq!(classify("a__b"), CaseStyle::Underscore);
  }

  #[test]
  fn test_classify_single_lowercase_word_is_underscore() {
    assert_eq!(classify("handler"), CaseStyle::Underscore);
    assert_eq!(classify("single"), CaseStyle::Underscore);
    assert_eq!(classify("base64"), CaseStyle::Underscore);
    assert_eq!(classify("42"), CaseStyle::Underscore);
  }

  #[test]
  fn test_classify_title() {
    assert_eq!(classify("UnderScored"), CaseStyle::Title);
    assert_eq!(classify("Single"), CaseStyle::Title);
    assert_eq!(classify("HttpResponse"), CaseStyle::Title);
    assert_eq!(classify("HTTP"), CaseStyle::Title);
    assert_eq!(classify("AClass"), CaseStyle::Title);
    assert_eq!(classify("Élan"), CaseStyle::Title);
  }

  #[test]
  fn test_classify_unclassifiable() {
    assert_eq!(classify(""), CaseStyle::Unclassifiable);
    assert_eq!(classify("___"), CaseStyle::Unclassifiable);
    assert_eq!(classify("foo bar"), CaseStyle::Unclassifiable);
    assert_eq!(classify("foo-bar"), CaseStyle::Unclassifiable);
    assert_eq!(classify("foo.bar"), CaseStyle::Unclassifiable);
    assert_eq!(classify("under_score!"), CaseStyle::Unclassifiable);
  }

  #[test]
  fn test_next_cycles_through_styles() {
    assert_eq!(CaseStyle::Camel.next(), Some(CaseStyle::Underscore));
    assert_eq!(CaseStyle::Underscore.next(), Some(CaseStyle::Title));
    assert_eq!(CaseStyle::Title.next(), Some(CaseStyle::Camel));
    assert_eq!(CaseStyle::Unclassifiable.next(), None);
    assert!(!CaseStyle::Unclassifiable.is_classified());
  }

  #[test]
  fn test_display() {
    assert_eq!(CaseStyle::Camel.to_string(), "camel");
    assert_eq!(CaseStyle::Unclassifiable.to_string(), "unclassifiable");
  }
}
