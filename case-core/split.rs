//! Splitting a core token into parts.
//!
//! Parts borrow from the input; no casing is changed here.
use smallvec::SmallVec;

use crate::chars::{char_ends_word, char_is_separator, char_opens_word};

/// Ordered parts of a token. Most identifiers have few words, so they stay
/// inline.
pub type Parts<'a> = SmallVec<[&'a str; 4]>;

/// Splits on runs of `_`, dropping the empty pieces left by leading,
/// trailing or doubled underscores.
pub fn split_underscore(text: &str) -> Parts<'_> {
  text
    .split(char_is_separator)
    .filter(|part| !part.is_empty())
    .collect()
}

/// Splits on camel case boundaries.
///
/// A part starts at an uppercase letter that follows a lowercase letter or a
/// digit. Uppercase runs stay in one part, except that the last capital of a
/// run followed by a lowercase letter starts the next word:
/// `HTTPResponse` gives `["HTTP", "Response"]`.
pub fn split_camel(text: &str) -> Parts<'_> {
  let mut parts = Parts::new();
  let mut start = 0;
  let mut prev = None;
  let mut chars = text.char_indices().peekable();

  while let Some((idx, ch)) = chars.next() {
    if let Some(prev) = prev
      && idx > start
      && char_opens_word(ch)
    {
      let closes_run =
        char_opens_word(prev) && chars.peek().is_some_and(|&(_, next)| next.is_ascii_lowercase());
      if char_ends_word(prev) || closes_run {
        parts.push(&text[start..idx]);
        start = idx;
      }
    }
    prev = Some(ch);
  }

  if start < text.len() {
    parts.push(&text[start..]);
  }
  parts
}

#[cfg(test)]
mod test {
  use super::*;

  fn camel(text: &str) -> Vec<&str> {
    split_camel(text).into_vec()
  }

  fn underscore(text: &str) -> Vec<&str> {
    split_underscore(text).into_vec()
  }

  #[test]
  fn test_split_underscore() {
    assert_eq!(underscore("under_scored"), ["under", "scored"]);
    assert_eq!(underscore("http_response"), ["http", "response"]);
    assert_eq!(underscore("a__b___c"), ["a", "b", "c"]);
    assert_eq!(underscore("_leading_trailing_"), ["leading", "trailing"]);
    assert_eq!(underscore("single"), ["single"]);
    assert!(underscore("").is_empty());
    assert!(underscore("___").is_empty());
  }

  #[test]
  fn test_split_underscore_keeps_casing() {
    assert_eq!(underscore("Mixed_CASE_parts"), ["Mixed", "CASE", "parts"]);
  }

  #[test]
  fn test_split_camel() {
    assert_eq!(camel("underScored"), ["under", "Scored"]);
    assert_eq!(camel("UnderScored"), ["Under", "Scored"]);
    assert_eq!(camel("handler"), ["handler"]);
    assert_eq!(camel("Single"), ["Single"]);
    assert!(camel("").is_empty());
  }

  #[test]
  fn test_split_camel_acronyms() {
    assert_eq!(camel("HTTPResponse"), ["HTTP", "Response"]);
    assert_eq!(camel("getHTTPResponse"), ["get", "HTTP", "Response"]);
    assert_eq!(camel("parseURL"), ["parse", "URL"]);
    assert_eq!(camel("HTTP"), ["HTTP"]);
    assert_eq!(camel("IOError"), ["IO", "Error"]);
    assert_eq!(camel("AClass"), ["A", "Class"]);
  }

  #[test]
  fn test_split_camel_digits() {
    assert_eq!(camel("utf8String"), ["utf8", "String"]);
    assert_eq!(camel("HTTP2Response"), ["HTTP2", "Response"]);
    assert_eq!(camel("base64"), ["base64"]);
    assert_eq!(camel("2Fast"), ["2", "Fast"]);
  }

  #[test]
  fn test_split_camel_ignores_non_ascii_boundaries() {
    assert_eq!(camel("caféÉclair"), ["caféÉclair"]);
    assert_eq!(camel("éClair"), ["éClair"]);
  }
}
