//! Character and part predicates used when splitting and classifying tokens.

/// Separator between the parts of an underscore token.
pub const SEPARATOR: char = '_';

#[inline]
pub fn char_is_separator(ch: char) -> bool {
  ch == SEPARATOR
}

/// A character after which an uppercase letter opens a new camel part.
///
/// Digits behave like lowercase letters here: `utf8String` splits before `S`,
/// but a digit never opens a part of its own.
#[inline]
pub fn char_ends_word(ch: char) -> bool {
  ch.is_ascii_lowercase() || ch.is_ascii_digit()
}

#[inline]
pub fn char_opens_word(ch: char) -> bool {
  ch.is_ascii_uppercase()
}

/// Whether `part` is made only of letters and digits.
pub fn part_is_alphanumeric(part: &str) -> bool {
  !part.is_empty() && part.chars().all(char::is_alphanumeric)
}

pub fn starts_uppercase(text: &str) -> bool {
  text.chars().next().is_some_and(char::is_uppercase)
}

/// An acronym part: at least two characters, starting uppercase, with no
/// lowercase characters (`HTTP`, `IO`, `UTF8`).
pub fn part_is_acronym(part: &str) -> bool {
  let mut chars = part.chars();
  match (chars.next(), chars.next()) {
    (Some(first), Some(_)) if first.is_uppercase() => !part.chars().any(char::is_lowercase),
    _ => false,
  }
}
