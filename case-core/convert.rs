//! Rendering parts in a target style.
//!
//! Only the leading character of a part is recased. The one exception is a
//! leading acronym (`HTTP` in `HTTPResponse`), which is lowercased as a whole
//! when rendered with underscores.
use crate::{Tendril, chars::part_is_acronym};

pub fn to_underscore(parts: &[&str]) -> Tendril {
  let mut res = Tendril::new();
  to_underscore_with(parts, &mut res);
  res
}

/// `["get", "HTTP", "Response"]` becomes `get_hTTP_response`.
pub fn to_underscore_with(parts: &[&str], buf: &mut Tendril) {
  for (idx, part) in parts.iter().enumerate() {
    if idx == 0 {
      push_leading_lower(part, buf);
    } else {
      buf.push('_');
      push_first_lower(part, buf);
    }
  }
}

pub fn to_title(parts: &[&str]) -> Tendril {
  let mut res = Tendril::new();
  to_title_with(parts, &mut res);
  res
}

pub fn to_title_with(parts: &[&str], buf: &mut Tendril) {
  for part in parts {
    push_first_upper(part, buf);
  }
}

pub fn to_camel(parts: &[&str]) -> Tendril {
  let mut res = Tendril::new();
  to_camel_with(parts, &mut res);
  res
}

/// `["HTTP"]` becomes `hTTP`, which still reads as camel case.
pub fn to_camel_with(parts: &[&str], buf: &mut Tendril) {
  for (idx, part) in parts.iter().enumerate() {
    if idx == 0 {
      push_first_lower(part, buf);
    } else {
      push_first_upper(part, buf);
    }
  }
}

fn push_first_upper(part: &str, buf: &mut Tendril) {
  let mut chars = part.chars();
  if let Some(first) = chars.next() {
    buf.extend(first.to_uppercase());
    buf.push_str(chars.as_str());
  }
}

fn push_first_lower(part: &str, buf: &mut Tendril) {
  let mut chars = part.chars();
  if let Some(first) = chars.next() {
    buf.extend(first.to_lowercase());
    buf.push_str(chars.as_str());
  }
}

fn push_leading_lower(part: &str, buf: &mut Tendril) {
  if part_is_acronym(part) {
    buf.extend(part.chars().flat_map(char::to_lowercase));
  } else {
    push_first_lower(part, buf);
  }
}
