//! Enclosing underscores (`__private`, `reserved_`) are never part of the
//! style; they are stripped before detection and put back afterwards.
use crate::{Tendril, chars::SEPARATOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affixed<'a> {
  pub prefix: &'a str,
  pub core: &'a str,
  pub suffix: &'a str,
}

impl<'a> Affixed<'a> {
  /// Splits `token` into its leading underscore run, core and trailing
  /// underscore run. A token made only of underscores ends up entirely in
  /// `prefix`.
  pub fn split(token: &'a str) -> Self {
    let rest = token.trim_start_matches(SEPARATOR);
    let prefix = &token[..token.len() - rest.len()];
    let core = rest.trim_end_matches(SEPARATOR);
    let suffix = &rest[core.len()..];
    Self {
      prefix,
      core,
      suffix,
    }
  }

  pub fn has_core(&self) -> bool {
    !self.core.is_empty()
  }

  /// Reattaches the affixes around `core`.
  pub fn rejoin(&self, core: &str) -> Tendril {
    let mut res = Tendril::new();
    res.push_str(self.prefix);
    res.push_str(core);
    res.push_str(self.suffix);
    res
  }
}
