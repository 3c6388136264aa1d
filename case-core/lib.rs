//! Identifier case detection and cycling.
//!
//! A token is rotated through three styles:
//!
//! ```text
//! camelCase -> under_score_case -> TitleCase -> camelCase
//! ```
//!
//! Leading and trailing underscores are kept as they are, so `__single___`
//! becomes `__Single___`.
//!
//! ```
//! use case_core::switch_case;
//!
//! assert_eq!(switch_case("underScored").unwrap().as_str(), "under_scored");
//! assert_eq!(switch_case("under_scored").unwrap().as_str(), "UnderScored");
//! assert_eq!(switch_case("UnderScored").unwrap().as_str(), "underScored");
//! assert!(switch_case("foo bar").is_err());
//! ```
use smartstring::{LazyCompact, SmartString};

pub mod affix;
pub mod chars;
pub mod convert;
pub mod cycle;
pub mod split;
pub mod style;

pub use cycle::{UnknownCaseError, detect_case, switch_case};
pub use style::{CaseStyle, classify};

pub type Tendril = SmartString<LazyCompact>;
