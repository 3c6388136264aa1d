//! Switching the case of selected text.
//!
//! The host editor is reached through [`command::TextSurface`], which hands
//! out the selected spans and accepts replacements. [`buffer::RopeBuffer`] is
//! a rope-backed surface used by the command line front end and by tests.
pub mod buffer;
pub mod command;
pub mod error;

pub use buffer::RopeBuffer;
pub use command::{Span, SwitchReport, TextSurface, switch_case_selections};
pub use error::{Error, Result};
