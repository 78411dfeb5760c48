//! Semicolon insertion
//!
//! The colonizer consumes tokenized lines, classifies the last significant
//! token of each line, optionally emits a semicolon, and re-emits every
//! scanned token exactly as it appeared. The inserted semicolon lands
//! immediately after the last significant token and before any trailing
//! layout, comments or the closing newline.

pub mod colonizer;
pub mod policy;

pub use colonizer::{colonize, Colonizer};
pub use policy::{Error, OnParseError};
