//! # gocolonize
//!
//! Adds the implicit semicolons to Go source text, exactly where the Go
//! language's automatic-semicolon-insertion rule would put them, while
//! leaving every other byte — whitespace, comments, newlines — untouched.
//!
//! The core is a two-stage pipeline:
//!
//! - [`scanning`] tokenizes the raw source into lines of token slices,
//!   keeping block comments and raw strings that span newlines intact as
//!   single tokens;
//! - [`colonize`] classifies the last significant token of each line (see
//!   [`classify`]) and re-emits everything verbatim, inserting `;` where the
//!   classification asks for one.
//!
//! The decision is purely lexical, the way the Go specification defines it;
//! no grammar-driven parse is involved, and malformed input is tolerated
//! rather than rejected.

pub mod classify;
pub mod colonize;
pub mod files;
pub mod scanning;
pub mod version;

pub use colonize::{colonize, Colonizer, Error, OnParseError};
pub use scanning::{scan, tokenize, Line, Tokenized};
