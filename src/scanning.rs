//! Lexical scanning of Go source text
//!
//! This module converts a complete source text into an ordered sequence of
//! lines, each an ordered sequence of raw token slices. Tokenization is
//! lossless and total: concatenating every token of every line, in order,
//! reproduces the input byte-for-byte, and the scanner never fails — in the
//! worst case the remainder of the input becomes a single trailing token.
//!
//! Constructs that legally span newlines (block comments and raw strings)
//! are scanned as single tokens; the scanner carries explicit state for them
//! so embedded newlines never open a new line.

pub mod delimiters;
pub mod diagnostics;
pub mod lines;
pub mod scanner;
pub mod tokens;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use lines::{Line, Tokenized};
pub use scanner::{scan, tokenize, ScanState};
