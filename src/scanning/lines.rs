//! Line and scan-output types
//!
//! A line is the ordered sequence of tokens scanned between two newline
//! tokens (or the input boundaries); the closing newline token, if present,
//! belongs to the line it ends. Tokens are slices of the original source, so
//! concatenating the tokens of all lines reproduces the input exactly.

use crate::scanning::diagnostics::Diagnostic;
use crate::scanning::tokens;

/// One physical line of tokens.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Line<'a> {
    /// The raw token slices of this line, in source order.
    pub tokens: Vec<&'a str>,
}

impl<'a> Line<'a> {
    /// Index of the first token of the trailing trivia run.
    ///
    /// Tokens from this index to the end of the line are contiguous trivia
    /// (layout, comments, the closing newline). Everything before it is
    /// significant.
    pub fn trivia_start(&self) -> usize {
        let mut index = self.tokens.len();
        while index > 0 && tokens::is_trivia(self.tokens[index - 1]) {
            index -= 1;
        }
        index
    }

    /// The last significant token of the line, if the line has one.
    pub fn last_significant(&self) -> Option<&'a str> {
        self.trivia_start().checked_sub(1).map(|index| self.tokens[index])
    }

    /// A line with no significant tokens (blank or comment-only) never
    /// receives a semicolon.
    pub fn is_trivia_only(&self) -> bool {
        self.trivia_start() == 0
    }
}

/// The full scanner output: token lines plus any recovered anomalies.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Tokenized<'a> {
    pub lines: Vec<Line<'a>>,
    pub diagnostics: Vec<Diagnostic>,
}
