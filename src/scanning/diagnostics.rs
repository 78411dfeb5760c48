//! Scanner diagnostics
//!
//! The scanner never fails: a construct that never closes is emitted as a
//! single best-effort token. It does, however, record the anomaly so the
//! caller's error policy can decide what to surface.

use std::fmt;

/// The lexical anomalies the scanner can recover from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum DiagnosticKind {
    /// `/*` with no matching `*/` before end of input.
    UnterminatedBlockComment,
    /// Back-quote with no closing back-quote before end of input.
    UnterminatedRawString,
    /// Double quote with no closing quote before the end of the line.
    UnterminatedString,
    /// Single quote with no closing quote before the end of the line.
    UnterminatedRune,
}

impl DiagnosticKind {
    pub fn message(self) -> &'static str {
        match self {
            DiagnosticKind::UnterminatedBlockComment => "unterminated block comment",
            DiagnosticKind::UnterminatedRawString => "unterminated raw string literal",
            DiagnosticKind::UnterminatedString => "unterminated string literal",
            DiagnosticKind::UnterminatedRune => "unterminated rune literal",
        }
    }
}

/// A recoverable lexical anomaly, positioned at the opening delimiter of the
/// construct that never closed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 1-based physical line of the opening delimiter.
    pub line: usize,
    /// 1-based byte column of the opening delimiter.
    pub column: usize,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.line, self.column, self.kind.message())
    }
}
