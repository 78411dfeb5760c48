//! The Go scanner
//!
//! A single left-to-right pass over the whole input. Token boundaries come
//! from a forward search over the delimiter table; text strictly between the
//! cursor and the next delimiter is emitted as a plain, unclassified token.
//! Block comments and raw strings may contain literal newlines, so the
//! scanner carries explicit state for them: an embedded newline is part of
//! the token, not a line boundary. Interpreted strings and rune literals
//! cannot contain unescaped newlines; they are scanned inline with lookahead
//! and truncated at the end of the line when unterminated.

use crate::scanning::delimiters;
use crate::scanning::diagnostics::{Diagnostic, DiagnosticKind};
use crate::scanning::lines::{Line, Tokenized};

/// Scanner mode. Only `InBlockComment` and `InRawString` persist across a
/// newline, because only those constructs may legally contain one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Normal,
    InBlockComment,
    InRawString,
}

/// Tokenize the source into lines of raw token slices.
///
/// Pure and total: any input produces a token sequence whose concatenation
/// reproduces the input byte-for-byte.
pub fn tokenize(source: &str) -> Vec<Line<'_>> {
    scan(source).lines
}

/// Tokenize the source and report any recovered lexical anomalies.
pub fn scan(source: &str) -> Tokenized<'_> {
    Scanner::new(source).run()
}

struct Scanner<'a> {
    source: &'a str,
    cursor: usize,
    state: ScanState,
    /// Start offset of the block comment or raw string currently open.
    span_start: usize,
    lines: Vec<Line<'a>>,
    current: Vec<&'a str>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Scanner {
            source,
            cursor: 0,
            state: ScanState::Normal,
            span_start: 0,
            lines: Vec::new(),
            current: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn run(mut self) -> Tokenized<'a> {
        while self.cursor < self.source.len() {
            match self.state {
                ScanState::Normal => self.scan_normal(),
                ScanState::InBlockComment => self.scan_block_comment(),
                ScanState::InRawString => self.scan_raw_string(),
            }
        }
        if !self.current.is_empty() {
            self.end_line();
        }
        Tokenized {
            lines: self.lines,
            diagnostics: self.diagnostics,
        }
    }

    fn scan_normal(&mut self) {
        let Some((index, delimiter)) = delimiters::find_next(self.source, self.cursor) else {
            // No delimiter left; the rest of the input is one plain token.
            self.push_token(self.cursor, self.source.len());
            self.cursor = self.source.len();
            return;
        };
        if index > self.cursor {
            self.push_token(self.cursor, index);
        }
        match delimiter {
            "\n" => {
                self.push_token(index, index + 1);
                self.cursor = index + 1;
                self.end_line();
            }
            "//" => {
                let end = self.source[index..]
                    .find('\n')
                    .map_or(self.source.len(), |offset| index + offset);
                self.push_token(index, end);
                self.cursor = end;
            }
            "/*" => {
                self.span_start = index;
                self.cursor = index + 2;
                self.state = ScanState::InBlockComment;
            }
            "`" => {
                self.span_start = index;
                self.cursor = index + 1;
                self.state = ScanState::InRawString;
            }
            "\"" => self.scan_quoted(index, b'"', DiagnosticKind::UnterminatedString),
            "'" => self.scan_quoted(index, b'\'', DiagnosticKind::UnterminatedRune),
            " " | "\t" | "\r" => {
                let bytes = self.source.as_bytes();
                let mut end = index + 1;
                while end < bytes.len() && matches!(bytes[end], b' ' | b'\t' | b'\r') {
                    end += 1;
                }
                self.push_token(index, end);
                self.cursor = end;
            }
            _ => {
                self.push_token(index, index + delimiter.len());
                self.cursor = index + delimiter.len();
            }
        }
    }

    fn scan_block_comment(&mut self) {
        match self.source[self.cursor..].find("*/") {
            Some(offset) => {
                let end = self.cursor + offset + 2;
                self.push_token(self.span_start, end);
                self.cursor = end;
                self.state = ScanState::Normal;
            }
            None => self.finish_unterminated(DiagnosticKind::UnterminatedBlockComment),
        }
    }

    fn scan_raw_string(&mut self) {
        match self.source[self.cursor..].find('`') {
            Some(offset) => {
                let end = self.cursor + offset + 1;
                self.push_token(self.span_start, end);
                self.cursor = end;
                self.state = ScanState::Normal;
            }
            None => self.finish_unterminated(DiagnosticKind::UnterminatedRawString),
        }
    }

    /// Scan an interpreted string or rune literal starting at `start`.
    ///
    /// A backslash escapes the following character, so `\"` does not end a
    /// string. A bare newline or the end of the input truncates the literal
    /// early; the newline stays outside the token.
    fn scan_quoted(&mut self, start: usize, quote: u8, kind: DiagnosticKind) {
        let bytes = self.source.as_bytes();
        let mut index = start + 1;
        while index < bytes.len() {
            match bytes[index] {
                b'\\' => {
                    index += 1;
                    if index < bytes.len() && bytes[index] != b'\n' {
                        index += self.char_len(index);
                    }
                }
                b'\n' => {
                    self.diagnose(kind, start);
                    self.push_token(start, index);
                    self.cursor = index;
                    return;
                }
                byte if byte == quote => {
                    self.push_token(start, index + 1);
                    self.cursor = index + 1;
                    return;
                }
                _ => index += self.char_len(index),
            }
        }
        self.diagnose(kind, start);
        self.push_token(start, self.source.len());
        self.cursor = self.source.len();
    }

    /// Emit the open construct's remainder as one token and stop scanning.
    fn finish_unterminated(&mut self, kind: DiagnosticKind) {
        self.diagnose(kind, self.span_start);
        self.push_token(self.span_start, self.source.len());
        self.cursor = self.source.len();
        self.state = ScanState::Normal;
    }

    fn push_token(&mut self, start: usize, end: usize) {
        debug_assert!(start < end, "empty tokens are never emitted");
        self.current.push(&self.source[start..end]);
    }

    fn end_line(&mut self) {
        self.lines.push(Line {
            tokens: std::mem::take(&mut self.current),
        });
    }

    fn diagnose(&mut self, kind: DiagnosticKind, offset: usize) {
        let before = &self.source[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |index| index + 1);
        self.diagnostics.push(Diagnostic {
            kind,
            line,
            column: offset - line_start + 1,
        });
    }

    /// Byte length of the character starting at `index`. The scanner only
    /// lands on character boundaries, so the lookup is always valid.
    fn char_len(&self, index: usize) -> usize {
        self.source[index..]
            .chars()
            .next()
            .map_or(1, char::len_utf8)
    }
}
