//! The colonizer
//!
//! Per line: partition the trailing run of trivia tokens from the preceding
//! significant tokens, emit the significant tokens verbatim, emit `;` when
//! the last significant token satisfies the semicolon predicate, then emit
//! the trailing trivia verbatim. This ordering places the semicolon exactly
//! where Go's rule puts it while passing every other byte through untouched.

use std::io::{Read, Write};

use crate::classify;
use crate::colonize::policy::{Error, OnParseError};
use crate::scanning::{self, Line};

/// Add the implicit semicolons to Go source text.
///
/// Never fails; lexical anomalies are logged as warnings.
pub fn colonize(source: &str) -> String {
    let tokenized = scanning::scan(source);
    for diagnostic in &tokenized.diagnostics {
        tracing::warn!("{diagnostic}");
    }
    render(&tokenized.lines)
}

/// A semicolon inserter with a configured error policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Colonizer {
    on_error: OnParseError,
}

impl Colonizer {
    pub fn new(on_error: OnParseError) -> Self {
        Colonizer { on_error }
    }

    /// Colonize an in-memory string.
    ///
    /// Fails only under the `Fatal` policy, in which case no output exists
    /// to commit.
    pub fn colonize_str(&self, source: &str) -> Result<String, Error> {
        let tokenized = scanning::scan(source);
        self.on_error.apply(&tokenized.diagnostics)?;
        Ok(render(&tokenized.lines))
    }

    /// Colonize from a byte source to a byte sink.
    ///
    /// The input is read fully before scanning; output is written token by
    /// token. The sink is borrowed and never closed here, so callers may
    /// pass handles they keep using, standard output included.
    pub fn colonize(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<(), Error> {
        let mut source = String::new();
        input.read_to_string(&mut source)?;
        let tokenized = scanning::scan(&source);
        self.on_error.apply(&tokenized.diagnostics)?;
        for line in &tokenized.lines {
            let trivia_start = line.trivia_start();
            for token in &line.tokens[..trivia_start] {
                output.write_all(token.as_bytes())?;
            }
            if wants_semicolon(line) {
                output.write_all(b";")?;
            }
            for token in &line.tokens[trivia_start..] {
                output.write_all(token.as_bytes())?;
            }
        }
        output.flush()?;
        Ok(())
    }
}

fn wants_semicolon(line: &Line<'_>) -> bool {
    line.last_significant()
        .is_some_and(classify::requires_semicolon)
}

fn render(lines: &[Line<'_>]) -> String {
    // Each line grows by at most one byte
    let source_len: usize = lines
        .iter()
        .flat_map(|line| line.tokens.iter())
        .map(|token| token.len())
        .sum();
    let mut output = String::with_capacity(source_len + lines.len());
    for line in lines {
        let trivia_start = line.trivia_start();
        for token in &line.tokens[..trivia_start] {
            output.push_str(token);
        }
        if wants_semicolon(line) {
            output.push(';');
        }
        for token in &line.tokens[trivia_start..] {
            output.push_str(token);
        }
    }
    output
}
