//! Token-text predicates
//!
//! Tokens carry no stored kind; the kind is inferred from the token text at
//! the point of use. Layout runs, newlines and comments are "trivia" — they
//! are preserved verbatim but never influence the semicolon decision.
//!
//! The predicates below rely on the scanner's delimiter table: a plain token
//! can never begin with a space, a tab, a carriage return or a slash, so a
//! first-character probe is unambiguous.

/// A lone newline token, which closes a line.
pub fn is_newline(token: &str) -> bool {
    token == "\n"
}

/// A run of layout characters (spaces, tabs, carriage returns).
pub fn is_layout(token: &str) -> bool {
    token.starts_with([' ', '\t', '\r'])
}

/// A line comment or a block comment (possibly spanning multiple lines).
pub fn is_comment(token: &str) -> bool {
    token.starts_with("//") || token.starts_with("/*")
}

/// Whitespace, newline or comment: preserved verbatim, ignored by the
/// semicolon predicate.
pub fn is_trivia(token: &str) -> bool {
    is_layout(token) || is_newline(token) || is_comment(token)
}
