//! Delimiter table for the Go scanner
//!
//! The scanner finds token boundaries with a single forward search for any
//! delimiter in this table. Multi-character delimiters are listed before any
//! shorter delimiter that is their prefix (`<<=` before `<<` before `<`), so
//! the first match at a position is always the longest one.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// All Go delimiters, in priority order.
///
/// Covers comment openers, the full operator and punctuation set of the Go
/// grammar (compound assignments included), the three quote characters, and
/// the whitespace characters.
pub const DELIMITERS: &[&str] = &[
    "/*", "*/", "//",
    "<<=", ">>=", "&^=", "...",
    "==", "!=", "<=", ">=", "&&", "||", "<-",
    "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
    "<<", ">>", "&^", ":=",
    "=", "!", "|", "&", "^", "+", "-", "*", "/", "%", "~",
    ";", ",", ":", ".",
    "{", "}", "(", ")", "<", ">", "[", "]",
    "\"", "'", "`",
    " ", "\t", "\r", "\n",
];

/// Delimiters grouped by their first byte, preserving table order within each
/// group. All delimiters are ASCII, so a first-byte probe is exact.
static BY_FIRST_BYTE: Lazy<HashMap<u8, Vec<&'static str>>> = Lazy::new(|| {
    let mut map: HashMap<u8, Vec<&'static str>> = HashMap::new();
    for delimiter in DELIMITERS {
        map.entry(delimiter.as_bytes()[0])
            .or_default()
            .push(delimiter);
    }
    map
});

/// Find the next delimiter occurrence at or after `from`.
///
/// Returns the byte index of the match together with the matched delimiter.
/// At a given index, the first table entry that matches wins, which resolves
/// overlapping delimiters in favor of the longest.
pub fn find_next(source: &str, from: usize) -> Option<(usize, &'static str)> {
    let bytes = source.as_bytes();
    for index in from..bytes.len() {
        if let Some(candidates) = BY_FIRST_BYTE.get(&bytes[index]) {
            for delimiter in candidates {
                if bytes[index..].starts_with(delimiter.as_bytes()) {
                    return Some((index, delimiter));
                }
            }
        }
    }
    None
}
