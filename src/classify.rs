//! Lexical classification of a single token
//!
//! Go's automatic-semicolon-insertion rule is purely lexical: whether a line
//! ends in a semicolon depends only on the category of its last significant
//! token, never on surrounding grammar. This module enumerates those
//! categories with the logos derive macro and classifies a candidate token by
//! checking that its whole text is exactly one token of a known category.
//!
//! The literal grammars follow the Go specification: integer literals in all
//! four bases with `_` digit separators, floating-point literals with decimal
//! or hex mantissa, imaginary literals, rune literals and both string forms
//! with the full escape set.

use logos::Logos;

/// Lexical category of a complete token text.
///
/// Variants that carry no insertion semantics (`Keyword`) exist so that the
/// reserved words are not mistaken for identifiers.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// The four keywords after which a semicolon is inserted.
    #[token("break")]
    #[token("continue")]
    #[token("fallthrough")]
    #[token("return")]
    TerminatorKeyword,

    /// Any other Go keyword. Never triggers insertion.
    #[token("case")]
    #[token("chan")]
    #[token("const")]
    #[token("default")]
    #[token("defer")]
    #[token("else")]
    #[token("for")]
    #[token("func")]
    #[token("go")]
    #[token("goto")]
    #[token("if")]
    #[token("import")]
    #[token("interface")]
    #[token("map")]
    #[token("package")]
    #[token("range")]
    #[token("select")]
    #[token("struct")]
    #[token("switch")]
    #[token("type")]
    #[token("var")]
    Keyword,

    /// `++` or `--`.
    #[token("++")]
    #[token("--")]
    IncDec,

    /// `)`, `]` or `}`.
    #[token(")")]
    #[token("]")]
    #[token("}")]
    CloseDelim,

    /// A Go identifier: a Unicode letter or `_`, then letters, digits, `_`.
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Ident,

    /// Integer literal: decimal, binary, octal (with or without `o`), hex.
    #[regex(r"0|[1-9](_?[0-9])*")]
    #[regex(r"0[bB](_?[01])+")]
    #[regex(r"0[oO]?(_?[0-7])+")]
    #[regex(r"0[xX](_?[0-9a-fA-F])+")]
    IntLit,

    /// Floating-point literal: decimal mantissa with optional exponent, or
    /// hex mantissa with mandatory `p` exponent.
    #[regex(r"[0-9](_?[0-9])*\.([0-9](_?[0-9])*)?([eE][+-]?[0-9](_?[0-9])*)?")]
    #[regex(r"[0-9](_?[0-9])*[eE][+-]?[0-9](_?[0-9])*")]
    #[regex(r"\.[0-9](_?[0-9])*([eE][+-]?[0-9](_?[0-9])*)?")]
    #[regex(r"0[xX]_?[0-9a-fA-F](_?[0-9a-fA-F])*(\.([0-9a-fA-F](_?[0-9a-fA-F])*)?)?[pP][+-]?[0-9](_?[0-9])*")]
    #[regex(r"0[xX]\.[0-9a-fA-F](_?[0-9a-fA-F])*[pP][+-]?[0-9](_?[0-9])*")]
    FloatLit,

    /// Imaginary literal: decimal digits, or any integer or float form,
    /// followed by `i`.
    #[regex(r"[0-9](_?[0-9])*i")]
    #[regex(r"0[bB](_?[01])+i")]
    #[regex(r"0[oO](_?[0-7])+i")]
    #[regex(r"0[xX](_?[0-9a-fA-F])+i")]
    #[regex(r"[0-9](_?[0-9])*\.([0-9](_?[0-9])*)?([eE][+-]?[0-9](_?[0-9])*)?i")]
    #[regex(r"[0-9](_?[0-9])*[eE][+-]?[0-9](_?[0-9])*i")]
    #[regex(r"\.[0-9](_?[0-9])*([eE][+-]?[0-9](_?[0-9])*)?i")]
    #[regex(r"0[xX]_?[0-9a-fA-F](_?[0-9a-fA-F])*(\.([0-9a-fA-F](_?[0-9a-fA-F])*)?)?[pP][+-]?[0-9](_?[0-9])*i")]
    #[regex(r"0[xX]\.[0-9a-fA-F](_?[0-9a-fA-F])*[pP][+-]?[0-9](_?[0-9])*i")]
    ImagLit,

    /// Rune literal: one plain character, named escape, octal, hex, or
    /// Unicode escape between single quotes.
    #[regex(r"'[^'\\\n]'")]
    #[regex(r#"'\\[abfnrtv\\'"]'"#)]
    #[regex(r"'\\[0-7][0-7][0-7]'")]
    #[regex(r"'\\x[0-9a-fA-F][0-9a-fA-F]'")]
    #[regex(r"'\\u[0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F]'")]
    #[regex(r"'\\U[0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F]'")]
    RuneLit,

    /// Interpreted string literal with the full Go escape set.
    #[regex(r#""([^"\\\n]|\\[abfnrtv\\'"]|\\[0-7][0-7][0-7]|\\x[0-9a-fA-F][0-9a-fA-F]|\\u[0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F]|\\U[0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F])*""#)]
    StringLit,

    /// Raw string literal; newlines inside are content.
    #[regex(r"`[^`]*`")]
    RawStringLit,
}

/// Classify the whole of `text` as one token of a known category.
///
/// Returns `None` when the text is not exactly one such token — for any
/// other operator, malformed or unterminated literal, or empty text.
pub fn classify(text: &str) -> Option<Category> {
    let mut lexer = Category::lexer(text);
    match lexer.next() {
        Some(Ok(category)) if lexer.span().end == text.len() => Some(category),
        _ => None,
    }
}

/// The semicolon predicate: does a line ending in this token receive one?
///
/// True exactly for the categories named by the Go specification's insertion
/// rule; total over any token text.
pub fn requires_semicolon(text: &str) -> bool {
    matches!(
        classify(text),
        Some(
            Category::TerminatorKeyword
                | Category::IncDec
                | Category::CloseDelim
                | Category::Ident
                | Category::IntLit
                | Category::FloatLit
                | Category::ImagLit
                | Category::RuneLit
                | Category::StringLit
                | Category::RawStringLit
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("break", Category::TerminatorKeyword)]
    #[case("continue", Category::TerminatorKeyword)]
    #[case("fallthrough", Category::TerminatorKeyword)]
    #[case("return", Category::TerminatorKeyword)]
    #[case("if", Category::Keyword)]
    #[case("func", Category::Keyword)]
    #[case("range", Category::Keyword)]
    #[case("++", Category::IncDec)]
    #[case("--", Category::IncDec)]
    #[case(")", Category::CloseDelim)]
    #[case("]", Category::CloseDelim)]
    #[case("}", Category::CloseDelim)]
    #[case("x", Category::Ident)]
    #[case("_", Category::Ident)]
    #[case("_x9", Category::Ident)]
    #[case("αβγ", Category::Ident)]
    #[case("breakage", Category::Ident)]
    #[case("0", Category::IntLit)]
    #[case("42", Category::IntLit)]
    #[case("1_000", Category::IntLit)]
    #[case("0600", Category::IntLit)]
    #[case("0o600", Category::IntLit)]
    #[case("0b1010", Category::IntLit)]
    #[case("0x1F_2", Category::IntLit)]
    #[case("5e3", Category::FloatLit)]
    #[case("1e-9", Category::FloatLit)]
    #[case("1.", Category::FloatLit)]
    #[case(".25", Category::FloatLit)]
    #[case("3.14e+2", Category::FloatLit)]
    #[case("0x1p-2", Category::FloatLit)]
    #[case("0x1.8p2", Category::FloatLit)]
    #[case("2i", Category::ImagLit)]
    #[case("089i", Category::ImagLit)]
    #[case("0x1Fi", Category::ImagLit)]
    #[case("6.2i", Category::ImagLit)]
    #[case("5e3i", Category::ImagLit)]
    #[case("'a'", Category::RuneLit)]
    #[case("'λ'", Category::RuneLit)]
    #[case(r"'\n'", Category::RuneLit)]
    #[case(r"'\''", Category::RuneLit)]
    #[case(r"'\377'", Category::RuneLit)]
    #[case(r"'\x41'", Category::RuneLit)]
    #[case(r"'é'", Category::RuneLit)]
    #[case(r"'\U0001F600'", Category::RuneLit)]
    #[case(r#""""#, Category::StringLit)]
    #[case(r#""hi""#, Category::StringLit)]
    #[case(r#""a\"b\n""#, Category::StringLit)]
    #[case("`raw`", Category::RawStringLit)]
    #[case("`raw\nstring`", Category::RawStringLit)]
    fn test_classifies(#[case] text: &str, #[case] expected: Category) {
        assert_eq!(classify(text), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("(")]
    #[case("+")]
    #[case(":=")]
    #[case(";")]
    #[case("089")]
    #[case("0x")]
    #[case("1__0")]
    #[case("1e")]
    #[case("0x1p")]
    #[case("123abc")]
    #[case("''")]
    #[case("'ab'")]
    #[case("'a")]
    #[case(r#""unterminated"#)]
    #[case(r#""bad \q escape""#)]
    #[case("`unterminated")]
    #[case("+++")]
    fn test_rejects(#[case] text: &str) {
        assert_eq!(classify(text), None);
    }

    #[rstest]
    #[case("return", true)]
    #[case("x", true)]
    #[case("42", true)]
    #[case("5e3", true)]
    #[case("2i", true)]
    #[case("'a'", true)]
    #[case(r#""s""#, true)]
    #[case("`s`", true)]
    #[case("++", true)]
    #[case(")", true)]
    #[case("]", true)]
    #[case("}", true)]
    #[case("if", false)]
    #[case("var", false)]
    #[case("(", false)]
    #[case("{", false)]
    #[case(",", false)]
    #[case("&&", false)]
    #[case("=", false)]
    #[case(r#""open"#, false)]
    fn test_semicolon_predicate(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(requires_semicolon(text), expected);
    }
}
