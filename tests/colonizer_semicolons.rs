//! Integration tests for semicolon insertion
//!
//! The cases mirror the Go specification's insertion rule: the decision
//! depends only on the last significant token of each line, and the inserted
//! semicolon lands right after it, before any trailing trivia.

use gocolonize::{colonize, Colonizer, OnParseError};

#[test]
fn test_identifier_and_literal_lines() {
    assert_eq!(colonize("package x; var _ = 42\n"), "package x; var _ = 42;\n");
    assert_eq!(colonize("name := \"value\"\n"), "name := \"value\";\n");
    assert_eq!(colonize("r := 'x'\n"), "r := 'x';\n");
}

#[test]
fn test_open_delimiters_do_not_trigger() {
    assert_eq!(colonize("foo(\n"), "foo(\n");
    assert_eq!(colonize("items := []int{\n"), "items := []int{\n");
    assert_eq!(colonize("if x <\n"), "if x <\n");
}

#[test]
fn test_close_delimiters_trigger() {
    assert_eq!(colonize("foo()\n"), "foo();\n");
    assert_eq!(colonize("m[k]\n"), "m[k];\n");
    assert_eq!(colonize("}\n"), "};\n");
}

#[test]
fn test_comment_trailing_a_statement() {
    assert_eq!(colonize("x := 1 // comment\n"), "x := 1; // comment\n");
    assert_eq!(colonize("y-- /* done */\n"), "y--; /* done */\n");
}

#[test]
fn test_raw_string_gets_its_semicolon_after_the_closing_quote() {
    assert_eq!(colonize("`raw\nstring`\n"), "`raw\nstring`;\n");
}

#[test]
fn test_keyword_distinctions() {
    assert_eq!(colonize("return\n"), "return;\n");
    assert_eq!(colonize("break\n"), "break;\n");
    assert_eq!(colonize("fallthrough\n"), "fallthrough;\n");
    // Only those four keywords trigger; others continue the statement
    assert_eq!(colonize("go\n"), "go\n");
    assert_eq!(colonize("defer\n"), "defer\n");
    assert_eq!(colonize("x := map\n"), "x := map\n");
}

#[test]
fn test_determinism() {
    let input = "a := 1\nb()\n";
    assert_eq!(colonize(input), colonize(input));
}

#[test]
fn test_running_twice_is_idempotent() {
    let input = "package main\nfunc f() {\n\tg()\n}\n";
    let once = colonize(input);
    assert_eq!(colonize(&once), once);
}

#[test]
fn test_fatal_policy_rejects_unterminated_input() {
    let colonizer = Colonizer::new(OnParseError::Fatal);
    assert!(colonizer.colonize_str("s := `open").is_err());
    assert!(colonizer.colonize_str("s := `closed`\n").is_ok());
}

#[test]
fn test_ignore_policy_still_produces_output() {
    let colonizer = Colonizer::new(OnParseError::Ignore);
    assert_eq!(colonizer.colonize_str("s := `open").unwrap(), "s := `open");
}

const SAMPLE: &str = r#"package main

import "fmt"

// entry point
func main() {
	fmt.Println("hello")
	x := 1 // a counter
	x++
	s := `raw
string`
	_ = s
}
"#;

#[test]
fn test_sample_program() {
    insta::assert_snapshot!("sample_program", colonize(SAMPLE));
}
