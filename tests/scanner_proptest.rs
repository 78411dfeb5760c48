//! Property-based tests for the scanner and colonizer
//!
//! Two input sources: fully arbitrary strings (the scanner is total, so no
//! input may break the invariants) and Go-shaped line soup that exercises the
//! interesting token kinds much more densely.

use gocolonize::{colonize, tokenize};
use proptest::prelude::*;

fn reassemble(source: &str) -> String {
    tokenize(source)
        .into_iter()
        .flat_map(|line| line.tokens)
        .collect()
}

/// True when `output` is `input` with only `;` characters inserted.
fn only_semicolons_inserted(input: &str, output: &str) -> bool {
    let mut pending = input.chars().peekable();
    for ch in output.chars() {
        match pending.peek() {
            Some(&next) if next == ch => {
                pending.next();
            }
            _ if ch == ';' => {}
            _ => return false,
        }
    }
    pending.next().is_none()
}

/// Generate one Go-flavored line.
fn go_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("package main".to_string()),
        Just("import \"fmt\"".to_string()),
        Just("func f(a, b int) int {".to_string()),
        Just("fmt.Println(\"hi\")".to_string()),
        Just("return a + b".to_string()),
        Just("}".to_string()),
        Just("// a comment".to_string()),
        Just("/* spans\ntwo lines */".to_string()),
        Just("s := `raw\nstring`".to_string()),
        Just("x := \"unterminated".to_string()),
        Just("x := 0x1F + 0b10 + 0o7 + 1_000".to_string()),
        Just("f := 5e3 + 2i".to_string()),
        Just("r := '\\n'".to_string()),
        "[a-z]{1,8} := [0-9]{1,5}",
        "[a-z]{1,8}\\+\\+",
    ]
}

fn go_source() -> impl Strategy<Value = String> {
    prop::collection::vec(go_line(), 0..12).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn prop_tokenize_is_lossless(input in any::<String>()) {
        prop_assert_eq!(reassemble(&input), input);
    }

    #[test]
    fn prop_tokenize_is_lossless_on_go_soup(input in go_source()) {
        prop_assert_eq!(reassemble(&input), input);
    }

    #[test]
    fn prop_colonize_only_inserts(input in any::<String>()) {
        let output = colonize(&input);
        prop_assert!(
            only_semicolons_inserted(&input, &output),
            "output {:?} is not {:?} plus semicolons", output, input
        );
    }

    #[test]
    fn prop_colonize_only_inserts_on_go_soup(input in go_source()) {
        let output = colonize(&input);
        prop_assert!(
            only_semicolons_inserted(&input, &output),
            "output {:?} is not {:?} plus semicolons", output, input
        );
    }

    #[test]
    fn prop_colonize_is_deterministic(input in go_source()) {
        prop_assert_eq!(colonize(&input), colonize(&input));
    }

    #[test]
    fn prop_colonize_twice_is_idempotent(input in go_source()) {
        let once = colonize(&input);
        let twice = colonize(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_colonize_twice_is_idempotent_on_noise(input in any::<String>()) {
        let once = colonize(&input);
        let twice = colonize(&once);
        prop_assert_eq!(twice, once);
    }
}
