//! Property-based tests with proptest.
//!
//! Generate random lexeme sequences, render them to source text, and verify
//! that scanning is stable: the same text always yields the same token kind
//! sequence, and every rendered lexeme maps to exactly one token.

use hlslparse::parser::lexer::{Lexer, TokenKind};
use hlslparse::SourceCode;
use proptest::prelude::*;

// -- Leaf strategies --

/// Identifier-shaped lexeme; may collide with a keyword, which is fine for
/// the stability property (classification stays deterministic either way).
fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,10}".prop_map(|s| s)
}

fn int_literal() -> impl Strategy<Value = String> {
    "[1-9][0-9]{0,6}".prop_map(|s| s)
}

fn float_literal() -> impl Strategy<Value = String> {
    "[0-9]{1,4}\\.[0-9]{1,4}f?".prop_map(|s| s)
}

fn operator() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "+", "-", "*", "/", "%", "<<", ">>", "<", ">", "<=", ">=", "==", "!=", "&", "|", "^",
        "&&", "||", "=", "+=", "-=", "*=", "/=", "%=", "<<=", ">>=", "&=", "|=", "^=", "++",
        "--", "!", "~", "?",
    ])
    .prop_map(str::to_string)
}

fn punctuation() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["(", ")", "{", "}", "[", "]", ",", ";", ":", "."])
        .prop_map(str::to_string)
}

fn lexeme() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => word(),
        2 => int_literal(),
        2 => float_literal(),
        2 => operator(),
        3 => punctuation(),
    ]
}

fn scan_kinds(text: &str) -> Vec<TokenKind> {
    let source = SourceCode::from_string("proptest", text);
    Lexer::new(&source)
        .tokenize()
        .expect("scan failed")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

proptest! {
    #[test]
    fn rescanning_yields_identical_kinds(lexemes in prop::collection::vec(lexeme(), 0..40)) {
        let text = lexemes.join(" ");

        let first = scan_kinds(&text);
        let second = scan_kinds(&text);

        prop_assert_eq!(&first, &second);
        // every lexeme is one token, plus the end-of-stream terminator
        prop_assert_eq!(first.len(), lexemes.len() + 1);
        prop_assert_eq!(*first.last().unwrap(), TokenKind::EndOfStream);
    }

    #[test]
    fn whitespace_shape_does_not_change_kinds(lexemes in prop::collection::vec(lexeme(), 0..25)) {
        let spaced = lexemes.join(" ");
        let lined = lexemes.join("\n\t ");

        prop_assert_eq!(scan_kinds(&spaced), scan_kinds(&lined));
    }
}
