//! Property-based tests for the tokenizer.
//!
//! Two input generators:
//! 1. Arbitrary text over an alphabet dense in syntax characters, which
//!    exercises every state and both error paths.
//! 2. Well-formed documents built recursively, which must always tokenize.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use form_lexer::{is_whitespace, tokenize, LexErrorKind, Token, TokenKind, EOF_ATOM};
use proptest::prelude::*;

// -- Input Strategies --

/// Arbitrary input biased toward parens, backslashes and `+`.
fn noisy_input() -> impl Strategy<Value = String> {
    "[a-cA-C0-9 _*()\\\\+\n\té€-]{0,48}"
}

/// Text item with only valid escapes.
fn text_item() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => "[a-zA-Z0-9 .,!?é]{1,6}",
            1 => Just(r"\(".to_string()),
            1 => Just(r"\)".to_string()),
            1 => Just(r"\\".to_string()),
            1 => Just(r"\+(quoted)\+".to_string()),
        ],
        1..5,
    )
    .prop_map(|parts| parts.concat())
}

/// A text item or a form whose head is an atom.
fn document_item() -> impl Strategy<Value = String> {
    text_item().prop_recursive(4, 32, 4, |inner| {
        ("[a-z][a-z0-9-]{0,6}", prop::collection::vec(inner, 0..4)).prop_map(|(head, items)| {
            let mut form = format!("({head}");
            for item in items {
                form.push(' ');
                form.push_str(&item);
            }
            form.push(')');
            form
        })
    })
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(document_item(), 0..4).prop_map(|items| items.join(" "))
}

// -- Checks Shared by Both Generators --

fn assert_well_formed(input: &str, tokens: &[Token<'_>]) -> Result<(), TestCaseError> {
    let end = input.chars().count();

    // Ends with the eof form at end of input.
    prop_assert!(tokens.len() >= 3);
    let tail = &tokens[tokens.len() - 3..];
    prop_assert_eq!(tail[0], Token::form_start(end));
    prop_assert_eq!(tail[1], Token::atom(EOF_ATOM, end));
    prop_assert!(tail[1].is_eof_atom());
    prop_assert_eq!(tail[2], Token::form_end(end));

    // Positions never decrease.
    for pair in tokens.windows(2) {
        prop_assert!(pair[0].pos <= pair[1].pos, "{} then {}", pair[0], pair[1]);
    }

    let body = &tokens[..tokens.len() - 3];
    for tok in body {
        // Bracket tokens carry bracket text.
        match tok.kind {
            TokenKind::FormStart => prop_assert_eq!(tok.text, "("),
            TokenKind::FormEnd => prop_assert_eq!(tok.text, ")"),
            TokenKind::Atom => prop_assert!(!tok.text.is_empty()),
            TokenKind::Text => {}
        }
        // Token text is the input at the token's code-point position.
        let at_pos: String = input
            .chars()
            .skip(tok.pos)
            .take(tok.text.chars().count())
            .collect();
        prop_assert_eq!(at_pos.as_str(), tok.text);
    }

    // Only whitespace is dropped between tokens.
    let covered: String = body
        .iter()
        .flat_map(|t| t.text.chars())
        .filter(|&c| !is_whitespace(c))
        .collect();
    let expected: String = input.chars().filter(|&c| !is_whitespace(c)).collect();
    prop_assert_eq!(covered, expected);
    Ok(())
}

proptest! {
    #[test]
    fn noisy_input_tokenizes_or_reports(input in noisy_input()) {
        match tokenize(&input) {
            Ok(tokens) => assert_well_formed(&input, &tokens)?,
            Err(err) => {
                let chars: Vec<char> = input.chars().collect();
                prop_assert!(err.pos < chars.len(), "error past end: {err}");
                match err.kind {
                    LexErrorKind::InvalidEscape { found } => {
                        prop_assert_eq!(chars[err.pos], '\\');
                        prop_assert_eq!(chars.get(err.pos + 1).copied(), found);
                    }
                    LexErrorKind::ExpectedAtomOrClose => prop_assert_eq!(chars[err.pos], '('),
                    LexErrorKind::EmptyAtom { found } => prop_assert_eq!(chars[err.pos], found),
                }
            }
        }
    }

    #[test]
    fn documents_always_tokenize(input in document()) {
        let tokens = tokenize(&input).unwrap();
        assert_well_formed(&input, &tokens)?;

        let opens = tokens.iter().filter(|t| t.kind == TokenKind::FormStart).count();
        let closes = tokens.iter().filter(|t| t.kind == TokenKind::FormEnd).count();
        prop_assert_eq!(opens, closes);
    }

    #[test]
    fn tokenize_is_deterministic(input in noisy_input()) {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
    }
}
