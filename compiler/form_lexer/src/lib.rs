//! Tokenizer for a small parenthesized form notation.
//!
//! Input is free text interleaved with forms: `(head item ...)`, where the
//! head is an atom of `a-z`, `0-9` and `-`, and items are text or nested
//! forms. [`tokenize`] turns the input into a flat sequence of
//! [`FormStart`](TokenKind::FormStart), [`Atom`](TokenKind::Atom),
//! [`Text`](TokenKind::Text) and [`FormEnd`](TokenKind::FormEnd) tokens,
//! always terminated by a synthetic `(eof)` form.
//!
//! ```
//! use form_lexer::{tokenize, Token};
//!
//! let tokens = tokenize("(b bold) text").unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::form_start(0),
//!         Token::atom("b", 1),
//!         Token::text("bold", 3),
//!         Token::form_end(7),
//!         Token::text("text", 9),
//!         Token::form_start(13),
//!         Token::atom("eof", 13),
//!         Token::form_end(13),
//!     ]
//! );
//! ```
//!
//! Token text is borrowed from the input verbatim; escape sequences in text
//! (`\(`, `\)`, `\\`, `\+`) are not interpreted. Positions are code-point
//! indices.
//!
//! # Tracing
//!
//! Tokenization runs inside a `tokenize` span. Emitted tokens are logged at
//! `trace` level and errors at `debug` level. Enable with
//! `RUST_LOG=form_lexer=trace` after calling [`init_tracing`].

mod cursor;
mod lex_error;
mod token;
mod tokenizer;
pub mod visible;

pub use cursor::{is_atom_char, is_whitespace};
pub use lex_error::{LexError, LexErrorKind};
pub use token::{Token, TokenKind, EOF_ATOM};
pub use tokenizer::Tokenizer;

use std::sync::Once;

/// Tokenize `input`.
///
/// Shorthand for `Tokenizer::new(input).tokenize()`.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    Tokenizer::new(input).tokenize()
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times; only the first call has an effect, and only
/// when `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}
