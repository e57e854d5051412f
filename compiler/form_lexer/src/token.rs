//! Token types produced by the tokenizer.

use std::fmt;

use crate::visible::visible;

/// Atom text of the synthetic form appended at end of input.
pub const EOF_ATOM: &str = "eof";

/// The kind of a token. Closed set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// `(` opening a form.
    FormStart,
    /// Bare symbol of `a-z`, `0-9` and `-`.
    Atom,
    /// Free-form text outside form syntax.
    Text,
    /// `)` closing a form.
    FormEnd,
}

impl TokenKind {
    /// Variant name, as used in the token display form.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::FormStart => "FormStart",
            TokenKind::Atom => "Atom",
            TokenKind::Text => "Text",
            TokenKind::FormEnd => "FormEnd",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token borrowed from the tokenizer input.
///
/// `text` is the exact input span the token covers. For [`TokenKind::Text`]
/// tokens that includes escape sequences as written: `a\(b` stays `a\(b`,
/// and `\+` quote markers are kept. The tokenizer never unescapes; consumers
/// that need the literal value are responsible for it.
///
/// `pos` counts Unicode code points from the start of the input, not bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub pos: usize,
}

impl<'a> Token<'a> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'a str, pos: usize) -> Self {
        Self { kind, text, pos }
    }

    /// `(` at `pos`.
    #[inline]
    pub fn form_start(pos: usize) -> Self {
        Self::new(TokenKind::FormStart, "(", pos)
    }

    /// `)` at `pos`.
    #[inline]
    pub fn form_end(pos: usize) -> Self {
        Self::new(TokenKind::FormEnd, ")", pos)
    }

    #[inline]
    pub fn atom(text: &'a str, pos: usize) -> Self {
        Self::new(TokenKind::Atom, text, pos)
    }

    #[inline]
    pub fn text(text: &'a str, pos: usize) -> Self {
        Self::new(TokenKind::Text, text, pos)
    }

    /// Returns `true` for the `eof` atom of the synthetic end-of-input form.
    pub fn is_eof_atom(&self) -> bool {
        self.kind == TokenKind::Atom && self.text == EOF_ATOM
    }
}

impl fmt::Display for Token<'_> {
    /// Renders as ``Kind{pos: `text`}`` with non-printable characters made
    /// visible.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{{}: `{}`}}", self.kind, self.pos, visible(self.text))
    }
}
