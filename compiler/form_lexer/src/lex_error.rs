//! Lexical errors.
//!
//! Every error is fatal for the run that produced it: tokenization stops at
//! the first one and no partial token sequence is returned. Errors are
//! deterministic in the input, so there is nothing to retry.

use std::fmt;

use crate::visible::push_visible_char;

/// A lexical error and the code-point position where it was detected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at position {pos}")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Code-point index of the offending character.
    pub pos: usize,
}

/// What kind of lexical error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// `\` followed by something other than `(`, `)`, `\` or `+`.
    /// `found` is `None` when the backslash is the last character of input.
    /// Reported at the backslash.
    InvalidEscape { found: Option<char> },
    /// `(` immediately after a form-opening `(`. Reported at the second `(`.
    ExpectedAtomOrClose,
    /// A form opens with a character that cannot start an atom, e.g. `(*)`.
    /// Reported at that character.
    EmptyAtom { found: char },
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LexErrorKind::InvalidEscape { found: Some(c) } => {
                let mut shown = String::new();
                push_visible_char(&mut shown, c);
                write!(f, "invalid escape `\\{shown}`")
            }
            LexErrorKind::InvalidEscape { found: None } => {
                f.write_str("trailing `\\` at end of input")
            }
            LexErrorKind::ExpectedAtomOrClose => {
                f.write_str("expected atom or `)` after `(`, found `(`")
            }
            LexErrorKind::EmptyAtom { found } => {
                let mut shown = String::new();
                push_visible_char(&mut shown, found);
                write!(f, "expected atom after `(`, found `{shown}`")
            }
        }
    }
}

impl LexError {
    /// Create an invalid escape error at the backslash.
    #[cold]
    pub fn invalid_escape(pos: usize, found: Option<char>) -> Self {
        Self {
            kind: LexErrorKind::InvalidEscape { found },
            pos,
        }
    }

    /// Create an error for a form opened with a nested form.
    #[cold]
    pub fn expected_atom_or_close(pos: usize) -> Self {
        Self {
            kind: LexErrorKind::ExpectedAtomOrClose,
            pos,
        }
    }

    /// Create an error for a form head that is not an atom.
    #[cold]
    pub fn empty_atom(pos: usize, found: char) -> Self {
        Self {
            kind: LexErrorKind::EmptyAtom { found },
            pos,
        }
    }
}
