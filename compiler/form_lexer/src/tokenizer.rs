//! The tokenizer state machine.
//!
//! # Design
//!
//! The machine is a closed set of [`State`]s driven by a single `match`.
//! Each state inspects the cursor, possibly emits tokens, and returns the
//! next state; [`State::Eof`] is the only state that returns none. Every
//! state either advances the cursor or hands off to a state that does, so a
//! run takes O(input length) steps.
//!
//! ```text
//! Start          `(` -> Form           other -> Text
//! Form           emit `(`             -> AfterFormOpen
//! AfterFormOpen  `)` -> Close          `(` -> error       other -> Atom
//! Atom           emit atom            -> AfterItem
//! Text           emit text            -> AfterItem
//! Close          emit `)`             -> AfterItem
//! AfterItem      `)` -> Close          `(` -> Form        other -> Text
//! (end of input after whitespace)     -> Eof
//! ```
//!
//! # Text Escapes
//!
//! Inside text, `\(`, `\)` and `\\` are literal and `\+` toggles a quoted
//! span in which `(` and `)` do not end the text. Escapes are kept verbatim
//! in the token; any other `\x`, or a trailing `\`, is an error.

use tracing::{debug, debug_span, trace};

use crate::cursor::{is_atom_char, Cursor};
use crate::token::{Token, EOF_ATOM};
use crate::LexError;

/// Tokenizer states.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    /// Initial: top-level text or a form.
    Start,
    /// Free text up to the next unquoted `(` or `)`.
    Text,
    /// `(` at the cursor.
    Form,
    /// Just after `(`: an atom or an immediate `)`.
    AfterFormOpen,
    /// `)` at the cursor.
    Close,
    /// Form head atom.
    Atom,
    /// After any complete item: `)`, a nested form, or text.
    AfterItem,
    /// End of input: append the `(eof)` form and stop.
    Eof,
}

/// Single-use tokenizer over one input.
///
/// Construct with [`Tokenizer::new`] and consume with
/// [`Tokenizer::tokenize`]. A tokenizer owns its cursor and output buffer,
/// so separate inputs can be tokenized concurrently without coordination.
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            tokens: Vec::new(),
        }
    }

    /// Run the machine to completion.
    ///
    /// On success the returned tokens always end with the synthetic
    /// `FormStart("(") Atom("eof") FormEnd(")")` triple, positioned at the
    /// end of input. On error nothing but the error is returned.
    pub fn tokenize(mut self) -> Result<Vec<Token<'a>>, LexError> {
        let span = debug_span!("tokenize", len = self.cursor.source_len());
        let _guard = span.enter();

        let mut state = Some(State::Start);
        while let Some(current) = state {
            state = match self.step(current) {
                Ok(next) => next,
                Err(err) => {
                    debug!(?current, %err, "tokenize failed");
                    return Err(err);
                }
            };
        }

        debug!(count = self.tokens.len(), "tokenize finished");
        Ok(self.tokens)
    }

    fn step(&mut self, state: State) -> Result<Option<State>, LexError> {
        let next = match state {
            State::Start => self.start(),
            State::Text => self.text()?,
            State::Form => self.form(),
            State::AfterFormOpen => self.after_form_open()?,
            State::Close => self.close(),
            State::Atom => self.atom()?,
            State::AfterItem => self.after_item(),
            State::Eof => {
                self.eof();
                return Ok(None);
            }
        };
        Ok(Some(next))
    }

    // ─── Dispatch States ────────────────────────────────────────────

    fn start(&mut self) -> State {
        self.cursor.eat_whitespace();
        if self.cursor.is_eof() {
            return State::Eof;
        }
        if self.cursor.current() == '(' {
            State::Form
        } else {
            State::Text
        }
    }

    fn after_form_open(&mut self) -> Result<State, LexError> {
        self.cursor.eat_whitespace();
        if self.cursor.is_eof() {
            return Ok(State::Eof);
        }
        match self.cursor.current() {
            '(' => Err(LexError::expected_atom_or_close(self.cursor.pos())),
            ')' => Ok(State::Close),
            _ => Ok(State::Atom),
        }
    }

    fn after_item(&mut self) -> State {
        self.cursor.eat_whitespace();
        if self.cursor.is_eof() {
            return State::Eof;
        }
        match self.cursor.current() {
            ')' => State::Close,
            '(' => State::Form,
            _ => State::Text,
        }
    }

    // ─── Emitting States ────────────────────────────────────────────

    fn text(&mut self) -> Result<State, LexError> {
        self.cursor.eat_whitespace();
        if self.cursor.is_eof() {
            return Ok(State::Eof);
        }

        let start = self.cursor;
        let mut scan = self.cursor;
        let mut quoted = false;
        loop {
            match scan.skip_to_text_delim() {
                '\\' => {
                    let backslash = scan.pos();
                    scan.advance();
                    match scan.current() {
                        '(' | ')' | '\\' => scan.advance(),
                        '+' => {
                            quoted = !quoted;
                            scan.advance();
                        }
                        _ if scan.is_eof() => return Err(LexError::invalid_escape(backslash, None)),
                        c => return Err(LexError::invalid_escape(backslash, Some(c))),
                    }
                }
                '(' | ')' if quoted => scan.advance(),
                // Unquoted paren or end of input.
                _ => break,
            }
        }

        self.emit(Token::text(scan.slice_from(start), start.pos()));
        self.cursor = scan;
        Ok(State::AfterItem)
    }

    fn form(&mut self) -> State {
        self.emit(Token::form_start(self.cursor.pos()));
        self.cursor.advance();
        State::AfterFormOpen
    }

    fn close(&mut self) -> State {
        self.emit(Token::form_end(self.cursor.pos()));
        self.cursor.advance();
        State::AfterItem
    }

    fn atom(&mut self) -> Result<State, LexError> {
        let start = self.cursor;
        self.cursor.eat_while(is_atom_char);
        if self.cursor.pos() == start.pos() {
            return Err(LexError::empty_atom(start.pos(), start.current()));
        }
        self.emit(Token::atom(self.cursor.slice_from(start), start.pos()));
        Ok(State::AfterItem)
    }

    fn eof(&mut self) {
        let pos = self.cursor.pos();
        self.emit(Token::form_start(pos));
        self.emit(Token::atom(EOF_ATOM, pos));
        self.emit(Token::form_end(pos));
    }

    #[inline]
    fn emit(&mut self, token: Token<'a>) {
        trace!(%token, "emit");
        self.tokens.push(token);
    }
}
