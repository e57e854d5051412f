//! Code-point cursor over the tokenizer input.
//!
//! The cursor walks a `&str` one character at a time and tracks two offsets:
//! the byte offset (for slicing token text out of the input without copying)
//! and the code-point index (what token positions are reported in).
//!
//! # End of Input
//!
//! [`Cursor::current()`] returns `'\0'` once the input is exhausted, so
//! classification predicates terminate naturally at the end. An interior
//! NUL character also reads as `'\0'`; use [`Cursor::is_eof()`] to tell the
//! two apart.

/// Returns `true` for the characters the notation treats as whitespace.
///
/// Exactly space, `\n`, `\r`, `\t`, vertical tab and form feed. Other
/// control characters and Unicode spaces are ordinary text.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\r' | '\t' | '\u{0B}' | '\u{0C}')
}

/// Returns `true` for characters allowed inside an atom: `a-z`, `0-9`, `-`.
#[inline]
pub fn is_atom_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

/// Cursor over the tokenizer input.
///
/// The cursor is [`Copy`], so a scan can run ahead on a copy and either be
/// committed by assignment or discarded.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    /// Current byte offset into `src`. Always on a char boundary.
    byte: usize,
    /// Current code-point index.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `src`.
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            byte: 0,
            pos: 0,
        }
    }

    /// Returns the character at the current position, or `'\0'` at EOF.
    #[inline]
    pub fn current(&self) -> char {
        self.rest().chars().next().unwrap_or('\0')
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.byte >= self.src.len()
    }

    /// Current code-point index.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the input in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.src.len()
    }

    /// Consume one character. Does nothing at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.byte += c.len_utf8();
            self.pos += 1;
        }
    }

    /// Advance while `pred` holds for the current character.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Advance past whitespace as defined by [`is_whitespace`].
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Advance past ordinary text content to the next interesting character.
    /// Returns the character found, or `'\0'` for EOF.
    ///
    /// "Interesting" characters for text: `(`, `)`, `\`. All three are ASCII,
    /// so the byte found by `memchr3` always starts a character; the skipped
    /// span is counted in code points to keep `pos` accurate.
    pub fn skip_to_text_delim(&mut self) -> char {
        let rest = self.rest();
        match memchr::memchr3(b'(', b')', b'\\', rest.as_bytes()) {
            Some(off) => {
                self.pos += rest[..off].chars().count();
                self.byte += off;
                self.current()
            }
            None => {
                self.pos += rest.chars().count();
                self.byte = self.src.len();
                '\0'
            }
        }
    }

    /// Extract the input between two byte offsets.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the input and on char boundaries. This
    /// holds whenever both offsets come from cursor snapshots.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.src.len(),
            "slice end {end} exceeds source length {}",
            self.src.len()
        );
        &self.src[start..end]
    }

    /// Extract the input from a saved cursor up to the current position.
    pub fn slice_from(&self, start: Cursor<'a>) -> &'a str {
        self.slice(start.byte, self.byte)
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.src[self.byte..]
    }
}
