//! Printable rendering of token text for diagnostics and logs.
//!
//! Printable ASCII passes through unchanged. Everything else is replaced by
//! a visible marker so a token dump never emits raw control bytes:
//!
//! - C0 controls with a conventional escape render as that escape (`\n`, `\t`, ...)
//! - the remaining C0 controls render as their bracketed name (`<NUL>`, `<ESC>`, ...)
//! - DEL renders as `<DEL>`
//! - anything outside ASCII renders as `<U+XXXX>`
//!
//! The rendering is lossy and never part of a token's `text`.

/// Markers for code points `0x00..=0x1F`, indexed by code point.
const C0_MARKERS: [&str; 32] = [
    "<NUL>", "<SOH>", "<STX>", "<ETX>", "<EOT>", "<ENQ>", "<ACK>", "\\a", // 0x00-0x07
    "\\b", "\\t", "\\n", "\\v", "\\f", "\\r", "<SO>", "<SI>", // 0x08-0x0F
    "<DLE>", "<DC1>", "<DC2>", "<DC3>", "<DC4>", "<NAK>", "<SYN>", "<ETB>", // 0x10-0x17
    "<CAN>", "<EM>", "<SUB>", "<ESC>", "<FS>", "<GS>", "<RS>", "<US>", // 0x18-0x1F
];

/// Append the visible form of `c` to `out`.
pub fn push_visible_char(out: &mut String, c: char) {
    match c {
        ' '..='~' => out.push(c),
        '\u{00}'..='\u{1F}' => out.push_str(C0_MARKERS[c as usize]),
        '\u{7F}' => out.push_str("<DEL>"),
        _ => out.push_str(&format!("<U+{:04X}>", u32::from(c))),
    }
}

/// Render `s` with every non-printable code point made visible.
pub fn visible(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        push_visible_char(&mut out, c);
    }
    out
}
