//! Double-quoted string literals in the form the surface uses for struct tags.
//!
//! The escaping matches Go's `strconv.Quote`, so a tag renders the same whichever front-end produced the model:
//! printable characters are kept as-is (including non-ASCII), the usual C escapes are used where they exist, and
//! everything else becomes `\xHH`, `\uHHHH` or `\UHHHHHHHH` with lowercase hex digits.

use std::fmt::Write;

/// Quote `s` as a double-quoted literal.
///
/// ## Examples
/// ```rust
/// use apisurface_core::quote;
///
/// assert_eq!(quote(r#"json:"b""#), r#""json:\"b\"""#);
/// assert_eq!(quote("tab\there"), r#""tab\there""#);
/// assert_eq!(quote("\u{7f}"), r#""\x7f""#);
/// ```
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if is_printable(c) => out.push(c),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            c if c < ' ' || c == '\u{7f}' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if (c as u32) < 0x10000 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => {
                let _ = write!(out, "\\U{:08x}", c as u32);
            }
        }
    }
    out.push('"');
    out
}

/// Letters, marks, numbers, punctuation, symbols and the ASCII space.
///
/// After a leading character, `str::escape_debug` escapes exactly the other categories (controls, format and
/// private-use characters, separators other than `' '`, unassigned code points), so anything it leaves alone is
/// printable.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_ascii() {
        return c.is_ascii_graphic();
    }
    let mut probe = [0u8; 8];
    probe[0] = b'a';
    let len = 1 + c.encode_utf8(&mut probe[1..]).len();
    let Ok(text) = std::str::from_utf8(&probe[..len]) else {
        return false;
    };
    text.escape_debug().eq(text.chars())
}
