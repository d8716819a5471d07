//! Character classes used by the scanner.

/// ASCII decimal digit. Numbers never start with non-ASCII digits.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

pub fn is_binary_digit(c: char) -> bool {
    c == '0' || c == '1'
}

/// First character of an identifier: any Unicode letter or `_`.
pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Subsequent identifier characters: letters, digits, `_`.
pub fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Horizontal whitespace skipped between tokens. Newlines are handled
/// separately because they move the line counter.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}
