//! Quoted strings and `#"..."` interpolated strings.

use super::Scanner;
use crate::error::LexErrorKind;
use crate::token::{TokenKind, TokenValue};

/// Decode the character after a backslash. Unknown escapes yield the
/// escaped character itself.
fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        '0' => '\0',
        other => other,
    }
}

impl<'src> Scanner<'src> {
    /// Scan a string literal whose opening `quote` has been consumed.
    pub(super) fn scan_string(&mut self, quote: char) {
        if self.options.string_fast_path && self.scan_raw_string(quote) {
            return;
        }

        let mut value = String::new();
        loop {
            if self.is_at_end() || self.peek() == '\n' {
                self.error(LexErrorKind::UnterminatedString);
                return;
            }
            match self.advance() {
                c if c == quote => break,
                '\\' => {
                    if self.is_at_end() || self.peek() == '\n' {
                        self.error(LexErrorKind::UnterminatedString);
                        return;
                    }
                    let escaped = self.advance();
                    value.push(unescape(escaped));
                }
                c => value.push(c),
            }
        }

        self.emit_value(TokenKind::String, TokenValue::String(value));
    }

    /// Emit the body as-is when the closing quote comes before any
    /// backslash or newline. Consumes nothing and returns `false` otherwise.
    fn scan_raw_string(&mut self, quote: char) -> bool {
        let rest = self.rest();
        let Some(end) = rest.find(|c: char| c == quote || c == '\\' || c == '\n') else {
            return false;
        };
        if !rest[end..].starts_with(quote) {
            return false;
        }

        let body = &rest[..end];
        self.advance_over(body);
        self.advance();
        self.emit_value(TokenKind::String, TokenValue::String(body.to_string()));
        true
    }

    /// Scan an interpolated string; `#"` has been consumed.
    ///
    /// `{...}` regions are copied verbatim, nested braces included. Outside
    /// them the usual escapes apply, except that `\{` and `\}` stay escaped
    /// so the interpolation stage can tell them from region delimiters.
    pub(super) fn scan_interpolated_string(&mut self) {
        let mut value = String::new();
        let mut depth = 0usize;

        loop {
            if self.is_at_end() || self.peek() == '\n' {
                self.error(LexErrorKind::UnterminatedInterpolatedString);
                return;
            }
            let c = self.advance();

            if depth > 0 {
                match c {
                    '{' => depth += 1,
                    '}' => depth -= 1,
                    _ => {}
                }
                value.push(c);
                continue;
            }

            match c {
                '"' => break,
                '{' => {
                    depth = 1;
                    value.push(c);
                }
                '\\' => {
                    if self.is_at_end() || self.peek() == '\n' {
                        self.error(LexErrorKind::UnterminatedInterpolatedString);
                        return;
                    }
                    match self.advance() {
                        brace @ ('{' | '}') => {
                            value.push('\\');
                            value.push(brace);
                        }
                        escaped => value.push(unescape(escaped)),
                    }
                }
                _ => value.push(c),
            }
        }

        self.emit_value(TokenKind::InterpolatedString, TokenValue::String(value));
    }
}
