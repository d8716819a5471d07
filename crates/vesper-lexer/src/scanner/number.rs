//! Numeric literals: hex, binary, decimal integers and floats.

use super::Scanner;
use crate::classify::{is_binary_digit, is_digit, is_hex_digit};
use crate::error::LexErrorKind;
use crate::token::{TokenKind, TokenValue};

impl<'src> Scanner<'src> {
    /// Scan a number whose first digit has already been consumed.
    pub(super) fn scan_number(&mut self, first: char) {
        if first == '0' {
            if self.matches('x') || self.matches('X') {
                self.scan_radix(16, is_hex_digit, LexErrorKind::InvalidHexNumber);
                return;
            }
            if self.matches('b') || self.matches('B') {
                self.scan_radix(2, is_binary_digit, LexErrorKind::InvalidBinaryNumber);
                return;
            }
        }
        self.scan_decimal();
    }

    /// Digits after a two-character radix prefix. An empty digit run, a
    /// decimal digit outside the radix or a value outside `i64` is reported
    /// with the literal text.
    fn scan_radix(
        &mut self,
        radix: u32,
        is_radix_digit: fn(char) -> bool,
        invalid: fn(String) -> LexErrorKind,
    ) {
        while is_radix_digit(self.peek()) {
            self.advance();
        }
        // `0b102` is one malformed literal, not `0b10` followed by `2`.
        self.consume_digits();

        let text = self.lexeme();
        match i64::from_str_radix(&text[2..], radix) {
            Ok(value) => self.emit_value(TokenKind::Int, TokenValue::Integer(value)),
            Err(_) => self.error(invalid(text.to_string())),
        }
    }

    fn scan_decimal(&mut self) {
        self.consume_digits();
        let mut is_float = false;

        // `5.` only continues the literal when a digit follows: `5.foo` is
        // an integer, a dot and an identifier.
        if self.peek() == '.' && is_digit(self.peek_next()) {
            self.advance();
            self.consume_digits();
            is_float = true;
        }

        if self.matches('e') || self.matches('E') {
            if !self.matches('+') {
                self.matches('-');
            }
            if !is_digit(self.peek()) {
                let text = self.lexeme().to_string();
                self.error(LexErrorKind::MissingExponent(text));
                return;
            }
            self.consume_digits();
            is_float = true;
        }

        let text = self.lexeme();
        if is_float {
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    self.emit_value(TokenKind::Float, TokenValue::Float(value));
                }
                _ => self.error(LexErrorKind::InvalidFloat(text.to_string())),
            }
        } else {
            match text.parse::<i64>() {
                Ok(value) => self.emit_value(TokenKind::Int, TokenValue::Integer(value)),
                Err(_) => self.error(LexErrorKind::InvalidInteger(text.to_string())),
            }
        }
    }

    fn consume_digits(&mut self) {
        while is_digit(self.peek()) {
            self.advance();
        }
    }
}
