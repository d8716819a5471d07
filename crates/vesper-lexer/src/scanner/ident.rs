//! Identifiers, keywords and `$` variables.

use super::Scanner;
use crate::classify::is_ident_continue;
use crate::error::LexErrorKind;
use crate::token::{lookup_keyword, TokenKind};

impl<'src> Scanner<'src> {
    /// Scan an identifier or keyword; the first character has been consumed.
    pub(super) fn scan_identifier(&mut self) {
        while is_ident_continue(self.peek()) {
            self.advance();
        }

        let kind = match lookup_keyword(self.lexeme()) {
            // `as?` is the only keyword that absorbs the next character.
            Some(TokenKind::As) if self.peek() == '?' => {
                self.advance();
                TokenKind::AsSafe
            }
            Some(kind) => kind,
            None => TokenKind::Ident,
        };
        self.emit(kind);
    }

    /// Scan `$name`; the `$` has been consumed. `$this` is the `This` keyword.
    pub(super) fn scan_variable(&mut self) {
        if !is_ident_continue(self.peek()) {
            self.error(LexErrorKind::MissingVariableName);
            return;
        }
        while is_ident_continue(self.peek()) {
            self.advance();
        }

        let kind = if self.lexeme() == "$this" {
            TokenKind::This
        } else {
            TokenKind::Variable
        };
        self.emit(kind);
    }
}
