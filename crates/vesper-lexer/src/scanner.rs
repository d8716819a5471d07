use std::sync::Arc;

use tracing::{debug, trace};

use crate::classify::{is_digit, is_ident_start, is_whitespace};
use crate::error::{LexError, LexErrorKind};
use crate::position::{Position, Tracker};
use crate::token::{Token, TokenKind, TokenValue};

mod ident;
mod number;
mod string;

/// Knobs that change what the scanner emits, not what it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Emit `Comment` tokens instead of dropping comments.
    pub keep_comments: bool,
    /// Return backslash-free string bodies as a direct slice copy.
    pub string_fast_path: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            keep_comments: false,
            string_fast_path: true,
        }
    }
}

/// Everything one scan produced.
///
/// `tokens` always ends with a single `Eof`; every entry in `diagnostics`
/// has a matching `Illegal` token.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput<'src> {
    pub tokens: Vec<Token<'src>>,
    pub diagnostics: Vec<LexError>,
}

impl<'src> ScanOutput<'src> {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Tokens if the scan was clean, otherwise every diagnostic.
    pub fn into_result(self) -> Result<Vec<Token<'src>>, Vec<LexError>> {
        if self.diagnostics.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.diagnostics)
        }
    }
}

/// Vesper source scanner.
///
/// Walks the source once, front to back. Each lexeme either becomes a
/// token or an `Illegal` token plus a diagnostic; scanning never stops
/// early on bad input.
pub struct Scanner<'src> {
    source: &'src str,
    filename: Arc<str>,
    options: ScanOptions,
    start: Tracker,
    cursor: Tracker,
    tokens: Vec<Token<'src>>,
    diagnostics: Vec<LexError>,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner for the given source.
    pub fn new(source: &'src str, filename: impl Into<Arc<str>>) -> Self {
        Self::with_options(source, filename, ScanOptions::default())
    }

    /// Create a scanner with explicit options.
    pub fn with_options(
        source: &'src str,
        filename: impl Into<Arc<str>>,
        options: ScanOptions,
    ) -> Self {
        Self {
            source,
            filename: filename.into(),
            options,
            start: Tracker::new(),
            cursor: Tracker::new(),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Scan the entire source with default options.
    pub fn tokenize(source: &'src str, filename: impl Into<Arc<str>>) -> ScanOutput<'src> {
        Scanner::new(source, filename).scan()
    }

    /// Run the scanner to the end of input.
    pub fn scan(mut self) -> ScanOutput<'src> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.start = self.cursor;
        self.emit(TokenKind::Eof);

        debug!(
            filename = %self.filename,
            tokens = self.tokens.len(),
            errors = self.diagnostics.len(),
            "scan complete"
        );

        ScanOutput {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    /// Scan one lexeme starting at the cursor.
    fn scan_token(&mut self) {
        self.start = self.cursor;
        let c = self.advance();

        match c {
            c if is_whitespace(c) => self.skip_whitespace(),
            '\n' => {}

            // Single-character punctuation
            '(' => self.emit(TokenKind::LParen),
            ')' => self.emit(TokenKind::RParen),
            '{' => self.emit(TokenKind::LBrace),
            '}' => self.emit(TokenKind::RBrace),
            '[' => self.emit(TokenKind::LBracket),
            ']' => self.emit(TokenKind::RBracket),
            ',' => self.emit(TokenKind::Comma),
            ';' => self.emit(TokenKind::Semicolon),
            '~' => self.emit(TokenKind::Tilde),
            '@' => self.emit(TokenKind::At),

            // Operators, longest match first
            '+' => {
                let kind = if self.matches('+') {
                    TokenKind::PlusPlus
                } else if self.matches('=') {
                    TokenKind::PlusAssign
                } else {
                    TokenKind::Plus
                };
                self.emit(kind);
            }
            '-' => {
                let kind = if self.matches('-') {
                    TokenKind::MinusMinus
                } else if self.matches('=') {
                    TokenKind::MinusAssign
                } else if self.matches('>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Minus
                };
                self.emit(kind);
            }
            '*' => self.emit_with_assign(TokenKind::Star, TokenKind::StarAssign),
            '%' => self.emit_with_assign(TokenKind::Percent, TokenKind::PercentAssign),
            '^' => self.emit_with_assign(TokenKind::Caret, TokenKind::CaretAssign),
            '!' => self.emit_with_assign(TokenKind::Bang, TokenKind::NotEq),
            '=' => {
                let kind = if self.matches('=') {
                    TokenKind::EqEq
                } else if self.matches('>') {
                    TokenKind::FatArrow
                } else {
                    TokenKind::Assign
                };
                self.emit(kind);
            }
            ':' => {
                let kind = if self.matches('=') {
                    TokenKind::Declare
                } else if self.matches(':') {
                    TokenKind::DoubleColon
                } else {
                    TokenKind::Colon
                };
                self.emit(kind);
            }
            '?' => {
                let kind = if self.matches('.') {
                    TokenKind::SafeNav
                } else if self.matches('?') {
                    TokenKind::NullCoalesce
                } else {
                    TokenKind::Question
                };
                self.emit(kind);
            }
            '<' => {
                let kind = if self.matches('<') {
                    if self.matches('=') {
                        TokenKind::ShlAssign
                    } else {
                        TokenKind::Shl
                    }
                } else if self.matches('=') {
                    TokenKind::LtEq
                } else {
                    TokenKind::Lt
                };
                self.emit(kind);
            }
            '>' => {
                let kind = if self.matches('>') {
                    if self.matches('=') {
                        TokenKind::ShrAssign
                    } else {
                        TokenKind::Shr
                    }
                } else if self.matches('=') {
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                };
                self.emit(kind);
            }
            '&' => {
                let kind = if self.matches('&') {
                    TokenKind::AndAnd
                } else if self.matches('=') {
                    TokenKind::AmpAssign
                } else {
                    TokenKind::Amp
                };
                self.emit(kind);
            }
            '|' => {
                let kind = if self.matches('|') {
                    TokenKind::OrOr
                } else if self.matches('=') {
                    TokenKind::PipeAssign
                } else {
                    TokenKind::Pipe
                };
                self.emit(kind);
            }
            '.' => self.scan_dot(),
            '/' => self.scan_slash(),

            // Literals
            '"' | '\'' => self.scan_string(c),
            '#' => {
                if self.matches('"') {
                    self.scan_interpolated_string();
                } else {
                    self.emit(TokenKind::Hash);
                }
            }
            '$' => self.scan_variable(),
            c if is_digit(c) => self.scan_number(c),
            c if is_ident_start(c) => self.scan_identifier(),

            c => self.error(LexErrorKind::UnexpectedCharacter(c)),
        }
    }

    // --- Operators and comments ---

    /// `...` is the only token starting with two dots.
    fn scan_dot(&mut self) {
        if self.matches('.') {
            if self.matches('.') {
                self.emit(TokenKind::Ellipsis);
            } else {
                self.error(LexErrorKind::UnexpectedDoubleDot);
            }
        } else {
            self.emit(TokenKind::Dot);
        }
    }

    fn scan_slash(&mut self) {
        if self.matches('/') {
            self.scan_line_comment();
        } else if self.matches('*') {
            self.scan_block_comment();
        } else {
            self.emit_with_assign(TokenKind::Slash, TokenKind::SlashAssign);
        }
    }

    /// Skip to the end of the line. The newline itself stays for the main loop.
    fn scan_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
        self.emit_comment();
    }

    /// Block comments nest: `/* a /* b */ c */` is one comment.
    fn scan_block_comment(&mut self) {
        let mut depth = 1usize;

        while depth > 0 {
            if self.is_at_end() {
                self.error(LexErrorKind::UnterminatedBlockComment);
                return;
            }
            let c = self.advance();
            if c == '/' && self.matches('*') {
                depth += 1;
            } else if c == '*' && self.matches('/') {
                depth -= 1;
            }
        }

        self.emit_comment();
    }

    fn skip_whitespace(&mut self) {
        while is_whitespace(self.peek()) {
            self.advance();
        }
    }

    // --- Token construction ---

    fn emit(&mut self, kind: TokenKind) {
        self.emit_value(kind, TokenValue::None);
    }

    fn emit_value(&mut self, kind: TokenKind, value: TokenValue) {
        let token = Token::new(kind, self.lexeme(), value, self.start_position());
        self.tokens.push(token);
    }

    /// `op` or `op=`.
    fn emit_with_assign(&mut self, plain: TokenKind, assign: TokenKind) {
        let kind = if self.matches('=') { assign } else { plain };
        self.emit(kind);
    }

    fn emit_comment(&mut self) {
        if self.options.keep_comments {
            self.emit(TokenKind::Comment);
        }
    }

    /// Record a diagnostic for the current lexeme and emit an `Illegal`
    /// token covering whatever was consumed.
    fn error(&mut self, kind: LexErrorKind) {
        let position = self.start_position();
        trace!(
            filename = %self.filename,
            line = position.line,
            column = position.column,
            id = kind.id(),
            "lexical error"
        );
        self.emit(TokenKind::Illegal);
        self.diagnostics.push(LexError::new(kind, position));
    }

    // --- Helpers ---

    fn lexeme(&self) -> &'src str {
        &self.source[self.start.offset..self.cursor.offset]
    }

    fn start_position(&self) -> Position {
        self.start.position(&self.filename)
    }

    fn rest(&self) -> &'src str {
        &self.source[self.cursor.offset..]
    }

    fn peek(&self) -> char {
        self.rest().chars().next().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        self.rest().chars().nth(1).unwrap_or('\0')
    }

    /// Consume and return the current character (`'\0'` at end of input).
    fn advance(&mut self) -> char {
        match self.rest().chars().next() {
            Some(c) => {
                self.cursor.advance(c);
                c
            }
            None => '\0',
        }
    }

    /// Consume every character of `text`, which must start at the cursor.
    fn advance_over(&mut self, text: &str) {
        for c in text.chars() {
            self.cursor.advance(c);
        }
    }

    /// Consume the current character if it is `expected`.
    fn matches(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    fn is_at_end(&self) -> bool {
        self.cursor.offset >= self.source.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Helper: scan and return token kinds.
    fn kinds(source: &str) -> Vec<TokenKind> {
        Scanner::tokenize(source, "test.vsp")
            .tokens
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn scan(source: &str) -> ScanOutput<'_> {
        Scanner::tokenize(source, "test.vsp")
    }

    fn messages(source: &str) -> Vec<String> {
        scan(source).diagnostics.iter().map(LexError::message).collect()
    }

    // =========================================================================
    // Structure: empty input, whitespace, EOF
    // =========================================================================

    #[test]
    fn test_empty_source() {
        let out = scan("");
        assert_eq!(out.tokens.len(), 1);
        assert!(out.tokens[0].is_eof());
        assert_eq!(out.tokens[0].position.offset, 0);
        assert!(!out.has_errors());
    }

    #[test]
    fn test_whitespace_only() {
        let out = scan("  \t\r\n \n");
        assert_eq!(kinds("  \t\r\n \n"), vec![TokenKind::Eof]);
        let eof = &out.tokens[0];
        assert_eq!(eof.position.line, 3);
        assert_eq!(eof.position.column, 1);
        assert_eq!(eof.position.offset, 7);
    }

    #[test]
    fn test_eof_lexeme_is_empty() {
        let out = scan("x");
        assert_eq!(out.tokens.last().unwrap().lexeme, "");
        assert_eq!(out.tokens.last().unwrap().position.column, 2);
    }

    // =========================================================================
    // Operators and punctuation
    // =========================================================================

    #[test]
    fn test_single_character_punctuation() {
        assert_eq!(
            kinds("( ) { } [ ] , ; ~ @"),
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Tilde,
                TokenKind::At,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_plus_family() {
        assert_eq!(
            kinds("+ ++ += +++"),
            vec![
                TokenKind::Plus,
                TokenKind::PlusPlus,
                TokenKind::PlusAssign,
                TokenKind::PlusPlus,
                TokenKind::Plus,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_minus_family() {
        assert_eq!(
            kinds("- -- -= ->"),
            vec![
                TokenKind::Minus,
                TokenKind::MinusMinus,
                TokenKind::MinusAssign,
                TokenKind::Arrow,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_equals_colon_question() {
        assert_eq!(
            kinds("= == => : := :: ? ?. ??"),
            vec![
                TokenKind::Assign,
                TokenKind::EqEq,
                TokenKind::FatArrow,
                TokenKind::Colon,
                TokenKind::Declare,
                TokenKind::DoubleColon,
                TokenKind::Question,
                TokenKind::SafeNav,
                TokenKind::NullCoalesce,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_shift_and_comparison() {
        assert_eq!(
            kinds("< <= << <<= > >= >> >>="),
            vec![
                TokenKind::Lt,
                TokenKind::LtEq,
                TokenKind::Shl,
                TokenKind::ShlAssign,
                TokenKind::Gt,
                TokenKind::GtEq,
                TokenKind::Shr,
                TokenKind::ShrAssign,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_logical_and_bitwise() {
        assert_eq!(
            kinds("& && &= | || |= ^ ^= ! !="),
            vec![
                TokenKind::Amp,
                TokenKind::AndAnd,
                TokenKind::AmpAssign,
                TokenKind::Pipe,
                TokenKind::OrOr,
                TokenKind::PipeAssign,
                TokenKind::Caret,
                TokenKind::CaretAssign,
                TokenKind::Bang,
                TokenKind::NotEq,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_compound_arithmetic_assign() {
        assert_eq!(
            kinds("*= /= %="),
            vec![
                TokenKind::StarAssign,
                TokenKind::SlashAssign,
                TokenKind::PercentAssign,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_operators_without_spaces() {
        assert_eq!(
            kinds("a?.b??c"),
            vec![
                TokenKind::Ident,
                TokenKind::SafeNav,
                TokenKind::Ident,
                TokenKind::NullCoalesce,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_hash_alone() {
        assert_eq!(
            kinds("#[x]"),
            vec![
                TokenKind::Hash,
                TokenKind::LBracket,
                TokenKind::Ident,
                TokenKind::RBracket,
                TokenKind::Eof,
            ]
        );
    }

    // =========================================================================
    // Dots and ellipsis
    // =========================================================================

    #[test]
    fn test_ellipsis() {
        assert_eq!(
            kinds("...$rest"),
            vec![TokenKind::Ellipsis, TokenKind::Variable, TokenKind::Eof]
        );
    }

    #[test]
    fn test_double_dot_is_an_error() {
        let out = scan("a..b");
        let k: Vec<_> = out.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            k,
            vec![
                TokenKind::Ident,
                TokenKind::Illegal,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
        assert_eq!(out.tokens[1].lexeme, "..");
        assert_eq!(messages("a..b"), vec!["unexpected '..'".to_string()]);
    }

    #[test]
    fn test_four_dots() {
        assert_eq!(
            kinds("...."),
            vec![TokenKind::Ellipsis, TokenKind::Dot, TokenKind::Eof]
        );
    }

    // =========================================================================
    // Comments
    // =========================================================================

    #[test]
    fn test_line_comment_is_skipped() {
        assert_eq!(
            kinds("a // comment ++ \"x\nb"),
            vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]
        );
    }

    #[test]
    fn test_line_comment_keeps_newline_for_line_count() {
        let out = scan("// one\nx");
        assert_eq!(out.tokens[0].position.line, 2);
        assert_eq!(out.tokens[0].position.column, 1);
    }

    #[test]
    fn test_line_comment_at_eof() {
        assert_eq!(kinds("x //"), vec![TokenKind::Ident, TokenKind::Eof]);
    }

    #[test]
    fn test_block_comment_spanning_lines() {
        let out = scan("/* a\n b\n */ y");
        assert_eq!(out.tokens[0].kind, TokenKind::Ident);
        assert_eq!(out.tokens[0].position.line, 3);
        assert_eq!(out.tokens[0].position.column, 5);
    }

    #[test]
    fn test_nested_block_comment() {
        assert_eq!(kinds("/* a /* b /* c */ */ */x"), vec![TokenKind::Ident, TokenKind::Eof]);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let out = scan("x /* never /* closed */");
        let k: Vec<_> = out.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(k, vec![TokenKind::Ident, TokenKind::Illegal, TokenKind::Eof]);
        assert_eq!(out.tokens[1].lexeme, "/* never /* closed */");
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].kind, LexErrorKind::UnterminatedBlockComment);
        assert_eq!(out.diagnostics[0].position.column, 3);
    }

    #[test]
    fn test_slash_is_still_division() {
        assert_eq!(
            kinds("a / b"),
            vec![
                TokenKind::Ident,
                TokenKind::Slash,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keep_comments_option() {
        let options = ScanOptions {
            keep_comments: true,
            ..ScanOptions::default()
        };
        let out = Scanner::with_options("a // note\n/* b */", "test.vsp", options).scan();
        let k: Vec<_> = out.tokens.iter().map(|t| (t.kind, t.lexeme)).collect();
        assert_eq!(
            k,
            vec![
                (TokenKind::Ident, "a"),
                (TokenKind::Comment, "// note"),
                (TokenKind::Comment, "/* b */"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    // =========================================================================
    // Positions
    // =========================================================================

    #[test]
    fn test_positions_across_lines() {
        let out = scan("let x\n  := 42;");
        let pos: Vec<_> = out
            .tokens
            .iter()
            .map(|t| (t.position.line, t.position.column, t.position.offset))
            .collect();
        assert_eq!(
            pos,
            vec![(1, 1, 0), (1, 5, 4), (2, 3, 8), (2, 6, 11), (2, 8, 13), (2, 9, 14)]
        );
    }

    #[test]
    fn test_columns_count_code_points() {
        let out = scan("\"héllo\" x");
        assert_eq!(out.tokens[1].position.column, 9);
        assert_eq!(out.tokens[1].position.offset, 9);
    }

    #[test]
    fn test_filename_is_carried() {
        let out = Scanner::tokenize("x", "src/app.vsp");
        assert_eq!(&*out.tokens[0].position.filename, "src/app.vsp");
    }

    // =========================================================================
    // Error recovery
    // =========================================================================

    #[test]
    fn test_unexpected_character() {
        let out = scan("a ` b");
        let k: Vec<_> = out.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            k,
            vec![
                TokenKind::Ident,
                TokenKind::Illegal,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
        assert_eq!(out.diagnostics[0].kind, LexErrorKind::UnexpectedCharacter('`'));
        assert_eq!(out.diagnostics[0].position.column, 3);
    }

    #[test]
    fn test_unexpected_multibyte_character() {
        let out = scan("€x");
        assert_eq!(out.tokens[0].lexeme, "€");
        assert_eq!(out.tokens[1].position.offset, "€".len());
        assert_eq!(out.tokens[1].position.column, 2);
    }

    #[test]
    fn test_every_error_is_reported() {
        let out = scan("` $ 0x .. \"open");
        assert_eq!(out.diagnostics.len(), 5);
        let illegal = out.tokens.iter().filter(|t| t.is_illegal()).count();
        assert_eq!(illegal, 5);
        assert!(out.tokens.last().unwrap().is_eof());
    }

    #[test]
    fn test_into_result() {
        assert!(scan("let x = 1;").into_result().is_ok());
        let errs = scan("`").into_result().unwrap_err();
        assert_eq!(errs.len(), 1);
    }
}
