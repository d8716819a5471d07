//! Vesper Lexer
//!
//! Turns Vesper source text into a stream of positioned tokens.
//! Handles the operator alphabet, hex/binary/decimal/float numbers,
//! quoted and `#"..."` interpolated strings, `$` variables, keywords and
//! nested block comments. Malformed input never aborts the scan: each bad
//! lexeme becomes an `Illegal` token plus a [`LexError`].
//!
//! # Example
//!
//! ```
//! use vesper_lexer::{Scanner, TokenKind};
//!
//! let out = Scanner::tokenize("", "main.vsp");
//! assert_eq!(out.tokens.len(), 1); // Just EOF
//! assert_eq!(out.tokens[0].kind, TokenKind::Eof);
//! assert!(out.diagnostics.is_empty());
//! ```

pub mod classify;
pub mod error;
pub mod position;
pub mod scanner;
pub mod token;

use std::sync::Arc;

pub use error::{LexError, LexErrorKind};
pub use position::{Position, Span};
pub use scanner::{ScanOptions, ScanOutput, Scanner};
pub use token::{lookup_keyword, Token, TokenKind, TokenValue};

/// Scan `source` with default options.
pub fn scan<'src>(source: &'src str, filename: impl Into<Arc<str>>) -> ScanOutput<'src> {
    Scanner::tokenize(source, filename)
}
