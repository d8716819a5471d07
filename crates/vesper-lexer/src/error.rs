use crate::position::Position;

/// What went wrong while scanning a lexeme.
///
/// `Display` gives the default English text. External reporters that
/// localize messages should key off [`LexErrorKind::id`] and
/// [`LexErrorKind::args`] instead of parsing the rendered string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("unterminated string")]
    UnterminatedString,
    #[error("unterminated interpolated string")]
    UnterminatedInterpolatedString,
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    #[error("invalid hex number '{0}'")]
    InvalidHexNumber(String),
    #[error("invalid binary number '{0}'")]
    InvalidBinaryNumber(String),
    #[error("invalid number: expected exponent in '{0}'")]
    MissingExponent(String),
    #[error("invalid integer '{0}'")]
    InvalidInteger(String),
    #[error("invalid float '{0}'")]
    InvalidFloat(String),
    #[error("expected variable name after '$'")]
    MissingVariableName,
    #[error("unexpected '..'")]
    UnexpectedDoubleDot,
}

impl LexErrorKind {
    /// Stable symbolic message id for catalog lookup.
    pub fn id(&self) -> &'static str {
        match self {
            LexErrorKind::UnexpectedCharacter(_) => "lex.unexpected_character",
            LexErrorKind::UnterminatedString => "lex.unterminated_string",
            LexErrorKind::UnterminatedInterpolatedString => "lex.unterminated_interpolated_string",
            LexErrorKind::UnterminatedBlockComment => "lex.unterminated_block_comment",
            LexErrorKind::InvalidHexNumber(_) => "lex.invalid_hex_number",
            LexErrorKind::InvalidBinaryNumber(_) => "lex.invalid_binary_number",
            LexErrorKind::MissingExponent(_) => "lex.missing_exponent",
            LexErrorKind::InvalidInteger(_) => "lex.invalid_integer",
            LexErrorKind::InvalidFloat(_) => "lex.invalid_float",
            LexErrorKind::MissingVariableName => "lex.missing_variable_name",
            LexErrorKind::UnexpectedDoubleDot => "lex.unexpected_double_dot",
        }
    }

    /// Positional parameters substituted into the catalog template.
    pub fn args(&self) -> Vec<String> {
        match self {
            LexErrorKind::UnexpectedCharacter(c) => vec![c.to_string()],
            LexErrorKind::InvalidHexNumber(text)
            | LexErrorKind::InvalidBinaryNumber(text)
            | LexErrorKind::MissingExponent(text)
            | LexErrorKind::InvalidInteger(text)
            | LexErrorKind::InvalidFloat(text) => vec![text.clone()],
            LexErrorKind::UnterminatedString
            | LexErrorKind::UnterminatedInterpolatedString
            | LexErrorKind::UnterminatedBlockComment
            | LexErrorKind::MissingVariableName
            | LexErrorKind::UnexpectedDoubleDot => Vec::new(),
        }
    }
}

/// Lexer error with position information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{position}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: Position,
}

impl LexError {
    pub fn new(kind: LexErrorKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
