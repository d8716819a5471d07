use std::fmt;

use crate::position::{Position, Span, Tracker};

/// Token classification for Vesper source.
///
/// Fieldless so the parser can match and compare kinds cheaply; literal
/// payloads live in [`TokenValue`]. Ordering follows declaration order,
/// which the category helpers rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    // Sentinels
    Illegal,
    Eof,
    Comment,

    // Literals
    Ident,
    Variable,
    Int,
    Float,
    String,
    InterpolatedString,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,

    // Assignment
    Assign,
    Declare,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
    PercentAssign,
    AmpAssign,
    PipeAssign,
    CaretAssign,
    ShlAssign,
    ShrAssign,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    AndAnd,
    OrOr,
    Bang,

    // Bitwise and shifts
    Amp,
    Pipe,
    Caret,
    Tilde,
    Shl,
    Shr,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Dot,
    Semicolon,
    Colon,
    Question,
    Arrow,
    FatArrow,
    DoubleColon,
    Ellipsis,
    SafeNav,
    NullCoalesce,
    At,
    Hash,

    // Keywords: type names
    IntType,
    FloatType,
    StringType,
    BoolType,
    VoidType,
    AnyType,
    MixedType,
    ArrayType,
    ObjectType,
    CallableType,
    IterableType,

    // Keywords: values
    True,
    False,
    Null,

    // Keywords: declarations
    Let,
    Const,
    Var,
    Fn,
    Function,
    Class,
    Interface,
    Trait,
    Enum,
    Struct,
    Namespace,
    Extends,
    Implements,
    New,
    Static,
    Abstract,
    Final,
    Readonly,

    // Keywords: access control
    Public,
    Private,
    Protected,
    Internal,

    // Keywords: control flow
    If,
    Else,
    ElseIf,
    While,
    For,
    Foreach,
    In,
    Do,
    Switch,
    Case,
    Default,
    Match,
    Break,
    Continue,
    Return,
    Yield,

    // Keywords: exceptions
    Try,
    Catch,
    Finally,
    Throw,

    // Keywords: miscellaneous
    As,
    AsSafe,
    This,
    SelfKw,
    Parent,
    Use,
    Map,
    Where,
    Type,
    Get,
    Set,
    Instanceof,
    Is,
    Import,
    Export,
}

impl TokenKind {
    /// Fixed source spelling of the kind, or a descriptive name for
    /// kinds whose text varies.
    pub fn as_str(self) -> &'static str {
        use TokenKind::*;
        match self {
            Illegal => "illegal token",
            Eof => "end of file",
            Comment => "comment",
            Ident => "identifier",
            Variable => "variable",
            Int => "integer literal",
            Float => "float literal",
            String => "string literal",
            InterpolatedString => "interpolated string",
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Percent => "%",
            PlusPlus => "++",
            MinusMinus => "--",
            Assign => "=",
            Declare => ":=",
            PlusAssign => "+=",
            MinusAssign => "-=",
            StarAssign => "*=",
            SlashAssign => "/=",
            PercentAssign => "%=",
            AmpAssign => "&=",
            PipeAssign => "|=",
            CaretAssign => "^=",
            ShlAssign => "<<=",
            ShrAssign => ">>=",
            EqEq => "==",
            NotEq => "!=",
            Lt => "<",
            LtEq => "<=",
            Gt => ">",
            GtEq => ">=",
            AndAnd => "&&",
            OrOr => "||",
            Bang => "!",
            Amp => "&",
            Pipe => "|",
            Caret => "^",
            Tilde => "~",
            Shl => "<<",
            Shr => ">>",
            LParen => "(",
            RParen => ")",
            LBrace => "{",
            RBrace => "}",
            LBracket => "[",
            RBracket => "]",
            Comma => ",",
            Dot => ".",
            Semicolon => ";",
            Colon => ":",
            Question => "?",
            Arrow => "->",
            FatArrow => "=>",
            DoubleColon => "::",
            Ellipsis => "...",
            SafeNav => "?.",
            NullCoalesce => "??",
            At => "@",
            Hash => "#",
            IntType => "int",
            FloatType => "float",
            StringType => "string",
            BoolType => "bool",
            VoidType => "void",
            AnyType => "any",
            MixedType => "mixed",
            ArrayType => "array",
            ObjectType => "object",
            CallableType => "callable",
            IterableType => "iterable",
            True => "true",
            False => "false",
            Null => "null",
            Let => "let",
            Const => "const",
            Var => "var",
            Fn => "fn",
            Function => "function",
            Class => "class",
            Interface => "interface",
            Trait => "trait",
            Enum => "enum",
            Struct => "struct",
            Namespace => "namespace",
            Extends => "extends",
            Implements => "implements",
            New => "new",
            Static => "static",
            Abstract => "abstract",
            Final => "final",
            Readonly => "readonly",
            Public => "public",
            Private => "private",
            Protected => "protected",
            Internal => "internal",
            If => "if",
            Else => "else",
            ElseIf => "elseif",
            While => "while",
            For => "for",
            Foreach => "foreach",
            In => "in",
            Do => "do",
            Switch => "switch",
            Case => "case",
            Default => "default",
            Match => "match",
            Break => "break",
            Continue => "continue",
            Return => "return",
            Yield => "yield",
            Try => "try",
            Catch => "catch",
            Finally => "finally",
            Throw => "throw",
            As => "as",
            AsSafe => "as?",
            This => "$this",
            SelfKw => "self",
            Parent => "parent",
            Use => "use",
            Map => "map",
            Where => "where",
            Type => "type",
            Get => "get",
            Set => "set",
            Instanceof => "instanceof",
            Is => "is",
            Import => "import",
            Export => "export",
        }
    }

    pub fn is_keyword(self) -> bool {
        self >= TokenKind::IntType
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::Variable
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::InterpolatedString
        )
    }

    /// Operators and punctuation.
    pub fn is_operator(self) -> bool {
        self >= TokenKind::Plus && self <= TokenKind::Hash
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify identifier text as a keyword.
///
/// `as?` and `$this` are not reachable through here; the scanner merges
/// them with lookahead.
pub fn lookup_keyword(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "int" => TokenKind::IntType,
        "float" => TokenKind::FloatType,
        "string" => TokenKind::StringType,
        "bool" => TokenKind::BoolType,
        "void" => TokenKind::VoidType,
        "any" => TokenKind::AnyType,
        "mixed" => TokenKind::MixedType,
        "array" => TokenKind::ArrayType,
        "object" => TokenKind::ObjectType,
        "callable" => TokenKind::CallableType,
        "iterable" => TokenKind::IterableType,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "null" => TokenKind::Null,
        "let" => TokenKind::Let,
        "const" => TokenKind::Const,
        "var" => TokenKind::Var,
        "fn" => TokenKind::Fn,
        "function" => TokenKind::Function,
        "class" => TokenKind::Class,
        "interface" => TokenKind::Interface,
        "trait" => TokenKind::Trait,
        "enum" => TokenKind::Enum,
        "struct" => TokenKind::Struct,
        "namespace" => TokenKind::Namespace,
        "extends" => TokenKind::Extends,
        "implements" => TokenKind::Implements,
        "new" => TokenKind::New,
        "static" => TokenKind::Static,
        "abstract" => TokenKind::Abstract,
        "final" => TokenKind::Final,
        "readonly" => TokenKind::Readonly,
        "public" => TokenKind::Public,
        "private" => TokenKind::Private,
        "protected" => TokenKind::Protected,
        "internal" => TokenKind::Internal,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "elseif" => TokenKind::ElseIf,
        "while" => TokenKind::While,
        "for" => TokenKind::For,
        "foreach" => TokenKind::Foreach,
        "in" => TokenKind::In,
        "do" => TokenKind::Do,
        "switch" => TokenKind::Switch,
        "case" => TokenKind::Case,
        "default" => TokenKind::Default,
        "match" => TokenKind::Match,
        "break" => TokenKind::Break,
        "continue" => TokenKind::Continue,
        "return" => TokenKind::Return,
        "yield" => TokenKind::Yield,
        "try" => TokenKind::Try,
        "catch" => TokenKind::Catch,
        "finally" => TokenKind::Finally,
        "throw" => TokenKind::Throw,
        "as" => TokenKind::As,
        "self" => TokenKind::SelfKw,
        "parent" => TokenKind::Parent,
        "use" => TokenKind::Use,
        "map" => TokenKind::Map,
        "where" => TokenKind::Where,
        "type" => TokenKind::Type,
        "get" => TokenKind::Get,
        "set" => TokenKind::Set,
        "instanceof" => TokenKind::Instanceof,
        "is" => TokenKind::Is,
        "import" => TokenKind::Import,
        "export" => TokenKind::Export,
        _ => return None,
    };
    Some(kind)
}

/// The decoded literal carried by a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Integer(i64),
    Float(f64),
    String(String),
}

/// A token produced by the Vesper scanner.
///
/// `lexeme` borrows the exact source text the token was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub value: TokenValue,
    pub position: Position,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str, value: TokenValue, position: Position) -> Self {
        Self {
            kind,
            lexeme,
            value,
            position,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }

    /// Span from the token start to just past its lexeme.
    pub fn span(&self) -> Span {
        let mut end = Tracker {
            offset: self.position.offset,
            line: self.position.line,
            column: self.position.column,
        };
        for ch in self.lexeme.chars() {
            end.advance(ch);
        }
        Span::new(self.position.clone(), end.position(&self.position.filename))
    }
}
