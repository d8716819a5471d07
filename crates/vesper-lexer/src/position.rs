use std::fmt;
use std::sync::Arc;

/// A location in a source file.
///
/// `line` and `column` are 1-based, `offset` is a 0-based byte offset.
/// Columns advance by one per decoded code point, regardless of display width.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub filename: Arc<str>,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(filename: Arc<str>, line: usize, column: usize, offset: usize) -> Self {
        Self {
            filename,
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

/// A start/end pair bounding a token or a diagnostic label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Length reported for spans whose ends sit on different lines.
    pub const MULTI_LINE_LEN: usize = 1;

    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Column distance between the two ends, or [`Span::MULTI_LINE_LEN`]
    /// when the span crosses a newline.
    pub fn len(&self) -> usize {
        if self.start.line == self.end.line {
            self.end.column.abs_diff(self.start.column)
        } else {
            Self::MULTI_LINE_LEN
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    pub fn is_multi_line(&self) -> bool {
        self.start.line != self.end.line
    }
}

/// Cursor bookkeeping: byte offset plus line/column counters.
///
/// `Tracker` is `Copy` so the scanner can snapshot it at the start of
/// every lexeme and rebuild a [`Position`] from the snapshot later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tracker {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Tracker {
    pub fn new() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Step over `ch`, which must be the character at `offset`.
    pub fn advance(&mut self, ch: char) {
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    pub fn position(&self, filename: &Arc<str>) -> Position {
        Position::new(Arc::clone(filename), self.line, self.column, self.offset)
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}
