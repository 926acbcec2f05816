use std::fmt;

/// Position in source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Token types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    OpenBracket,
    CloseBracket,
    Word(String),
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::OpenBracket => write!(f, "["),
            TokenKind::CloseBracket => write!(f, "]"),
            TokenKind::Word(text) => write!(f, "{text}"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// Token with position information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Position) -> Self {
        Self { kind, pos }
    }
}

/// Characters that end a word without being part of it.
pub fn is_bracket(ch: char) -> bool {
    ch == '[' || ch == ']'
}

/// The C `isspace` set: ASCII whitespace plus vertical tab.
pub fn is_separator(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0B'
}
