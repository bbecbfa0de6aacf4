//! Token model shared by the tokenizer and the parser.

use std::fmt;

use rowan::TextRange;

/// Token kinds, in the order the tokenizer tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Newline,
    Numeric,
    String,
    Symbol,
    Word,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newline => "newline",
            Self::Numeric => "numeric",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::Word => "word",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded payload of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Newlines carry no value.
    None,
    Integer(i64),
    Float(f64),
    /// String contents with escapes resolved, or the literal symbol/word text.
    Text(String),
}

impl TokenValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// An immutable lexeme.
///
/// `line` and `column` are 1-based, columns counted in characters. `span` is the byte
/// range of `text` within the tokenizer's log of all text seen.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub value: TokenValue,
    pub kind: TokenKind,
    pub line: u32,
    pub column: u32,
    pub span: TextRange,
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        value: TokenValue,
        kind: TokenKind,
        line: u32,
        column: u32,
        span: TextRange,
    ) -> Self {
        Self {
            text: text.into(),
            value,
            kind,
            line,
            column,
            span,
        }
    }

    /// The spelling of a `symbol` token.
    pub fn symbol(&self) -> Option<&str> {
        match self.kind {
            TokenKind::Symbol => Some(&self.text),
            _ => None,
        }
    }

    pub fn is_symbol(&self, spelling: &str) -> bool {
        self.symbol() == Some(spelling)
    }

    /// Column just past the last character (meaningful for single-line tokens).
    pub fn end_column(&self) -> u32 {
        self.column + self.text.chars().count() as u32
    }

    /// Whether `next` starts exactly one column after this token on the same line.
    pub fn adjoins(&self, next: &Token) -> bool {
        next.line == self.line && next.column.abs_diff(self.column) == 1
    }

    /// Merge two symbols into one multi-character symbol positioned at `self`.
    pub fn fuse(&self, next: &Token) -> Token {
        let text = format!("{}{}", self.text, next.text);
        Token {
            value: TokenValue::Text(text.clone()),
            text,
            kind: TokenKind::Symbol,
            line: self.line,
            column: self.column,
            span: self.span.cover(next.span),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} @ {}:{}",
            self.kind, self.text, self.line, self.column
        )
    }
}
