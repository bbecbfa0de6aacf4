//! Lexical errors.

/// Fatal tokenizer errors. The stream is ambiguous past any of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unterminated string ({line}, {column})")]
    UnterminatedString { line: u32, column: u32 },

    #[error("unknown escape sequence {escape:?} ({line}, {column})")]
    UnknownEscape { escape: char, line: u32, column: u32 },

    /// No token rule matched; unreachable with a complete character-class configuration.
    #[error("unknown lexing error ({line}, {column})")]
    UnrecognizedInput { line: u32, column: u32 },

    #[error("numeric literal {literal} out of range ({line}, {column})")]
    NumericOverflow {
        literal: String,
        line: u32,
        column: u32,
    },
}

impl LexError {
    /// 1-based line and column where the offending lexeme starts.
    pub fn position(&self) -> (u32, u32) {
        match *self {
            Self::UnterminatedString { line, column }
            | Self::UnknownEscape { line, column, .. }
            | Self::UnrecognizedInput { line, column }
            | Self::NumericOverflow { line, column, .. } => (line, column),
        }
    }
}

/// Errors from [`TokenBuffer`](super::TokenBuffer) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("length unknown because buffer has not been completed")]
    Incomplete,

    #[error("cannot drain a buffer whose tokenizer still has a continuation source")]
    Streaming,
}
