//! Juxta: a configurable lexer and operator-precedence parser front-end.
//!
//! Raw text becomes typed tokens, tokens become a parse tree. The concrete language is
//! data: character classes, operator levels and bracket pairs come from a
//! [`juxta_core::Syntax`], compiled once into a [`Frontend`].
//!
//! # Example
//!
//! ```
//! use juxta_lib::Frontend;
//!
//! let frontend = Frontend::standard();
//! let tree = frontend.parse_str("f x + 1").expect("valid expression");
//! assert_eq!(tree.label(), Some("plus2"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod lexer;
pub mod parser;

mod frontend;
mod token;

#[cfg(test)]
mod frontend_tests;
#[cfg(test)]
mod test_utils;

pub use diagnostics::FailurePrinter;
pub use frontend::Frontend;
pub use lexer::{BufferError, Chunks, LexError, Lexicon, Source, TokenBuffer, Tokenizer};
pub use parser::{FailureKind, Node, Operator, OperatorTable, ParseFailure, ParseTree, Parser};
pub use token::{Token, TokenKind, TokenValue};

/// Errors raised while compiling a [`juxta_core::Syntax`].
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("comment marker must not be empty")]
    EmptyComment,

    #[error("string delimiter and escape character are both {0:?}")]
    DelimiterIsEscape(char),

    #[error("operator spelling {0:?} must be one or two characters")]
    OperatorSpelling(String),

    #[error("implicit application must be a binary operator")]
    ApplicationNotBinary,

    #[error("implicit application is not registered")]
    MissingApplication,

    #[error("implicit application is registered more than once")]
    DuplicateApplication,

    #[error("{class} operator {symbol:?} is registered more than once")]
    DuplicateOperator { symbol: String, class: &'static str },

    #[error("delimiter {0:?} is not a non-word character")]
    DelimiterNotSymbol(char),

    #[error("invalid character class: {0}")]
    Pattern(#[from] regex_automata::meta::BuildError),
}

/// Errors from end-to-end parsing of text.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseFailure),
}

/// Result type for end-to-end operations.
pub type Result<T> = std::result::Result<T, Error>;
