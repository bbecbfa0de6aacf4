//! Parse failures.

use std::fmt;

use super::tree::Node;
use crate::token::Token;

/// Cause of a [`ParseFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A closer with nothing open, or an opener never closed.
    UnpairedDelimiter,
    /// A closer that does not match the innermost open delimiter.
    MismatchedDelimiter,
    MissingLeftOperand,
    MissingRightOperand,
    MissingPrefixOperand,
    /// A transparent (grouping-only) pair with nothing inside.
    EmptyGroup,
    EmptyInput,
    /// Operators or brackets nested past the parser's depth limit.
    RecursionLimit,
}

impl FailureKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::UnpairedDelimiter => "unpaired delimiter",
            Self::MismatchedDelimiter => "mismatched delimiter",
            Self::MissingLeftOperand => "binary operator missing left-hand argument",
            Self::MissingRightOperand => "binary operator missing right-hand argument",
            Self::MissingPrefixOperand => "prefix operator missing argument",
            Self::EmptyGroup => "empty group",
            Self::EmptyInput => "nothing to parse",
            Self::RecursionLimit => "expression nested too deeply",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Terminal parse result: the first failure encountered, with the node to highlight.
///
/// `labels` name the enclosing contexts the failure escaped through, innermost first.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ParseFailure {
    pub kind: FailureKind,
    pub message: String,
    pub highlight: Option<Node>,
    pub labels: Vec<String>,
}

impl ParseFailure {
    pub fn new(kind: FailureKind, highlight: impl Into<Node>) -> Self {
        Self {
            kind,
            message: kind.message().to_owned(),
            highlight: Some(highlight.into()),
            labels: Vec::new(),
        }
    }

    pub fn without_highlight(kind: FailureKind) -> Self {
        Self {
            kind,
            message: kind.message().to_owned(),
            highlight: None,
            labels: Vec::new(),
        }
    }

    pub fn mark(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }

    pub fn marked(mut self, label: impl Into<String>) -> Self {
        self.mark(label);
        self
    }

    /// Highlighted tokens in source order.
    pub fn highlighted_tokens(&self) -> Vec<&Token> {
        self.highlight.as_ref().map(Node::tokens).unwrap_or_default()
    }

    /// Line of the first highlighted token.
    pub fn line(&self) -> Option<u32> {
        self.highlighted_tokens().first().map(|token| token.line)
    }

    /// Whether the highlight starts and ends on the same line.
    pub fn is_single_line(&self) -> bool {
        let tokens = self.highlighted_tokens();
        match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => first.line == last.line,
            _ => false,
        }
    }
}
