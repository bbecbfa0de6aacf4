//! Operator-precedence parser with bracket nesting.
//!
//! # Architecture
//!
//! Parsing a token sequence runs three passes:
//!
//! 1. **Fusion**: adjacent single-character symbols that spell a configured
//!    multi-character operator (`:` `=` → `:=`) merge into one token
//! 2. **Delimiter resolution**: matching bracket pairs are found with a stack; each
//!    interior is parsed on its own and spliced back as a single node
//! 3. **Precedence climbing**: the remaining flat sequence is parsed against the
//!    [`OperatorTable`], with juxtaposition read as implicit application
//!
//! There is no recovery. The first failure at any depth aborts the whole parse and
//! surfaces as a [`ParseFailure`] carrying the offending token or subtree.
//!
//! Nesting is bounded: open brackets plus pending operator operands may not exceed
//! [`Parser::max_depth`], past which parsing fails with
//! [`FailureKind::RecursionLimit`].

mod climb;
mod delimiters;
mod failure;
mod fusion;
mod operators;
mod tree;

#[cfg(test)]
mod tree_tests;

pub use failure::{FailureKind, ParseFailure};
pub use operators::{Operator, OperatorTable};
pub use tree::{Node, ParseTree};

use juxta_core::Syntax;

use crate::BuildError;
use crate::token::{Token, TokenKind};
use delimiters::Delimiters;

/// Default nesting limit. Each level costs a few stack frames in the climber.
pub const DEFAULT_MAX_DEPTH: u32 = 256;

/// Parser for one configured grammar. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Parser {
    table: OperatorTable,
    delimiters: Delimiters,
    max_depth: u32,
}

impl Parser {
    pub fn new(syntax: &Syntax) -> Result<Self, BuildError> {
        let table = OperatorTable::new(&syntax.operators)?;
        let delimiters = Delimiters::new(&syntax.delimiters, &syntax.lexical.non_word)?;
        Ok(Self {
            table,
            delimiters,
            max_depth: DEFAULT_MAX_DEPTH,
        })
    }

    /// Sets the nesting limit. Deeper input fails instead of exhausting the stack.
    pub fn with_max_depth(mut self, limit: u32) -> Self {
        self.max_depth = limit;
        self
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn table(&self) -> &OperatorTable {
        &self.table
    }

    /// Main entry point: parses a finite token sequence into one tree.
    ///
    /// Newline tokens are separators for the surrounding language and are dropped.
    /// The result is not wrapped in a root node: a lone operand comes back as a token.
    pub fn parse(&self, tokens: Vec<Token>) -> Result<Node, ParseFailure> {
        let tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|token| token.kind != TokenKind::Newline)
            .collect();
        let tokens = fusion::fuse_operators(tokens, &self.table);
        self.resolve(tokens.into_iter().map(Node::Token).collect())
    }
}
