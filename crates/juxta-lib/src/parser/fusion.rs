//! Multi-character operator fusion.

use super::operators::OperatorTable;
use crate::token::{Token, TokenKind};

/// Merges adjacent single-character symbols spelling a configured multi-character operator.
///
/// Each token joins at most one fusion; fusions do not chain within a pass.
pub(crate) fn fuse_operators(tokens: Vec<Token>, table: &OperatorTable) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut tokens = tokens.into_iter().peekable();

    while let Some(token) = tokens.next() {
        let fused = match tokens.peek() {
            Some(next) if fusable(&token, next, table) => Some(token.fuse(next)),
            _ => None,
        };
        match fused {
            Some(fused) => {
                tokens.next();
                out.push(fused);
            }
            None => out.push(token),
        }
    }
    out
}

fn fusable(first: &Token, second: &Token, table: &OperatorTable) -> bool {
    first.kind == TokenKind::Symbol
        && second.kind == TokenKind::Symbol
        && first.adjoins(second)
        && table.is_multichar(&format!("{}{}", first.text, second.text))
}
