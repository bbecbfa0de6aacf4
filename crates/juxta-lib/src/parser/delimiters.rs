//! Bracket matching and interior splicing.

use juxta_core::DelimiterPair;

use super::Parser;
use super::failure::{FailureKind, ParseFailure};
use super::tree::Node;
use crate::BuildError;

#[derive(Debug, Clone)]
pub(crate) struct Delimiters {
    pairs: Vec<DelimiterPair>,
}

#[derive(Debug, Clone, Copy)]
enum Role<'p> {
    Open(&'p DelimiterPair),
    Close(&'p DelimiterPair),
    Other,
}

impl Delimiters {
    pub(crate) fn new(pairs: &[DelimiterPair], non_word: &[char]) -> Result<Self, BuildError> {
        for pair in pairs {
            for c in [pair.open, pair.close] {
                if !non_word.contains(&c) {
                    return Err(BuildError::DelimiterNotSymbol(c));
                }
            }
        }
        Ok(Self {
            pairs: pairs.to_vec(),
        })
    }

    fn role(&self, node: &Node) -> Role<'_> {
        let mut chars = node.symbol().unwrap_or_default().chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Role::Other;
        };
        if let Some(pair) = self.pairs.iter().find(|pair| pair.open == c) {
            return Role::Open(pair);
        }
        if let Some(pair) = self.pairs.iter().find(|pair| pair.close == c) {
            return Role::Close(pair);
        }
        Role::Other
    }
}

type OpenStack<'p> = Vec<(usize, &'p DelimiterPair)>;

impl Parser {
    /// Resolves every bracket pair, then parses the flat remainder.
    pub(crate) fn resolve(&self, mut items: Vec<Node>) -> Result<Node, ParseFailure> {
        let mut stack: OpenStack<'_> = Vec::new();
        let mut index = 0;

        while index < items.len() {
            let pair = match self.delimiters.role(&items[index]) {
                Role::Other => {
                    index += 1;
                    continue;
                }
                Role::Open(pair) => {
                    if stack.len() >= self.max_depth as usize {
                        let opener = items.swap_remove(index);
                        return Err(ParseFailure::new(FailureKind::RecursionLimit, opener));
                    }
                    stack.push((index, pair));
                    index += 1;
                    continue;
                }
                Role::Close(pair) => pair,
            };

            let Some(&(open, expected)) = stack.last() else {
                let closer = items.swap_remove(index);
                return Err(ParseFailure::new(FailureKind::UnpairedDelimiter, closer));
            };
            if expected.close != pair.close {
                let closer = items.swap_remove(index);
                let failure = ParseFailure::new(FailureKind::MismatchedDelimiter, closer);
                return Err(within(failure, &stack));
            }
            stack.pop();

            let mut group: Vec<Node> = items.drain(open..=index).collect();
            let close_node = group.pop();
            let open_node = group.remove(0);
            log::trace!("resolving {} with {} elements", expected.name, group.len());

            let depth = stack.len() as u32 + 1;
            let replacement = self
                .resolve_group(expected, open_node, group, close_node, depth)
                .map_err(|failure| within(failure.marked(expected.name.as_str()), &stack))?;
            items.insert(open, replacement);
            index = open + 1;
        }

        if let Some((open, _)) = stack.pop() {
            let opener = items.swap_remove(open);
            let failure = ParseFailure::new(FailureKind::UnpairedDelimiter, opener);
            return Err(within(failure, &stack));
        }

        self.parse_operators(items)
    }

    fn resolve_group(
        &self,
        pair: &DelimiterPair,
        open: Node,
        interior: Vec<Node>,
        close: Option<Node>,
        depth: u32,
    ) -> Result<Node, ParseFailure> {
        if interior.is_empty() {
            if pair.transparent {
                let both = std::iter::once(open).chain(close).collect();
                return Err(ParseFailure::new(
                    FailureKind::EmptyGroup,
                    Node::tree(pair.name.as_str(), both),
                ));
            }
            return Ok(Node::tree(pair.name.as_str(), Vec::new()));
        }

        let expr = self.parse_operators_at(interior, depth)?;
        if pair.transparent {
            Ok(expr)
        } else {
            Ok(Node::tree(pair.name.as_str(), vec![expr]))
        }
    }
}

/// Labels a failure with every still-open pair, innermost first.
fn within(mut failure: ParseFailure, stack: &OpenStack<'_>) -> ParseFailure {
    for (_, pair) in stack.iter().rev() {
        failure.mark(pair.name.as_str());
    }
    failure
}
