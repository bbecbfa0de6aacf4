//! Precedence climbing over a bracket-free sequence.

use std::iter::Peekable;
use std::vec;

use super::Parser;
use super::failure::{FailureKind, ParseFailure};
use super::operators::Step;
use super::tree::Node;

/// Owning cursor over the elements being parsed.
struct Cursor {
    items: Peekable<vec::IntoIter<Node>>,
    consumed: usize,
    depth: u32,
}

impl Cursor {
    fn new(items: Vec<Node>, depth: u32) -> Self {
        Self {
            items: items.into_iter().peekable(),
            consumed: 0,
            depth,
        }
    }

    fn peek(&mut self) -> Option<&Node> {
        self.items.peek()
    }

    fn bump(&mut self) -> Option<Node> {
        let node = self.items.next()?;
        self.consumed += 1;
        Some(node)
    }

    fn at_end(&mut self) -> bool {
        self.items.peek().is_none()
    }
}

impl Parser {
    /// Parses a complete bracket-free sequence of tokens and resolved subtrees.
    pub fn parse_operators(&self, items: Vec<Node>) -> Result<Node, ParseFailure> {
        self.parse_operators_at(items, 0)
    }

    /// As [`Parser::parse_operators`], for a sequence already `depth` levels deep.
    pub(crate) fn parse_operators_at(
        &self,
        items: Vec<Node>,
        depth: u32,
    ) -> Result<Node, ParseFailure> {
        let mut cursor = Cursor::new(items, depth);
        let node = self.climb(&mut cursor, 0)?;
        debug_assert!(cursor.at_end(), "rank 0 admits every operator");
        Ok(node)
    }

    /// Parses the longest prefix of `items` whose operators bind at least `min_rank`.
    ///
    /// Returns the subtree and the number of elements it consumed.
    pub fn parse_prefix(
        &self,
        items: &[Node],
        min_rank: u32,
    ) -> Result<(Node, usize), ParseFailure> {
        let mut cursor = Cursor::new(items.to_vec(), 0);
        let node = self.climb(&mut cursor, min_rank)?;
        Ok((node, cursor.consumed))
    }

    fn climb(&self, cursor: &mut Cursor, min_rank: u32) -> Result<Node, ParseFailure> {
        let Some(first) = cursor.bump() else {
            return Err(ParseFailure::without_highlight(FailureKind::EmptyInput));
        };
        if cursor.depth >= self.max_depth {
            log::debug!("nesting limit {} reached", self.max_depth);
            return Err(ParseFailure::new(FailureKind::RecursionLimit, first));
        }

        cursor.depth += 1;
        let result = self.climb_from(first, cursor, min_rank);
        cursor.depth -= 1;
        result
    }

    fn climb_from(
        &self,
        first: Node,
        cursor: &mut Cursor,
        min_rank: u32,
    ) -> Result<Node, ParseFailure> {
        let mut lhs = self.parse_operand(first, cursor)?;

        loop {
            let step = match cursor.peek() {
                Some(next) => self.table.classify(next),
                None => break,
            };

            match step {
                Step::Postfix(op) => {
                    if op.rank < min_rank {
                        break;
                    }
                    cursor.bump();
                    lhs = Node::tree(op.name.clone(), vec![lhs]);
                }
                Step::Binary(op) => {
                    if op.rank < min_rank {
                        break;
                    }
                    let Some(operator) = cursor.bump() else {
                        break;
                    };
                    if cursor.at_end() {
                        return Err(ParseFailure::new(
                            FailureKind::MissingRightOperand,
                            operator,
                        ));
                    }
                    let rhs = self.climb(cursor, op.operand_rank())?;
                    lhs = Node::tree(op.name.clone(), vec![lhs, rhs]);
                }
                Step::Apply(op) => {
                    if op.rank < min_rank {
                        break;
                    }
                    let rhs = self.climb(cursor, op.operand_rank())?;
                    lhs = Node::tree(op.name.clone(), vec![lhs, rhs]);
                }
            }
        }

        Ok(lhs)
    }

    /// First element of an expression, applying a prefix operator if it is one.
    fn parse_operand(&self, first: Node, cursor: &mut Cursor) -> Result<Node, ParseFailure> {
        let Some(symbol) = first.symbol() else {
            return Ok(first);
        };

        if let Some(op) = self.table.prefix(symbol) {
            if cursor.at_end() {
                return Err(ParseFailure::new(FailureKind::MissingPrefixOperand, first));
            }
            let operand = self.climb(cursor, op.operand_rank())?;
            return Ok(Node::tree(op.name.clone(), vec![operand]));
        }

        if self.table.binary(symbol).is_some() {
            return Err(ParseFailure::new(FailureKind::MissingLeftOperand, first));
        }

        Ok(first)
    }
}
