//! Parse tree nodes.

use std::fmt::{self, Write};

use rowan::TextRange;

use crate::token::Token;

/// A child in a parse tree: either a leaf token or a nested tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Token(Token),
    Tree(ParseTree),
}

/// A labeled interior node. The label is an operator's tag or a delimiter pair's name.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseTree {
    pub label: String,
    pub children: Vec<Node>,
}

impl ParseTree {
    pub fn new(label: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.children.iter()
    }
}

impl<'a> IntoIterator for &'a ParseTree {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl Node {
    pub fn tree(label: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Tree(ParseTree::new(label, children))
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            Self::Tree(_) => None,
        }
    }

    pub fn as_tree(&self) -> Option<&ParseTree> {
        match self {
            Self::Tree(tree) => Some(tree),
            Self::Token(_) => None,
        }
    }

    /// Spelling of a symbol leaf.
    pub fn symbol(&self) -> Option<&str> {
        self.as_token().and_then(Token::symbol)
    }

    pub fn label(&self) -> Option<&str> {
        self.as_tree().map(|tree| tree.label.as_str())
    }

    /// Leaf tokens in source order.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        collect_tokens(self, &mut out);
        out
    }

    /// Byte range from the first to the last leaf token.
    pub fn span(&self) -> Option<TextRange> {
        let tokens = self.tokens();
        let first = tokens.first()?;
        let last = tokens.last()?;
        Some(first.span.cover(last.span))
    }

    /// Indented outline: tree labels, leaf token text.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        write_outline(self, &mut out).expect("String write never fails");
        out
    }
}

impl From<Token> for Node {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl From<ParseTree> for Node {
    fn from(tree: ParseTree) -> Self {
        Self::Tree(tree)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

impl Drop for ParseTree {
    // Left-associative chains grow without bound; unlink iteratively.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Tree(mut tree) = node {
                pending.append(&mut tree.children);
            }
        }
    }
}

fn collect_tokens<'n>(node: &'n Node, out: &mut Vec<&'n Token>) {
    let mut pending = vec![node];
    while let Some(node) = pending.pop() {
        match node {
            Node::Token(token) => out.push(token),
            Node::Tree(tree) => pending.extend(tree.children.iter().rev()),
        }
    }
}

fn write_outline(node: &Node, w: &mut impl Write) -> fmt::Result {
    let mut pending = vec![(node, 0)];
    while let Some((node, depth)) = pending.pop() {
        let indent = "  ".repeat(depth);
        match node {
            Node::Token(token) => writeln!(w, "{indent}{}", token.text)?,
            Node::Tree(tree) => {
                writeln!(w, "{indent}{}", tree.label)?;
                pending.extend(tree.children.iter().rev().map(|child| (child, depth + 1)));
            }
        }
    }
    Ok(())
}
