//! Shared helpers for unit tests.

use std::sync::LazyLock;

use crate::{Frontend, Node, ParseFailure, Token};

static STANDARD: LazyLock<Frontend> = LazyLock::new(Frontend::standard);

pub(crate) fn standard() -> &'static Frontend {
    &STANDARD
}

pub(crate) fn lex(source: &str) -> Vec<Token> {
    standard().tokenize(source).expect("source should tokenize")
}

/// One `kind "text" @ line:column` line per token.
pub(crate) fn token_lines(source: &str) -> String {
    lex(source).iter().map(|token| format!("{token}\n")).collect()
}

/// Leaf operands as parser input, without running delimiter resolution.
pub(crate) fn nodes(source: &str) -> Vec<Node> {
    lex(source).into_iter().map(Node::Token).collect()
}

pub(crate) fn parse(source: &str) -> Node {
    match standard().parse(lex(source)) {
        Ok(node) => node,
        Err(failure) => panic!("expected a tree for {source:?}, got: {failure}"),
    }
}

pub(crate) fn outline(source: &str) -> String {
    parse(source).dump()
}

pub(crate) fn fail(source: &str) -> ParseFailure {
    match standard().parse(lex(source)) {
        Ok(node) => panic!("expected a failure for {source:?}, got:\n{node}"),
        Err(failure) => failure,
    }
}

/// Text of every highlighted token, space separated.
pub(crate) fn highlight_text(failure: &ParseFailure) -> String {
    failure
        .highlighted_tokens()
        .iter()
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
