//! Compiled lexer and parser for one syntax.

use juxta_core::Syntax;

use crate::lexer::{LexError, Lexicon, Source, TokenBuffer, Tokenizer};
use crate::parser::{Node, ParseFailure, Parser};
use crate::token::Token;
use crate::{BuildError, Result};

/// A syntax compiled once, then used for any number of inputs.
#[derive(Debug, Clone)]
pub struct Frontend {
    lexicon: Lexicon,
    parser: Parser,
}

impl Frontend {
    pub fn new(syntax: &Syntax) -> std::result::Result<Self, BuildError> {
        Ok(Self {
            lexicon: Lexicon::new(&syntax.lexical)?,
            parser: Parser::new(syntax)?,
        })
    }

    /// Frontend for the built-in default syntax.
    pub fn standard() -> Self {
        Self::new(&Syntax::default()).expect("built-in syntax is valid")
    }

    /// See [`Parser::with_max_depth`].
    pub fn with_max_depth(mut self, limit: u32) -> Self {
        self.parser = self.parser.with_max_depth(limit);
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    pub fn tokenizer(&self, text: impl Into<String>) -> Tokenizer<'_> {
        Tokenizer::new(&self.lexicon, text)
    }

    /// Tokenizer that asks `source` for more text whenever it runs dry.
    pub fn tokenizer_with_source<'a>(
        &'a self,
        text: impl Into<String>,
        source: impl Source + 'a,
    ) -> Tokenizer<'a> {
        Tokenizer::new(&self.lexicon, text).with_source(source)
    }

    pub fn buffer(&self, text: impl Into<String>) -> TokenBuffer<'_> {
        TokenBuffer::new(self.tokenizer(text))
    }

    /// Every token of a complete text.
    pub fn tokenize(&self, text: impl Into<String>) -> std::result::Result<Vec<Token>, LexError> {
        self.tokenizer(text).collect()
    }

    pub fn parse(&self, tokens: Vec<Token>) -> std::result::Result<Node, ParseFailure> {
        self.parser.parse(tokens)
    }

    /// Tokenizes and parses a complete text.
    pub fn parse_str(&self, text: &str) -> Result<Node> {
        let tokens = self.tokenize(text)?;
        Ok(self.parse(tokens)?)
    }
}
