//! Lazy random-access cache over a tokenizer.

use super::error::BufferError;
use super::tokenizer::Tokenizer;
use crate::token::Token;

/// Index-addressable view of a token stream.
///
/// Cached indices are stable; indices past the cache pull from the tokenizer on demand.
/// Once the tokenizer reports end of input the buffer is sealed and its length is known.
#[derive(Debug)]
pub struct TokenBuffer<'a> {
    tokenizer: Tokenizer<'a>,
    tokens: Vec<Token>,
    complete: bool,
}

impl<'a> TokenBuffer<'a> {
    pub fn new(tokenizer: Tokenizer<'a>) -> Self {
        Self {
            tokenizer,
            tokens: Vec::new(),
            complete: false,
        }
    }

    /// The `index`-th token, or `None` if the stream ends before it.
    pub fn at(&mut self, index: usize) -> Result<Option<&Token>, BufferError> {
        while !self.complete && self.tokens.len() <= index {
            self.pull_one()?;
        }
        Ok(self.tokens.get(index))
    }

    /// Number of tokens. Only known once the buffer is sealed.
    pub fn len(&self) -> Result<usize, BufferError> {
        if self.complete {
            Ok(self.tokens.len())
        } else {
            Err(BufferError::Incomplete)
        }
    }

    /// Pulls every remaining token and seals the buffer.
    ///
    /// Rejected while the tokenizer has a continuation source, which could block forever.
    pub fn drain(&mut self) -> Result<&[Token], BufferError> {
        if self.tokenizer.has_source() {
            return Err(BufferError::Streaming);
        }
        while !self.complete {
            self.pull_one()?;
        }
        Ok(&self.tokens)
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Tokens cached so far.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn tokenizer(&self) -> &Tokenizer<'a> {
        &self.tokenizer
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    fn pull_one(&mut self) -> Result<(), BufferError> {
        match self.tokenizer.next_token()? {
            Some(token) => self.tokens.push(token),
            None => {
                log::trace!("token buffer sealed at {} tokens", self.tokens.len());
                self.complete = true;
            }
        }
        Ok(())
    }
}
