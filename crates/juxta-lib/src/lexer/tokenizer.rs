//! Pull-based scanner.

use std::ops::Range;

use rowan::{TextRange, TextSize};

use super::error::LexError;
use super::lexicon::Lexicon;
use super::source::Source;
use crate::token::{Token, TokenKind, TokenValue};

#[derive(Debug, Clone, Copy)]
struct Mark {
    line: u32,
    column: u32,
}

/// Produces tokens on demand, pulling more text from its [`Source`] when the buffered
/// text is exhausted.
///
/// After a lexical-fatal error every further call reports the same error.
pub struct Tokenizer<'a> {
    lexicon: &'a Lexicon,
    source: Option<Box<dyn Source + 'a>>,
    /// Every character seen so far. Token spans index into it.
    log: String,
    pos: usize,
    line: u32,
    column: u32,
    just_emitted_newline: bool,
    error: Option<LexError>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(lexicon: &'a Lexicon, text: impl Into<String>) -> Self {
        Self {
            lexicon,
            source: None,
            log: text.into(),
            pos: 0,
            line: 1,
            column: 1,
            just_emitted_newline: false,
            error: None,
        }
    }

    pub fn with_source(mut self, source: impl Source + 'a) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// All text seen so far, including continuation chunks.
    pub fn log(&self) -> &str {
        &self.log
    }

    /// Current 1-based line and column.
    pub fn position(&self) -> (u32, u32) {
        (self.line, self.column)
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let result = self.scan();
        if let Err(err) = &result {
            self.error = Some(err.clone());
        }
        result
    }

    /// Tokens up to (excluding) the next newline token.
    ///
    /// Returns `None` at end of input if nothing was collected.
    pub fn read_line(&mut self) -> Result<Option<Vec<Token>>, LexError> {
        let mut line = Vec::new();
        loop {
            match self.next_token()? {
                None => return Ok((!line.is_empty()).then_some(line)),
                Some(token) if token.kind == TokenKind::Newline => return Ok(Some(line)),
                Some(token) => line.push(token),
            }
        }
    }

    fn scan(&mut self) -> Result<Option<Token>, LexError> {
        let lexicon = self.lexicon;
        loop {
            if let Some(len) = lexicon.whitespace_len(self.remaining()) {
                let mark = self.mark();
                let range = self.advance(len);
                let has_newline = self.log[range.clone()].contains('\n');
                if lexicon.emit_newlines && has_newline && !self.just_emitted_newline {
                    self.just_emitted_newline = true;
                    let token = self.token(range, TokenValue::None, TokenKind::Newline, mark);
                    return Ok(Some(token));
                }
            }

            if self.remaining().is_empty() {
                if self.pull() {
                    continue;
                }
                return Ok(None);
            }

            if self.remaining().starts_with(lexicon.comment.as_str()) {
                if self.skip_comment() {
                    continue;
                }
                return Ok(None);
            }

            // Only non-newline tokens from here on.
            self.just_emitted_newline = false;
            let mark = self.mark();

            if let Some(len) = lexicon.number_len(self.remaining()) {
                let range = self.advance(len);
                let literal = &self.log[range.clone()];
                let Some(value) = lexicon.decode_number(literal) else {
                    return Err(LexError::NumericOverflow {
                        literal: literal.to_owned(),
                        line: mark.line,
                        column: mark.column,
                    });
                };
                return Ok(Some(self.token(range, value, TokenKind::Numeric, mark)));
            }

            if self.remaining().starts_with(lexicon.string_delimiter) {
                return self.scan_string(mark).map(Some);
            }

            let Some(first) = self.remaining().chars().next() else {
                unreachable!("remaining text is non-empty");
            };

            if lexicon.is_non_word(first) {
                let range = self.advance(first.len_utf8());
                let value = TokenValue::Text(first.to_string());
                return Ok(Some(self.token(range, value, TokenKind::Symbol, mark)));
            }

            if let Some(len) = lexicon.word_len(self.remaining()) {
                let range = self.advance(len);
                let value = TokenValue::Text(self.log[range.clone()].to_owned());
                return Ok(Some(self.token(range, value, TokenKind::Word, mark)));
            }

            return Err(LexError::UnrecognizedInput {
                line: mark.line,
                column: mark.column,
            });
        }
    }

    /// Discards through the next newline (exclusive). `false` if input ended first.
    fn skip_comment(&mut self) -> bool {
        loop {
            match self.remaining().find('\n') {
                Some(end) => {
                    self.advance(end);
                    return true;
                }
                None => {
                    self.advance(self.remaining().len());
                    if !self.pull() {
                        return false;
                    }
                }
            }
        }
    }

    fn scan_string(&mut self, mark: Mark) -> Result<Token, LexError> {
        let lexicon = self.lexicon;
        let mut len = lexicon.string_delimiter.len_utf8();
        let mut escaped = false;
        let mut value = String::new();

        loop {
            let Some(c) = self.remaining()[len..].chars().next() else {
                if self.pull() {
                    continue;
                }
                return Err(LexError::UnterminatedString {
                    line: mark.line,
                    column: mark.column,
                });
            };
            len += c.len_utf8();

            if escaped {
                let decoded = lexicon.unescape(c).ok_or(LexError::UnknownEscape {
                    escape: c,
                    line: mark.line,
                    column: mark.column,
                })?;
                value.push(decoded);
                escaped = false;
            } else if c == lexicon.escape {
                escaped = true;
            } else if c == lexicon.string_delimiter {
                break;
            } else {
                value.push(c);
            }
        }

        let range = self.advance(len);
        Ok(self.token(range, TokenValue::Text(value), TokenKind::String, mark))
    }

    fn remaining(&self) -> &str {
        &self.log[self.pos..]
    }

    fn mark(&self) -> Mark {
        Mark {
            line: self.line,
            column: self.column,
        }
    }

    /// Appends the next chunk from the source. Drops the source once it is finished.
    fn pull(&mut self) -> bool {
        let Some(source) = self.source.as_mut() else {
            return false;
        };
        match source.pull_more() {
            Some(chunk) => {
                log::trace!("pulled {} bytes of continuation text", chunk.len());
                self.log.push_str(&chunk);
                true
            }
            None => {
                log::trace!("continuation source finished");
                self.source = None;
                false
            }
        }
    }

    /// Consumes `len` bytes, updating line and column.
    fn advance(&mut self, len: usize) -> Range<usize> {
        let range = self.pos..self.pos + len;
        let consumed = &self.log[range.clone()];
        match consumed.rfind('\n') {
            None => self.column += consumed.chars().count() as u32,
            Some(last) => {
                self.line += consumed.matches('\n').count() as u32;
                self.column = consumed[last..].chars().count() as u32;
            }
        }
        self.pos = range.end;
        range
    }

    fn token(&self, range: Range<usize>, value: TokenValue, kind: TokenKind, mark: Mark) -> Token {
        let span = TextRange::new(
            TextSize::from(range.start as u32),
            TextSize::from(range.end as u32),
        );
        let token = Token::new(&self.log[range], value, kind, mark.line, mark.column, span);
        log::trace!("token {token}");
        token
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.error.is_some() {
            return None;
        }
        self.next_token().transpose()
    }
}

impl std::fmt::Debug for Tokenizer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("line", &self.line)
            .field("column", &self.column)
            .field("has_source", &self.has_source())
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
