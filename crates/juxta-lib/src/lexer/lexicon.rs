//! Character classes compiled into anchored matchers.

use indexmap::IndexSet;
use juxta_core::LexicalSyntax;
use regex_automata::meta::Regex;
use regex_automata::{Anchored, Input};

use crate::BuildError;
use crate::token::TokenValue;

/// Compiled lexical configuration, shared by every tokenizer built from it.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub(super) emit_newlines: bool,
    pub(super) comment: String,
    pub(super) string_delimiter: char,
    pub(super) escape: char,
    group_separator: Option<char>,
    radix_point: Option<char>,
    non_word: IndexSet<char>,
    whitespace: Regex,
    number: Regex,
    word: Regex,
}

impl Lexicon {
    pub fn new(syntax: &LexicalSyntax) -> Result<Self, BuildError> {
        if syntax.comment.is_empty() {
            return Err(BuildError::EmptyComment);
        }
        if syntax.string_delimiter == syntax.escape {
            return Err(BuildError::DelimiterIsEscape(syntax.escape));
        }

        let whitespace = Regex::new(r"\s+")?;
        let number = Regex::new(&number_pattern(syntax))?;
        let word = Regex::new(&word_pattern(syntax))?;

        log::debug!(
            "compiled lexicon: {} non-word characters, comment {:?}",
            syntax.non_word.len(),
            syntax.comment
        );

        Ok(Self {
            emit_newlines: syntax.emit_newlines,
            comment: syntax.comment.clone(),
            string_delimiter: syntax.string_delimiter,
            escape: syntax.escape,
            group_separator: syntax.group_separator,
            radix_point: syntax.radix_point,
            non_word: syntax.non_word.iter().copied().collect(),
            whitespace,
            number,
            word,
        })
    }

    pub fn is_non_word(&self, c: char) -> bool {
        self.non_word.contains(&c)
    }

    pub(super) fn whitespace_len(&self, text: &str) -> Option<usize> {
        match_prefix(&self.whitespace, text)
    }

    pub(super) fn number_len(&self, text: &str) -> Option<usize> {
        match_prefix(&self.number, text)
    }

    pub(super) fn word_len(&self, text: &str) -> Option<usize> {
        match_prefix(&self.word, text)
    }

    /// Strips grouping separators and decodes. `None` on integer overflow.
    pub(super) fn decode_number(&self, literal: &str) -> Option<TokenValue> {
        let canonical: String = literal
            .chars()
            .filter(|&c| Some(c) != self.group_separator)
            .collect();

        match self.radix_point {
            Some(radix) if canonical.contains(radix) => canonical
                .replace(radix, ".")
                .parse()
                .ok()
                .map(TokenValue::Float),
            _ => canonical.parse().ok().map(TokenValue::Integer),
        }
    }

    /// Maps the character following an escape.
    pub(super) fn unescape(&self, c: char) -> Option<char> {
        if c == self.escape || c == self.string_delimiter {
            return Some(c);
        }
        match c {
            'n' => Some('\n'),
            'r' => Some('\r'),
            'e' => Some('\x1B'),
            _ => None,
        }
    }
}

fn match_prefix(regex: &Regex, text: &str) -> Option<usize> {
    let input = Input::new(text).anchored(Anchored::Yes);
    regex
        .find(input)
        .map(|m| m.end())
        .filter(|&end| end > 0)
}

fn escape_chars(chars: impl IntoIterator<Item = char>) -> String {
    chars
        .into_iter()
        .map(|c| regex_syntax::escape(c.encode_utf8(&mut [0; 4])))
        .collect()
}

/// Digit runs with optional grouping, then an optional fractional part.
fn number_pattern(syntax: &LexicalSyntax) -> String {
    let digits = match syntax.group_separator {
        Some(sep) => format!("[0-9]+(?:{}[0-9]+)*", escape_chars([sep])),
        None => "[0-9]+".to_owned(),
    };
    match syntax.radix_point {
        Some(radix) => format!("{digits}(?:{}{digits})?", escape_chars([radix])),
        None => digits,
    }
}

/// Core-word runs joined by mid-word characters, with an optional end-word suffix run.
fn word_pattern(syntax: &LexicalSyntax) -> String {
    let excluded = escape_chars(
        syntax
            .non_word
            .iter()
            .copied()
            .chain(syntax.comment.chars())
            .chain([syntax.string_delimiter]),
    );
    let core = format!(r"[^\s{excluded}]+");

    let mut pattern = core.clone();
    if !syntax.mid_word.is_empty() {
        let mid = escape_chars(syntax.mid_word.iter().copied());
        pattern.push_str(&format!("(?:[{mid}]{core})*"));
    }
    if !syntax.end_word.is_empty() {
        let suffixes: Vec<String> = syntax
            .end_word
            .iter()
            .map(|&c| format!("{}+", escape_chars([c])))
            .collect();
        pattern.push_str(&format!("(?:{})?", suffixes.join("|")));
    }
    pattern
}
