//! Syntax type definitions.

use serde::{Deserialize, Serialize};

/// Complete configuration of a concrete language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Syntax {
    /// Character classes and literal rules used by the tokenizer.
    pub lexical: LexicalSyntax,
    /// Precedence levels, loosest-binding first.
    pub operators: Vec<OperatorLevel>,
    /// Bracket pairs recognized by the delimiter resolver.
    pub delimiters: Vec<DelimiterPair>,
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            lexical: LexicalSyntax::default(),
            operators: default_operators(),
            delimiters: default_delimiters(),
        }
    }
}

/// Character classes and literal rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalSyntax {
    /// Emit a `newline` token for whitespace runs containing a line break.
    pub emit_newlines: bool,
    /// Marker that starts a comment running to the end of the line. May be several characters.
    pub comment: String,
    pub string_delimiter: char,
    /// Escape character inside string literals.
    pub escape: char,
    /// Digit grouping separator (`1'000`). `None` disables grouping.
    pub group_separator: Option<char>,
    /// `None` restricts numeric literals to integers.
    pub radix_point: Option<char>,
    /// Characters that may join two runs of word characters (`foo-bar`).
    pub mid_word: Vec<char>,
    /// Characters that may trail a word as a suffix run (`done?`, `x''`).
    pub end_word: Vec<char>,
    /// Characters lexed as single-character symbols.
    pub non_word: Vec<char>,
}

impl Default for LexicalSyntax {
    fn default() -> Self {
        Self {
            emit_newlines: true,
            comment: "#".to_owned(),
            string_delimiter: '"',
            escape: '\\',
            group_separator: Some('\''),
            radix_point: Some('.'),
            mid_word: vec!['-'],
            end_word: vec!['!', '?', '\''],
            non_word: vec![
                ':', ';', '.', ',', '=', '|', '&', '*', '+', '-', '/', '!', '?', '^', '@', '~',
                '%', '$', '`', '<', '>', '×', '÷', 'λ', 'Σ', 'Π', '_', '\'', '(', ')', '[',
                ']', '{', '}', '\\',
            ],
        }
    }
}

/// Operator position and, for binary operators, associativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fixity {
    /// One operand after the operator, e.g. `-x`.
    Prefix,
    /// One operand before the operator, e.g. `x?`.
    Postfix,
    /// Binary, grouping `a - b - c` as `(a - b) - c`.
    Left,
    /// Binary, grouping `a ^ b ^ c` as `a ^ (b ^ c)`.
    Right,
}

impl Fixity {
    pub fn is_binary(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// One precedence level: every operator in it shares rank and fixity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorLevel {
    pub fixity: Fixity,
    pub operators: Vec<OperatorSpec>,
}

impl OperatorLevel {
    pub fn new(fixity: Fixity, operators: Vec<OperatorSpec>) -> Self {
        Self { fixity, operators }
    }
}

/// An operator spelling and the label of the trees it builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorSpec {
    /// `None` denotes implicit application (juxtaposition).
    #[serde(default)]
    pub symbol: Option<String>,
    pub name: String,
}

impl OperatorSpec {
    pub fn symbol(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            name: name.into(),
        }
    }

    pub fn application(name: impl Into<String>) -> Self {
        Self {
            symbol: None,
            name: name.into(),
        }
    }

    pub fn is_application(&self) -> bool {
        self.symbol.is_none()
    }
}

/// A bracket pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterPair {
    pub open: char,
    pub close: char,
    /// Label of the wrapping tree, also used as failure context.
    pub name: String,
    /// Transparent pairs only group; their interior replaces them unwrapped.
    #[serde(default)]
    pub transparent: bool,
}

impl DelimiterPair {
    pub fn new(open: char, close: char, name: impl Into<String>, transparent: bool) -> Self {
        Self {
            open,
            close,
            name: name.into(),
            transparent,
        }
    }
}

fn default_delimiters() -> Vec<DelimiterPair> {
    vec![
        DelimiterPair::new('(', ')', "parentheses", true),
        DelimiterPair::new('[', ']', "brackets", false),
        DelimiterPair::new('{', '}', "braces", false),
    ]
}

fn level(fixity: Fixity, ops: &[(&str, &str)]) -> OperatorLevel {
    let operators = ops
        .iter()
        .map(|(symbol, name)| OperatorSpec::symbol(*symbol, *name))
        .collect();
    OperatorLevel::new(fixity, operators)
}

fn default_operators() -> Vec<OperatorLevel> {
    use Fixity::{Left, Postfix, Prefix, Right};

    vec![
        level(Left, &[(";", "sem2")]),
        level(Right, &[("<-", "assn2")]),
        level(Right, &[(":=", "def2")]),
        level(Left, &[(",", "com2")]),
        level(Left, &[(":", "typ2")]),
        level(Right, &[("$", "seq2")]),
        level(Right, &[("||", "lor2")]),
        level(Right, &[("&&", "land2")]),
        level(Left, &[("=", "eq2"), ("==", "deq2"), ("!=", "neq2")]),
        level(Left, &[(">=", "geq2"), ("<=", "leq2"), (">", "gt2"), ("<", "lt2")]),
        level(Right, &[("++", "cat2"), ("::", "cons2")]),
        level(Left, &[("|", "or2"), ("~", "xor2")]),
        level(Left, &[("&", "and2")]),
        level(Left, &[("+", "plus2"), ("-", "minus2")]),
        level(Left, &[("*", "mul2"), ("/", "div2"), ("%", "mod2")]),
        level(Prefix, &[("+", "plus1"), ("-", "minus1"), ("!", "not1")]),
        level(Right, &[("^", "expo2")]),
        OperatorLevel::new(Left, vec![OperatorSpec::application("appl2")]),
        level(Postfix, &[("?", "opt1")]),
        level(Left, &[(".", "dot2")]),
    ]
}
