#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core configuration data for the juxta front-end.
//!
//! Everything a concrete language tunes lives here as plain data:
//! - **Lexical layer**: comment marker, string delimiter, escape character,
//!   numeric separators and the word/non-word character classes
//! - **Grammar layer**: ordered operator-precedence levels and delimiter pairs
//!
//! The data is loaded once (from JSON or [`Syntax::default`]) and compiled by
//! `juxta-lib` into the tokenizer's matchers and the parser's operator table.

pub mod syntax;

pub use syntax::{
    DelimiterPair, Fixity, LexicalSyntax, OperatorLevel, OperatorSpec, Syntax, SyntaxError,
};
