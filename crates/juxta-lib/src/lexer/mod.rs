//! Incremental tokenizer over a possibly-growing text stream.
//!
//! # Architecture
//!
//! - [`Lexicon`]: character classes compiled once from a [`juxta_core::LexicalSyntax`]
//! - [`Tokenizer`]: pull-based scanner producing one [`Token`](crate::Token) per call
//! - [`Source`]: continuation supplier consulted whenever buffered text runs out
//! - [`TokenBuffer`]: lazy, index-addressable cache over a tokenizer
//!
//! Positions are tracked across continuation chunks without discontinuity: every
//! consumed character advances the line/column state exactly once.

mod buffer;
mod error;
mod lexicon;
mod source;
mod tokenizer;

#[cfg(test)]
mod tokenizer_tests;

pub use buffer::TokenBuffer;
pub use error::{BufferError, LexError};
pub use lexicon::Lexicon;
pub use source::{Chunks, Source};
pub use tokenizer::Tokenizer;
