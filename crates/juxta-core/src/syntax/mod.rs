//! Syntax configuration types.
//!
//! This module provides the declarative description of a concrete language,
//! with JSON (de)serialization and a built-in default.

mod json;
mod types;


pub use json::SyntaxError;
pub use types::{DelimiterPair, Fixity, LexicalSyntax, OperatorLevel, OperatorSpec, Syntax};
