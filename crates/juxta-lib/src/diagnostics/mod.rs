//! Presentation of parse failures against their source text.
//!
//! The parser only produces [`ParseFailure`](crate::ParseFailure) values; rendering them
//! is left to [`FailurePrinter`], which underlines the highlighted span when it fits on
//! one line.

mod printer;


pub use printer::FailurePrinter;
