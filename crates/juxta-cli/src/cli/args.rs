//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Source file (positional). `-` reads stdin line by line.
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("SOURCE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("source_text")
        .help("Source file to read (use \"-\" for stdin)")
}

/// Inline source text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .help("Inline source text")
}

/// Syntax configuration file (--syntax).
pub fn syntax_arg() -> Arg {
    Arg::new("syntax")
        .long("syntax")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON syntax definition (built-in syntax if omitted)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Show decoded token values (--values).
pub fn values_arg() -> Arg {
    Arg::new("values")
        .long("values")
        .action(ArgAction::SetTrue)
        .help("Show decoded values next to each token")
}

/// Print the token stream before the tree (--tokens).
pub fn show_tokens_arg() -> Arg {
    Arg::new("show_tokens")
        .long("tokens")
        .action(ArgAction::SetTrue)
        .help("Print the token stream before the tree")
}
