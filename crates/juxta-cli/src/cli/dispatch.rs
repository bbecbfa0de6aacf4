//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::input::Input;
use crate::commands::parse::ParseArgs;
use crate::commands::tokens::TokensArgs;

pub struct TokensParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub syntax: Option<PathBuf>,
    pub values: bool,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            syntax: m.get_one::<PathBuf>("syntax").cloned(),
            values: m.get_flag("values"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input: input(p.source_path, p.source_text),
            syntax: p.syntax,
            values: p.values,
        }
    }
}

pub struct ParseParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub syntax: Option<PathBuf>,
    pub show_tokens: bool,
    pub color: ColorChoice,
}

impl ParseParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            syntax: m.get_one::<PathBuf>("syntax").cloned(),
            show_tokens: m.get_flag("show_tokens"),
            color: parse_color(m),
        }
    }
}

impl From<ParseParams> for ParseArgs {
    fn from(p: ParseParams) -> Self {
        Self {
            input: input(p.source_path, p.source_text),
            syntax: p.syntax,
            show_tokens: p.show_tokens,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Inline text wins; a missing or `-` path means stdin.
fn input(path: Option<PathBuf>, text: Option<String>) -> Input {
    match (text, path) {
        (Some(text), _) => Input::Text(text),
        (None, Some(path)) if path.as_os_str() != "-" => Input::File(path),
        (None, _) => Input::Stdin,
    }
}
