//! Parse a source line by line and print one tree outline per line.

use std::io::{self, Write};
use std::path::PathBuf;

use juxta_lib::{Frontend, LexError, Tokenizer};

use super::exit_with;
use super::input::{Input, load_frontend};

pub struct ParseArgs {
    pub input: Input,
    pub syntax: Option<PathBuf>,
    pub show_tokens: bool,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LinesError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Rendering options shared by every line.
#[derive(Debug, Clone, Default)]
pub struct LineOptions {
    pub show_tokens: bool,
    pub color: bool,
    pub name: Option<String>,
}

pub fn run(args: ParseArgs) {
    let frontend = load_frontend(args.syntax.as_deref()).unwrap_or_else(|err| exit_with(err));
    let options = LineOptions {
        show_tokens: args.show_tokens,
        color: args.color,
        name: args.input.name(),
    };
    let mut tokenizer = args
        .input
        .tokenizer(&frontend)
        .unwrap_or_else(|err| exit_with(err));

    let failed = parse_lines(
        &frontend,
        &mut tokenizer,
        &options,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
    .unwrap_or_else(|err| exit_with(err));
    if failed > 0 {
        std::process::exit(1);
    }
}

/// Parses each non-blank line as its own expression.
///
/// Outlines go to `out`, failures to `err`. Returns the number of lines that failed.
pub fn parse_lines(
    frontend: &Frontend,
    tokenizer: &mut Tokenizer<'_>,
    options: &LineOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<usize, LinesError> {
    let mut parsed = 0usize;
    let mut failed = 0usize;

    while let Some(line) = tokenizer.read_line()? {
        if line.is_empty() {
            continue;
        }
        if parsed > 0 {
            writeln!(out)?;
        }

        if options.show_tokens {
            for token in &line {
                writeln!(out, "{token}")?;
            }
            writeln!(out)?;
        }

        let failure = match frontend.parse(line) {
            Ok(tree) => {
                parsed += 1;
                write!(out, "{}", tree.dump())?;
                out.flush()?;
                continue;
            }
            Err(failure) => failure,
        };

        failed += 1;
        let mut printer = failure
            .printer()
            .source(tokenizer.log())
            .colored(options.color);
        if let Some(name) = &options.name {
            printer = printer.path(name);
        }
        write!(err, "{}", printer.render())?;
    }

    log::debug!("parsed {parsed} lines, {failed} failed");
    Ok(failed)
}
