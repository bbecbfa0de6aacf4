//! Command builders for the CLI.

use clap::Command;

use super::args::*;

fn with_input_args(cmd: Command) -> Command {
    cmd.arg(source_path_arg())
        .arg(source_text_arg())
        .arg(syntax_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("juxta")
        .about("Configurable tokenizer and operator-precedence parser")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tokens_command())
        .subcommand(parse_command())
}

/// Print the token stream of a source.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Print one token per line")
        .after_help(
            r#"EXAMPLES:
  juxta tokens app.jx
  juxta tokens -s "x := 1'000.5"
  cat app.jx | juxta tokens -
  juxta tokens app.jx --syntax lisp.json --values"#,
        );
    with_input_args(cmd).arg(values_arg())
}

/// Parse a source into a tree outline.
pub fn parse_command() -> Command {
    let cmd = Command::new("parse")
        .about("Parse each line as one expression and print its tree outline")
        .after_help(
            r#"EXAMPLES:
  juxta parse app.jx
  juxta parse -s 'f x + 1'
  juxta parse -s '[(1 +)]' --color never
  juxta parse app.jx --tokens"#,
        );
    with_input_args(cmd).arg(color_arg()).arg(show_tokens_arg())
}
