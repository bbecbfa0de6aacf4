pub mod input;
pub mod parse;
pub mod tokens;


use std::fmt::Display;

/// Prints `error: <err>` and exits with status 1.
pub fn exit_with(err: impl Display) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
