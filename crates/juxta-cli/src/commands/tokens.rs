//! Print the token stream of a source.

use std::path::PathBuf;

use juxta_lib::TokenValue;

use super::exit_with;
use super::input::{Input, load_frontend};

pub struct TokensArgs {
    pub input: Input,
    pub syntax: Option<PathBuf>,
    pub values: bool,
}

pub fn run(args: TokensArgs) {
    let frontend = load_frontend(args.syntax.as_deref()).unwrap_or_else(|err| exit_with(err));
    let tokenizer = args
        .input
        .tokenizer(&frontend)
        .unwrap_or_else(|err| exit_with(err));

    // Printed as they arrive so stdin input streams.
    for result in tokenizer {
        let token = result.unwrap_or_else(|err| exit_with(err));
        if args.values && token.value != TokenValue::None {
            println!("{token} = {}", token.value);
        } else {
            println!("{token}");
        }
    }
}
