//! Loading of source text and syntax definitions.

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use juxta_core::{Syntax, SyntaxError};
use juxta_lib::{BuildError, Frontend, Tokenizer};

/// Where the text to tokenize comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Text(String),
    File(PathBuf),
    /// Streamed line by line through the tokenizer's continuation source.
    Stdin,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("invalid syntax file '{path}': {source}")]
    Syntax { path: String, source: SyntaxError },

    #[error("unusable syntax: {0}")]
    Build(#[from] BuildError),
}

impl Input {
    /// Name shown in diagnostics.
    pub fn name(&self) -> Option<String> {
        match self {
            Input::Text(_) => None,
            Input::File(path) => Some(path.display().to_string()),
            Input::Stdin => Some("<stdin>".to_owned()),
        }
    }

    pub fn tokenizer(self, frontend: &Frontend) -> Result<Tokenizer<'_>, InputError> {
        match self {
            Input::Text(text) => Ok(frontend.tokenizer(text)),
            Input::File(path) => Ok(frontend.tokenizer(read(&path)?)),
            Input::Stdin => Ok(frontend.tokenizer_with_source(String::new(), stdin_lines())),
        }
    }
}

/// Frontend for the syntax file at `path`, or the built-in syntax.
pub fn load_frontend(path: Option<&Path>) -> Result<Frontend, InputError> {
    let Some(path) = path else {
        return Ok(Frontend::standard());
    };
    let json = read(path)?;
    let syntax = Syntax::from_json(&json).map_err(|source| InputError::Syntax {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("loaded syntax from {}", path.display());
    Ok(Frontend::new(&syntax)?)
}

fn read(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.display().to_string(),
        source,
    })
}

fn stdin_lines() -> impl FnMut() -> Option<String> {
    let stdin = io::stdin();
    move || {
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(err) => {
                log::warn!("stopped reading stdin: {err}");
                None
            }
        }
    }
}
