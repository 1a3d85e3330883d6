use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Console input ended")]
    EndOfInput
}
