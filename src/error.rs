use crate::word::WordError;
use std::io;
use thiserror::Error;

/// Failures that stop the game from starting or the terminal from working.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid secret word '{word}': {source}")]
    InvalidSecret {
        word: String,
        #[source]
        source: WordError,
    },

    #[error("word bank contains no five letter words")]
    EmptyWordbank,

    #[error("failed to initialise logger: {0}")]
    Logger(String),
}
