use std::path::PathBuf;

use chess_core::SquareParseError;
use thiserror::Error;

/// A line of player input that is not a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}, type \"help\" for a list")]
    Unknown(String),

    #[error("\"{0}\" needs a square, e.g. \"{0} e2\"")]
    MissingSquare(&'static str),

    #[error(transparent)]
    Square(#[from] SquareParseError),
}

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to write game record: {0}")]
    Record(#[from] serde_json::Error),

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
}
