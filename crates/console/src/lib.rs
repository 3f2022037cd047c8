//! Terminal front-end for the chess rules engine.
//!
//! Everything here talks to [`chess_core::Engine`] through its public query
//! and move surface; the rules live in `chess_core`.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod record;
pub mod render;
pub mod session;

#[cfg(test)]
mod config_tests;

pub use cli::Cli;
pub use command::{parse_command, Command};
pub use config::{ConsoleConfig, Mode};
pub use error::{CommandError, ConsoleError};
pub use record::{GameRecord, MoveKind, RecordedMove};
pub use render::render_board;
pub use session::{Session, SessionEnd};
