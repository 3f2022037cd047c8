//! Error types for chess_core.
//!
//! The rules themselves never fail: illegal moves and off-board arithmetic
//! are ordinary negative results. These errors only cover text input and
//! hand-assembled positions.

use thiserror::Error;

use crate::square::Square;
use crate::types::Color;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("expected a square like \"e4\", got {0:?}")]
    Length(String),

    #[error("file must be a-h, got {0:?}")]
    File(char),

    #[error("rank must be 1-8, got {0:?}")]
    Rank(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("{color} has {count} kings, expected exactly one")]
    KingCount { color: Color, count: usize },

    #[error("{color} pawn on {square} cannot stand on a back rank")]
    PawnOnBackRank { color: Color, square: Square },

    #[error("en-passant target {square} is not on the square a {pusher} double push skips")]
    EnPassantRank { square: Square, pusher: Color },
}
