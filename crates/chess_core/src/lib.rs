pub mod attacks;
pub mod board;
pub mod engine;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod square;
pub mod types;

#[cfg(test)]
mod movegen_tests;

// Re-export core game logic (not policy-specific)
pub use board::*;
pub use engine::*;
pub use error::*;
pub use movegen::{legal_moves, legal_moves_into};
pub use perft::perft;
pub use square::Square;
pub use types::*;

// =============================================================================
// MovePolicy trait: implemented by automated opponents
// =============================================================================

/// Something that picks a move for the side to move.
///
/// Policies only see the engine's public query surface; they never mutate the
/// game themselves. The caller plays the returned move with
/// [`Engine::make_move`].
pub trait MovePolicy {
    /// Pick a legal (from, to) pair, or `None` when the side to move has no
    /// legal move.
    fn choose_move(&mut self, engine: &Engine) -> Option<(Square, Square)>;

    /// Short display name for menus and logs.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
