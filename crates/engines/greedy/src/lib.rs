//! Greedy Capture Chess Engine
//!
//! Looks one ply ahead and nothing more: every legal move is scored by the
//! material value of the piece standing on its destination square, and the
//! policy picks uniformly at random among the best-scoring moves.
//!
//! There is no search and no positional evaluation, so it hangs pieces freely.
//! It makes a light automated opponent and exercises move generation.

use chess_core::{Engine, MovePolicy, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;


/// A scored candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub from: Square,
    pub to: Square,
    pub score: u32,
}

/// Material value of whatever stands on `to`; zero for an empty square.
///
/// An en-passant capture lands on an empty square and therefore scores zero.
pub fn capture_value(engine: &Engine, to: Square) -> u32 {
    engine.piece_at(to).map_or(0, |pc| pc.kind.value())
}

/// Every legal move for the side to move, with its capture score.
pub fn score_moves(engine: &Engine) -> Vec<ScoredMove> {
    engine
        .legal_moves()
        .into_iter()
        .map(|(from, to)| ScoredMove {
            from,
            to,
            score: capture_value(engine, to),
        })
        .collect()
}

/// A policy that grabs the most valuable capture available.
#[derive(Debug, Clone)]
pub struct GreedyEvaluator {
    rng: StdRng,
}

impl Default for GreedyEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl GreedyEvaluator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible tie-breaking, for tests and replayable self-play.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick among the highest-scoring moves, or `None` if there are no legal moves.
    pub fn choose_move(&mut self, engine: &Engine) -> Option<(Square, Square)> {
        let scored = score_moves(engine);
        let best = scored.iter().map(|m| m.score).max()?;
        let ties: Vec<&ScoredMove> = scored.iter().filter(|m| m.score == best).collect();
        let pick = ties.choose(&mut self.rng)?;

        debug!(
            from = %pick.from,
            to = %pick.to,
            score = pick.score,
            candidates = scored.len(),
            ties = ties.len(),
            "greedy move chosen"
        );
        Some((pick.from, pick.to))
    }
}

impl MovePolicy for GreedyEvaluator {
    fn choose_move(&mut self, engine: &Engine) -> Option<(Square, Square)> {
        GreedyEvaluator::choose_move(self, engine)
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }
}
