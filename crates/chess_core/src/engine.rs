//! The rules authority that collaborators talk to.
//!
//! `Engine` owns one game's state. Queries take `&self` and probe legality on
//! a private scratch copy of the position, so no caller can observe a board
//! in the middle of a simulation.

use std::collections::BTreeSet;

use tracing::debug;

use crate::board::{Board, CastlingRights, MoveRecord, Position, Special};
use crate::movegen;
use crate::perft::perft;
use crate::square::Square;
use crate::types::*;

/// Why a game ended level without stalemate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    FiftyMoveRule,
    InsufficientMaterial,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The side to move is in check but has a way out.
    Check(Color),
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::Draw(_)
        )
    }
}

/// Position plus the moves that led to it.
#[derive(Clone, Debug, Default)]
pub struct GameState {
    position: Position,
    history: Vec<MoveRecord>,
}

impl GameState {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            history: Vec::new(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
}

#[derive(Clone, Debug, Default)]
pub struct Engine {
    state: GameState,
}

impl Engine {
    /// A fresh game from the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    /// Start from a custom position, e.g. one assembled with [`Position::builder`].
    pub fn from_position(position: Position) -> Self {
        Self {
            state: GameState::new(position),
        }
    }

    /// Discard everything and set up the starting position again.
    pub fn new_game(&mut self) {
        self.state = GameState::default();
        debug!("new game");
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn position(&self) -> &Position {
        &self.state.position
    }
    pub fn board(&self) -> &Board {
        &self.state.position.board
    }
    pub fn history(&self) -> &[MoveRecord] {
        &self.state.history
    }
    pub fn turn(&self) -> Color {
        self.state.position.turn
    }
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.state.position.piece_at(sq)
    }
    pub fn castling_rights(&self) -> CastlingRights {
        self.state.position.castling
    }
    pub fn en_passant_target(&self) -> Option<Square> {
        self.state.position.en_passant
    }
    pub fn halfmove_clock(&self) -> u32 {
        self.state.position.halfmove_clock
    }
    pub fn fullmove_number(&self) -> u32 {
        self.state.position.fullmove_number
    }

    /// Legal destinations for the piece on `sq`. Empty for an empty square or
    /// a piece of the side not to move.
    pub fn get_legal_moves(&self, sq: Square) -> BTreeSet<Square> {
        let mut scratch = self.state.position.clone();
        let mut out = Vec::with_capacity(32);
        movegen::legal_destinations_into(&mut scratch, sq, &mut out);
        out.into_iter().collect()
    }

    /// Every legal (from, to) pair for the side to move, in board order.
    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        movegen::legal_moves(&self.state.position)
    }

    pub fn has_legal_move(&self) -> bool {
        let mut scratch = self.state.position.clone();
        movegen::has_legal_move(&mut scratch)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.state.position.in_check(color)
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.turn()) && !self.has_legal_move()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.turn()) && !self.has_legal_move()
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.state.position.is_fifty_move_draw()
    }

    pub fn is_insufficient_material(&self) -> bool {
        self.state.position.is_insufficient_material()
    }

    /// Fifty-move rule, insufficient material, or stalemate.
    pub fn is_draw(&self) -> bool {
        self.is_fifty_move_draw() || self.is_insufficient_material() || self.is_stalemate()
    }

    pub fn status(&self) -> GameStatus {
        let mover = self.turn();
        let in_check = self.is_in_check(mover);
        if !self.has_legal_move() {
            return if in_check {
                GameStatus::Checkmate {
                    winner: mover.other(),
                }
            } else {
                GameStatus::Stalemate
            };
        }
        if self.is_fifty_move_draw() {
            GameStatus::Draw(DrawReason::FiftyMoveRule)
        } else if self.is_insufficient_material() {
            GameStatus::Draw(DrawReason::InsufficientMaterial)
        } else if in_check {
            GameStatus::Check(mover)
        } else {
            GameStatus::InProgress
        }
    }

    /// Play `from -> to` if it is legal. Returns false and leaves everything
    /// untouched otherwise, including once the game is drawn.
    pub fn make_move(&mut self, from: Square, to: Square) -> bool {
        if self.is_fifty_move_draw() || self.is_insufficient_material() {
            debug!(%from, %to, "move rejected: game already drawn");
            return false;
        }
        if !self.get_legal_moves(from).contains(&to) {
            debug!(%from, %to, "move rejected: not legal");
            return false;
        }
        let Some(piece) = self.piece_at(from) else {
            return false;
        };

        let undo = self.state.position.apply(from, to, piece);
        let record = undo.record;
        match record.special {
            Special::Castle { rook_from, rook_to } => {
                debug!(%rook_from, %rook_to, "castling rook relocated")
            }
            Special::EnPassant { captured_on } => debug!(%captured_on, "en passant capture"),
            Special::Promotion => debug!(%to, "pawn promoted to queen"),
            Special::None => {}
        }
        self.state.history.push(record);
        debug!(
            %from,
            %to,
            piece = %piece,
            captured = record.captured.map(|c| c.kind.name()),
            ply = self.state.history.len(),
            "move played"
        );
        true
    }

    /// Take back the last move: pieces go back where they were and the turn
    /// flips. Castling rights, the en-passant target and both move counters
    /// are left as they are.
    pub fn undo_last_move(&mut self) -> Option<MoveRecord> {
        let record = self.state.history.pop()?;
        let position = &mut self.state.position;
        position.unplace(&record);
        position.turn = position.turn.other();
        debug!(from = %record.from, to = %record.to, "move undone");
        Some(record)
    }

    /// Leaf count of the legal move tree, for checking move generation.
    pub fn perft(&self, depth: u8) -> u64 {
        let mut scratch = self.state.position.clone();
        perft(&mut scratch, depth)
    }
}
