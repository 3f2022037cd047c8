//! Attack detection.
//!
//! Looks outward from the target square for a piece of the attacking color
//! that could reach it with its raw movement. Castling never attacks, so this
//! never calls back into castling generation.

use crate::board::Position;
use crate::square::Square;
use crate::types::*;

pub(crate) const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Position {
    /// True when the king of `color` stands on a square attacked by the other side.
    /// A missing king is never in check.
    pub fn in_check(&self, color: Color) -> bool {
        match self.board.king_square(color) {
            Some(ksq) => self.is_square_attacked(ksq, color.other()),
            None => false,
        }
    }

    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        let holds = |sq: Square, kinds: &[PieceKind]| {
            self.board
                .get(sq)
                .is_some_and(|pc| pc.color == by && kinds.contains(&pc.kind))
        };

        // Pawns attack diagonally forward, so look one step backwards from the target.
        let back = -by.pawn_dir();
        for d_col in [-1, 1] {
            if let Some(sq) = target.offset(back, d_col)
                && holds(sq, &[PieceKind::Pawn])
            {
                return true;
            }
        }

        for (dr, dc) in KNIGHT_STEPS {
            if let Some(sq) = target.offset(dr, dc)
                && holds(sq, &[PieceKind::Knight])
            {
                return true;
            }
        }

        for (dr, dc) in KING_STEPS {
            if let Some(sq) = target.offset(dr, dc)
                && holds(sq, &[PieceKind::King])
            {
                return true;
            }
        }

        let rays = [
            (&DIAGONALS, [PieceKind::Bishop, PieceKind::Queen]),
            (&ORTHOGONALS, [PieceKind::Rook, PieceKind::Queen]),
        ];
        for (dirs, sliders) in rays {
            for &(dr, dc) in dirs {
                let mut cur = target.offset(dr, dc);
                while let Some(sq) = cur {
                    if self.board.is_occupied(sq) {
                        if holds(sq, &sliders) {
                            return true;
                        }
                        break;
                    }
                    cur = sq.offset(dr, dc);
                }
            }
        }

        false
    }
}
