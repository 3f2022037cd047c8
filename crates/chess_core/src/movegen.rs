use crate::attacks::{DIAGONALS, KING_STEPS, KNIGHT_STEPS, ORTHOGONALS};
use crate::board::{CastleSide, Position};
use crate::square::Square;
use crate::types::*;

/// Destinations reachable by the piece's movement pattern, ignoring king
/// safety. Never includes castling.
pub fn raw_destinations(pos: &Position, from: Square, piece: Piece, out: &mut Vec<Square>) {
    match piece.kind {
        PieceKind::Pawn => gen_pawn(pos, from, piece.color, out),
        PieceKind::Knight => gen_steps(pos, from, piece.color, &KNIGHT_STEPS, out),
        PieceKind::King => gen_steps(pos, from, piece.color, &KING_STEPS, out),
        PieceKind::Bishop => gen_slider(pos, from, piece.color, &DIAGONALS, out),
        PieceKind::Rook => gen_slider(pos, from, piece.color, &ORTHOGONALS, out),
        PieceKind::Queen => {
            gen_slider(pos, from, piece.color, &DIAGONALS, out);
            gen_slider(pos, from, piece.color, &ORTHOGONALS, out);
        }
    }
}

/// Raw destinations plus castling for kings.
pub fn pseudo_destinations(pos: &Position, from: Square, piece: Piece, out: &mut Vec<Square>) {
    raw_destinations(pos, from, piece, out);
    if piece.kind == PieceKind::King {
        gen_castle(pos, from, piece.color, out);
    }
}

/// Legal destinations for the piece on `from`, written into `out`.
///
/// Empty when the square is empty or holds a piece of the side not to move.
/// Each candidate is played on `pos` and taken back again; `pos` is unchanged
/// on return.
pub fn legal_destinations_into(pos: &mut Position, from: Square, out: &mut Vec<Square>) {
    out.clear();
    let piece = match pos.piece_at(from) {
        Some(p) if p.color == pos.turn => p,
        _ => return,
    };
    pseudo_destinations(pos, from, piece, out);

    out.retain(|&to| {
        // Kings are never captured; the game ends at checkmate instead.
        if pos.piece_at(to).is_some_and(|pc| pc.kind == PieceKind::King) {
            return false;
        }
        let undo = pos.apply(from, to, piece);
        let safe = !pos.in_check(piece.color);
        pos.revert(&undo);
        safe
    });
}

/// Every legal (from, to) pair for the side to move, cloning the position once.
pub fn legal_moves(pos: &Position) -> Vec<(Square, Square)> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Every legal (from, to) pair for the side to move, reusing `out`.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<(Square, Square)>) {
    out.clear();
    // Snapshot first: the probes below move pieces around on `pos`.
    let pieces: Vec<Square> = pos.board.pieces_of(pos.turn).map(|(sq, _)| sq).collect();
    let mut dests = Vec::with_capacity(32);
    for from in pieces {
        legal_destinations_into(pos, from, &mut dests);
        out.extend(dests.iter().map(|&to| (from, to)));
    }
}

/// True if the side to move has at least one legal move. Stops at the first.
pub fn has_legal_move(pos: &mut Position) -> bool {
    let pieces: Vec<Square> = pos.board.pieces_of(pos.turn).map(|(sq, _)| sq).collect();
    let mut dests = Vec::with_capacity(32);
    pieces.into_iter().any(|from| {
        legal_destinations_into(pos, from, &mut dests);
        !dests.is_empty()
    })
}

fn gen_pawn(pos: &Position, from: Square, c: Color, out: &mut Vec<Square>) {
    let dir = c.pawn_dir();

    // forward 1, then forward 2 from the home rank through an empty square
    if let Some(one) = from.offset(dir, 0)
        && !pos.board.is_occupied(one)
    {
        out.push(one);
        if from.row() == c.pawn_row()
            && let Some(two) = from.offset(2 * dir, 0)
            && !pos.board.is_occupied(two)
        {
            out.push(two);
        }
    }

    // captures + en-passant
    for d_col in [-1, 1] {
        if let Some(to) = from.offset(dir, d_col) {
            match pos.piece_at(to) {
                Some(pc) if pc.color != c => out.push(to),
                Some(_) => {}
                None if pos.en_passant_victim(from, to, c).is_some() => out.push(to),
                None => {}
            }
        }
    }
}

fn gen_steps(pos: &Position, from: Square, c: Color, steps: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in steps {
        if let Some(to) = from.offset(dr, dc) {
            match pos.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match pos.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

fn gen_castle(pos: &Position, from: Square, c: Color, out: &mut Vec<Square>) {
    let row = c.home_row();
    // Must be on the original king square
    if from != Square::at(row, 4) {
        return;
    }
    let sides = [CastleSide::KingSide, CastleSide::QueenSide];
    if !sides.iter().any(|&side| pos.castling.get(c, side)) {
        return;
    }
    // Can't castle out of check.
    if pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    for side in sides {
        if !pos.castling.get(c, side) {
            continue;
        }
        let rook_home = Square::at(row, side.rook_col());
        if pos.piece_at(rook_home) != Some(Piece::new(PieceKind::Rook, c)) {
            continue;
        }
        let clear = side
            .between_cols()
            .iter()
            .all(|&col| !pos.board.is_occupied(Square::at(row, col)));
        let safe = side
            .king_path_cols()
            .iter()
            .all(|&col| !pos.is_square_attacked(Square::at(row, col), enemy));
        if clear && safe {
            out.push(Square::at(row, side.king_dest_col()));
        }
    }
}
