#![allow(dead_code)]

use chess_core::{CastlingRights, Color, Engine, PieceKind, Position, Square};

pub fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Lay out a position from eight strings, rank 8 first, one character per
/// square: `.` for empty, letters as pieces (uppercase White).
pub fn diagram(rows: [&str; 8], turn: Color, castling: CastlingRights) -> Position {
    let mut builder = Position::builder().turn(turn).castling(castling);
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.chars().count(), 8, "row {row} must have eight squares");
        for (col, ch) in line.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = match ch.to_ascii_lowercase() {
                'k' => PieceKind::King,
                'q' => PieceKind::Queen,
                'r' => PieceKind::Rook,
                'b' => PieceKind::Bishop,
                'n' => PieceKind::Knight,
                'p' => PieceKind::Pawn,
                other => panic!("unknown piece letter {other:?}"),
            };
            let square = Square::new(row as u8, col as u8).unwrap();
            builder = builder.piece(square, kind, color);
        }
    }
    builder.build().unwrap()
}

/// Play a sequence of "e2e4"-style moves, asserting each one is accepted.
pub fn play(engine: &mut Engine, moves: &[&str]) {
    for mv in moves {
        let (from, to) = mv.split_at(2);
        assert!(engine.make_move(sq(from), sq(to)), "move {mv} should be legal");
    }
}
