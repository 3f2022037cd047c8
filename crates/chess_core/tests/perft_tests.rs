mod common;

use chess_core::{CastlingRights, Color, Engine, Position, perft};

use common::diagram;

fn kiwipete() -> Position {
    diagram(
        [
            "r...k..r", //
            "p.ppqpb.", //
            "bn..pnp.", //
            "...PN...", //
            ".p..P...", //
            "..N..Q.p", //
            "PPPBBPPP", //
            "R...K..R",
        ],
        Color::White,
        CastlingRights::all(),
    )
}

/// Rook-and-pawn endgame with en-passant discoveries along the fifth rank.
fn endgame() -> Position {
    diagram(
        [
            "........", //
            "..p.....", //
            "...p....", //
            "KP.....r", //
            ".R...p.k", //
            "........", //
            "....P.P.", //
            "........",
        ],
        Color::White,
        CastlingRights::none(),
    )
}

#[test]
fn perft_startpos() {
    let mut pos = Position::startpos();
    assert_eq!(perft(&mut pos, 1), 20);
    assert_eq!(perft(&mut pos, 2), 400);
    assert_eq!(perft(&mut pos, 3), 8_902);
    assert_eq!(pos, Position::startpos(), "perft must leave the position untouched");
}

#[test]
fn perft_kiwipete() {
    let mut pos = kiwipete();
    assert_eq!(perft(&mut pos, 1), 48);
    assert_eq!(perft(&mut pos, 2), 2_039);
}

#[test]
fn perft_endgame() {
    let mut pos = endgame();
    assert_eq!(perft(&mut pos, 1), 14);
    assert_eq!(perft(&mut pos, 2), 191);
    assert_eq!(perft(&mut pos, 3), 2_812);
}

#[test]
fn engine_perft_matches_free_function() {
    let engine = Engine::new();
    assert_eq!(engine.perft(2), 400);
    assert!(engine.history().is_empty());
}
