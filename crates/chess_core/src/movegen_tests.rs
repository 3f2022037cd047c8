use super::*;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn dests(pos: &Position, from: &str) -> Vec<Square> {
    let mut tmp = pos.clone();
    let mut out = Vec::new();
    crate::movegen::legal_destinations_into(&mut tmp, sq(from), &mut out);
    assert_eq!(&tmp, pos, "probing must leave the position untouched");
    out.sort();
    out
}

fn squares(names: &[&str]) -> Vec<Square> {
    let mut v: Vec<Square> = names.iter().map(|n| sq(n)).collect();
    v.sort();
    v
}

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_home_rank_pawns_have_single_and_double_push() {
    let pos = Position::startpos();
    for file in ["a", "b", "c", "d", "e", "f", "g", "h"] {
        let from = format!("{file}2");
        let got = dests(&pos, &from);
        let one = format!("{file}3");
        let two = format!("{file}4");
        assert_eq!(got, squares(&[one.as_str(), two.as_str()]));
    }
}

#[test]
fn test_blocked_double_push() {
    let pos = Position::builder()
        .piece(sq("h1"), PieceKind::King, Color::White)
        .piece(sq("e8"), PieceKind::King, Color::Black)
        .piece(sq("d2"), PieceKind::Pawn, Color::White)
        .piece(sq("d4"), PieceKind::Knight, Color::Black)
        .piece(sq("c2"), PieceKind::Pawn, Color::White)
        .piece(sq("c3"), PieceKind::Bishop, Color::Black)
        .build()
        .unwrap();
    assert_eq!(dests(&pos, "d2"), squares(&["d3", "c3"]));
    // c3 is occupied and neither diagonal holds an enemy piece
    assert_eq!(dests(&pos, "c2"), Vec::<Square>::new());
}

#[test]
fn test_queenside_knight_has_two_moves() {
    let pos = Position::startpos();
    assert_eq!(dests(&pos, "b1"), squares(&["a3", "c3"]));
}

#[test]
fn test_slider_stops_at_first_piece() {
    let pos = Position::builder()
        .piece(sq("a1"), PieceKind::King, Color::White)
        .piece(sq("h8"), PieceKind::King, Color::Black)
        .piece(sq("d4"), PieceKind::Rook, Color::White)
        .piece(sq("d6"), PieceKind::Pawn, Color::Black)
        .piece(sq("f4"), PieceKind::Knight, Color::White)
        .build()
        .unwrap();
    assert_eq!(
        dests(&pos, "d4"),
        squares(&["d5", "d6", "d3", "d2", "d1", "c4", "b4", "a4", "e4"])
    );
}

#[test]
fn test_pinned_piece_keeps_only_moves_along_the_pin() {
    let pos = Position::builder()
        .piece(sq("e1"), PieceKind::King, Color::White)
        .piece(sq("e3"), PieceKind::Rook, Color::White)
        .piece(sq("e8"), PieceKind::Rook, Color::Black)
        .piece(sq("a8"), PieceKind::King, Color::Black)
        .build()
        .unwrap();
    assert_eq!(
        dests(&pos, "e3"),
        squares(&["e2", "e4", "e5", "e6", "e7", "e8"])
    );

    let pinned_knight = Position::builder()
        .piece(sq("e1"), PieceKind::King, Color::White)
        .piece(sq("e3"), PieceKind::Knight, Color::White)
        .piece(sq("e8"), PieceKind::Rook, Color::Black)
        .piece(sq("a8"), PieceKind::King, Color::Black)
        .build()
        .unwrap();
    assert!(dests(&pinned_knight, "e3").is_empty());
}

#[test]
fn test_en_passant_available_only_on_target() {
    let pos = Position::builder()
        .piece(sq("e1"), PieceKind::King, Color::White)
        .piece(sq("e8"), PieceKind::King, Color::Black)
        .piece(sq("e5"), PieceKind::Pawn, Color::White)
        .piece(sq("d5"), PieceKind::Pawn, Color::Black)
        .piece(sq("f5"), PieceKind::Pawn, Color::Black)
        .en_passant(Some(sq("d6")))
        .build()
        .unwrap();
    assert_eq!(dests(&pos, "e5"), squares(&["e6", "d6"]));
}

#[test]
fn test_en_passant_that_exposes_king_on_rank_is_illegal() {
    // Capturing e.p. removes both pawns from the fifth rank and opens the rook's line.
    let pos = Position::builder()
        .piece(sq("a5"), PieceKind::King, Color::White)
        .piece(sq("b5"), PieceKind::Pawn, Color::White)
        .piece(sq("c5"), PieceKind::Pawn, Color::Black)
        .piece(sq("h5"), PieceKind::Rook, Color::Black)
        .piece(sq("e8"), PieceKind::King, Color::Black)
        .en_passant(Some(sq("c6")))
        .build()
        .unwrap();
    assert_eq!(dests(&pos, "b5"), squares(&["b6"]));
}

#[test]
fn test_en_passant_needs_an_enemy_pawn_beside_the_mover() {
    // Target on the right rank, but d5 holds a White pawn and f5 a Black knight.
    let friendly = Position::builder()
        .piece(sq("e1"), PieceKind::King, Color::White)
        .piece(sq("e8"), PieceKind::King, Color::Black)
        .piece(sq("e5"), PieceKind::Pawn, Color::White)
        .piece(sq("d5"), PieceKind::Pawn, Color::White)
        .en_passant(Some(sq("d6")))
        .build()
        .unwrap();
    assert_eq!(dests(&friendly, "e5"), squares(&["e6"]));

    let knight = Position::builder()
        .piece(sq("e1"), PieceKind::King, Color::White)
        .piece(sq("e8"), PieceKind::King, Color::Black)
        .piece(sq("e5"), PieceKind::Pawn, Color::White)
        .piece(sq("f5"), PieceKind::Knight, Color::Black)
        .en_passant(Some(sq("f6")))
        .build()
        .unwrap();
    assert_eq!(dests(&knight, "e5"), squares(&["e6"]));
}

#[test]
fn test_pawn_attack_on_transit_square_blocks_castling() {
    // The g2 pawn's only threats are its diagonals f1 and h1.
    let pos = Position::builder()
        .piece(sq("e1"), PieceKind::King, Color::White)
        .piece(sq("a1"), PieceKind::Rook, Color::White)
        .piece(sq("h1"), PieceKind::Rook, Color::White)
        .piece(sq("e8"), PieceKind::King, Color::Black)
        .piece(sq("g2"), PieceKind::Pawn, Color::Black)
        .castling(CastlingRights::all())
        .build()
        .unwrap();
    assert!(pos.is_square_attacked(sq("f1"), Color::Black));
    assert!(!pos.is_square_attacked(sq("g1"), Color::Black), "a push square is not attacked");
    let got = dests(&pos, "e1");
    assert!(!got.contains(&sq("g1")));
    assert!(got.contains(&sq("c1")));
}

#[test]
fn test_castling_both_sides_when_clear() {
    let pos = Position::builder()
        .piece(sq("e1"), PieceKind::King, Color::White)
        .piece(sq("a1"), PieceKind::Rook, Color::White)
        .piece(sq("h1"), PieceKind::Rook, Color::White)
        .piece(sq("e8"), PieceKind::King, Color::Black)
        .castling(CastlingRights::all())
        .build()
        .unwrap();
    let got = dests(&pos, "e1");
    assert!(got.contains(&sq("g1")));
    assert!(got.contains(&sq("c1")));
}

#[test]
fn test_no_castling_through_attacked_square() {
    let pos = Position::builder()
        .piece(sq("e1"), PieceKind::King, Color::White)
        .piece(sq("a1"), PieceKind::Rook, Color::White)
        .piece(sq("h1"), PieceKind::Rook, Color::White)
        .piece(sq("e8"), PieceKind::King, Color::Black)
        .piece(sq("f8"), PieceKind::Rook, Color::Black)
        .castling(CastlingRights::all())
        .build()
        .unwrap();
    let got = dests(&pos, "e1");
    assert!(!got.contains(&sq("g1")), "f1 is attacked");
    assert!(got.contains(&sq("c1")));
}

#[test]
fn test_queenside_castling_ignores_attack_on_b_file() {
    let pos = Position::builder()
        .piece(sq("e1"), PieceKind::King, Color::White)
        .piece(sq("a1"), PieceKind::Rook, Color::White)
        .piece(sq("e8"), PieceKind::King, Color::Black)
        .piece(sq("b8"), PieceKind::Rook, Color::Black)
        .castling(CastlingRights::all())
        .build()
        .unwrap();
    assert!(dests(&pos, "e1").contains(&sq("c1")));
}

#[test]
fn test_no_castling_out_of_check_or_without_right() {
    let in_check = Position::builder()
        .piece(sq("e1"), PieceKind::King, Color::White)
        .piece(sq("h1"), PieceKind::Rook, Color::White)
        .piece(sq("e8"), PieceKind::King, Color::Black)
        .piece(sq("e5"), PieceKind::Rook, Color::Black)
        .castling(CastlingRights::all())
        .build()
        .unwrap();
    assert!(!dests(&in_check, "e1").contains(&sq("g1")));

    let no_right = Position::builder()
        .piece(sq("e1"), PieceKind::King, Color::White)
        .piece(sq("h1"), PieceKind::Rook, Color::White)
        .piece(sq("e8"), PieceKind::King, Color::Black)
        .build()
        .unwrap();
    assert!(!dests(&no_right, "e1").contains(&sq("g1")));
}

#[test]
fn test_king_capture_is_never_generated() {
    // Illegal position on purpose: Black is in check with White to move.
    let pos = Position::builder()
        .piece(sq("e1"), PieceKind::King, Color::White)
        .piece(sq("e2"), PieceKind::Rook, Color::White)
        .piece(sq("e8"), PieceKind::King, Color::Black)
        .build()
        .unwrap();
    assert!(!dests(&pos, "e2").contains(&sq("e8")));
}

#[test]
fn test_opponent_piece_has_no_moves() {
    let pos = Position::startpos();
    assert!(dests(&pos, "e7").is_empty());
    assert!(dests(&pos, "e4").is_empty());
}
