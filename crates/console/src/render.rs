//! Text rendering of the board.

use std::collections::BTreeSet;

use chess_core::{Board, Square};

const FILES: &str = "    a  b  c  d  e  f  g  h";

/// Draw `board` with rank 8 at the top.
///
/// Each square is three columns wide. Squares in `highlights` are bracketed,
/// so a capture shows as `[♟]` and a quiet destination as `[ ]`.
pub fn render_board(board: &Board, highlights: &BTreeSet<Square>, glyphs: bool) -> String {
    let mut out = String::with_capacity(512);
    out.push_str(FILES);
    out.push('\n');

    let squares: Vec<Square> = Square::all().collect();
    for rank_squares in squares.chunks(8) {
        let rank = 8 - rank_squares[0].row();
        out.push_str(&format!("{rank} "));
        for &sq in rank_squares {
            let symbol = match board.get(sq) {
                Some(pc) if glyphs => pc.glyph(),
                Some(pc) => pc.letter(),
                None if (sq.row() + sq.col()) % 2 == 0 => ' ',
                None => '.',
            };
            let (open, close) = if highlights.contains(&sq) {
                ('[', ']')
            } else {
                (' ', ' ')
            };
            out.push(open);
            out.push(symbol);
            out.push(close);
        }
        out.push_str(&format!(" {rank}\n"));
    }

    out.push_str(FILES);
    out.push('\n');
    out
}
