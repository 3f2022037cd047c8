//! Perft timing for profiling move generation.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_core -- [depth]
//!
//! Works with cargo-flamegraph as well (release builds keep debug symbols).

use chess_core::{perft, Color, PieceKind, Position, Square};
use std::env;
use std::time::{Duration, Instant};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Rook-and-pawn endgame with en passant and discovered checks along rank 5.
fn rook_endgame() -> Position {
    let pieces = [
        ("a5", PieceKind::King, Color::White),
        ("b5", PieceKind::Pawn, Color::White),
        ("b4", PieceKind::Rook, Color::White),
        ("e2", PieceKind::Pawn, Color::White),
        ("g2", PieceKind::Pawn, Color::White),
        ("h4", PieceKind::King, Color::Black),
        ("h5", PieceKind::Rook, Color::Black),
        ("c7", PieceKind::Pawn, Color::Black),
        ("d6", PieceKind::Pawn, Color::Black),
        ("f4", PieceKind::Pawn, Color::Black),
    ];
    pieces
        .iter()
        .fold(Position::builder(), |b, &(name, kind, color)| {
            b.piece(sq(name), kind, color)
        })
        .build()
        .unwrap()
}

fn main() {
    let depth: u8 = env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    let positions = [
        ("Starting position", Position::startpos()),
        ("Rook endgame", rook_endgame()),
    ];

    println!("=== Perft Benchmark ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, mut pos) in positions {
        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&mut pos, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;
        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)", nps(nodes, elapsed));
    }

    println!();
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { nodes as f64 / secs } else { 0.0 }
}
