use std::path::PathBuf;

use chess_core::Color;
use clap::Parser;

use crate::config::{ConsoleConfig, Mode};

/// Play chess in the terminal.
///
/// Flags override values from the config file.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "chess_console", version, about)]
pub struct Cli {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Side you play against the computer: white or black
    #[arg(long, value_parser = parse_color)]
    pub color: Option<Color>,

    /// Draw pieces with ASCII letters instead of chess symbols
    #[arg(long)]
    pub ascii: bool,

    /// Seed for the computer's tie-breaking
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ply cap for self-play
    #[arg(long)]
    pub max_plies: Option<u32>,

    /// Write a JSON game record here when the session ends
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "chess_core=debug" (defaults to RUST_LOG, then "warn")
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn apply_to(&self, config: &mut ConsoleConfig) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(color) = self.color {
            config.human_color = color;
        }
        if self.ascii {
            config.glyphs = false;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_plies) = self.max_plies {
            config.max_plies = max_plies;
        }
        if let Some(path) = &self.record {
            config.record = Some(path.clone());
        }
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        other => Err(format!("expected white or black, got {other:?}")),
    }
}
