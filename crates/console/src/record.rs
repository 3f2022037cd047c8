//! JSON record of a finished session.

use std::path::Path;

use chess_core::{Color, MoveRecord, PieceKind, Special, Square};
use serde::{Deserialize, Serialize};

use crate::config::Mode;
use crate::error::ConsoleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    Normal,
    Castle,
    EnPassant,
    Promotion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    pub ply: usize,
    pub color: Color,
    pub piece: PieceKind,
    pub from: Square,
    pub to: Square,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub captured: Option<PieceKind>,
    pub kind: MoveKind,
}

impl RecordedMove {
    pub fn new(ply: usize, record: &MoveRecord) -> Self {
        let kind = match record.special {
            Special::None => MoveKind::Normal,
            Special::Castle { .. } => MoveKind::Castle,
            Special::EnPassant { .. } => MoveKind::EnPassant,
            Special::Promotion => MoveKind::Promotion,
        };
        Self {
            ply,
            color: record.piece.color,
            piece: record.piece.kind,
            from: record.from,
            to: record.to,
            captured: record.captured.map(|pc| pc.kind),
            kind,
        }
    }

    /// `N. e2 → e4`, numbered by ply.
    pub fn history_line(&self) -> String {
        format!("{}. {} → {}", self.ply, self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub mode: Mode,
    /// Human-readable outcome, e.g. "Checkmate! White wins!".
    pub result: String,
    pub moves: Vec<RecordedMove>,
}

impl GameRecord {
    pub fn new(mode: Mode, result: impl Into<String>, history: &[MoveRecord]) -> Self {
        Self {
            mode,
            result: result.into(),
            moves: history
                .iter()
                .enumerate()
                .map(|(i, rec)| RecordedMove::new(i + 1, rec))
                .collect(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConsoleError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ConsoleError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
