//! Console settings, loaded from an optional TOML file.

use std::path::{Path, PathBuf};

use chess_core::Color;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ConsoleError;

/// Who sits at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// One human against the greedy policy.
    VsAi,
    /// Two humans sharing the terminal.
    TwoPlayer,
    /// The greedy policy plays both sides.
    SelfPlay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    pub mode: Mode,
    /// Side the human plays in `vs-ai` mode.
    pub human_color: Color,
    /// Unicode chess symbols; ASCII letters when false.
    pub glyphs: bool,
    /// Fixed seed for the policy's tie-breaking.
    pub seed: Option<u64>,
    /// Self-play stops after this many plies.
    pub max_plies: u32,
    /// Where to write the JSON game record, if anywhere.
    pub record: Option<PathBuf>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            mode: Mode::VsAi,
            human_color: Color::White,
            glyphs: true,
            seed: None,
            max_plies: 300,
            record: None,
        }
    }
}

impl ConsoleConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ConsoleError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConsoleError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConsoleError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// True when the policy, not a person, moves for `color`.
    pub fn is_ai(&self, color: Color) -> bool {
        match self.mode {
            Mode::VsAi => color != self.human_color,
            Mode::TwoPlayer => false,
            Mode::SelfPlay => true,
        }
    }
}
