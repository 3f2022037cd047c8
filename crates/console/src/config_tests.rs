use super::cli::Cli;
use super::config::*;
use crate::error::ConsoleError;
use chess_core::Color;
use clap::Parser;
use std::path::{Path, PathBuf};

#[test]
fn test_defaults() {
    let cfg = ConsoleConfig::default();
    assert_eq!(cfg.mode, Mode::VsAi);
    assert_eq!(cfg.human_color, Color::White);
    assert!(cfg.glyphs);
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.max_plies, 300);
    assert_eq!(cfg.record, None);
}

#[test]
fn test_empty_file_gives_defaults() {
    assert_eq!(
        ConsoleConfig::from_toml_str("").unwrap(),
        ConsoleConfig::default()
    );
}

#[test]
fn test_full_file() {
    let text = r#"
        mode = "self-play"
        human_color = "black"
        glyphs = false
        seed = 42
        max_plies = 80
        record = "games/last.json"
    "#;
    let cfg = ConsoleConfig::from_toml_str(text).unwrap();
    assert_eq!(cfg.mode, Mode::SelfPlay);
    assert_eq!(cfg.human_color, Color::Black);
    assert!(!cfg.glyphs);
    assert_eq!(cfg.seed, Some(42));
    assert_eq!(cfg.max_plies, 80);
    assert_eq!(cfg.record, Some(PathBuf::from("games/last.json")));
}

#[test]
fn test_rejects_unknown_keys_and_modes() {
    assert!(ConsoleConfig::from_toml_str("depth = 4").is_err());
    assert!(ConsoleConfig::from_toml_str("mode = \"blitz\"").is_err());
    assert!(ConsoleConfig::from_toml_str("human_color = \"red\"").is_err());
}

#[test]
fn test_missing_file() {
    let err = ConsoleConfig::load(Path::new("/nonexistent/chess_console.toml")).unwrap_err();
    assert!(matches!(err, ConsoleError::ReadConfig { .. }));
}

#[test]
fn test_who_is_ai() {
    let mut cfg = ConsoleConfig::default();
    assert!(!cfg.is_ai(Color::White));
    assert!(cfg.is_ai(Color::Black));

    cfg.human_color = Color::Black;
    assert!(cfg.is_ai(Color::White));
    assert!(!cfg.is_ai(Color::Black));

    cfg.mode = Mode::TwoPlayer;
    assert!(!cfg.is_ai(Color::White) && !cfg.is_ai(Color::Black));

    cfg.mode = Mode::SelfPlay;
    assert!(cfg.is_ai(Color::White) && cfg.is_ai(Color::Black));
}

#[test]
fn test_flags_override_file() {
    let mut cfg = ConsoleConfig::from_toml_str("mode = \"two-player\"\nseed = 1").unwrap();
    let cli = Cli::try_parse_from([
        "chess_console",
        "--mode",
        "vs-ai",
        "--color",
        "black",
        "--ascii",
        "--seed",
        "9",
        "--max-plies",
        "12",
    ])
    .unwrap();
    cli.apply_to(&mut cfg);
    assert_eq!(cfg.mode, Mode::VsAi);
    assert_eq!(cfg.human_color, Color::Black);
    assert!(!cfg.glyphs);
    assert_eq!(cfg.seed, Some(9));
    assert_eq!(cfg.max_plies, 12);
}

#[test]
fn test_absent_flags_keep_file_values() {
    let mut cfg = ConsoleConfig::from_toml_str("mode = \"self-play\"\nglyphs = false").unwrap();
    let before = cfg.clone();
    Cli::try_parse_from(["chess_console"]).unwrap().apply_to(&mut cfg);
    assert_eq!(cfg, before);
}

#[test]
fn test_bad_color_flag() {
    assert!(Cli::try_parse_from(["chess_console", "--color", "green"]).is_err());
}
