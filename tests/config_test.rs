//! Tests for loading game configuration.

use std::io::Write;
use unbeatable_tictactoe::{EngineError, GameConfig, GameEngine, Side};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_config_file() {
    let file = write_config("player_side = \"X\"\nopponent_side = \"O\"\n");
    let config = GameConfig::from_file(file.path()).expect("valid config");

    assert_eq!(*config.player_side(), Side::X);
    assert_eq!(*config.opponent_side(), Side::O);

    let engine = GameEngine::with_sides(config.sides().expect("valid sides")).expect("start");
    assert_eq!(engine.current_turn(), Side::X);
}

#[test]
fn test_missing_fields_use_defaults() {
    let file = write_config("");
    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_missing_file_errors() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_errors() {
    let file = write_config("player_side = \"Z\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_non_complementary_sides_rejected() {
    let file = write_config("player_side = \"O\"\nopponent_side = \"O\"\n");
    let config = GameConfig::from_file(file.path()).expect("parses");
    assert_eq!(
        config.sides(),
        Err(EngineError::InvalidConfiguration {
            player: Side::O,
            opponent: Side::O,
        })
    );
}
