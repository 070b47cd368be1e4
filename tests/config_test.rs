//! Tests for loading the front-end configuration.

use std::io::Write;
use std::path::PathBuf;
use tictactoe_session::GameConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
}

#[test]
fn test_parses_all_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "player1_name = \"Alice\"\nplayer2_name = \"Bob\"\nlog_file = \"game.log\""
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.player1_name(), "Alice");
    assert_eq!(config.player2_name(), "Bob");
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player2_name = \"Bob\"").unwrap();

    let config = GameConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.player1_name(), "");
    assert_eq!(config.player2_name(), "Bob");
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player1_name = ").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_cli_names_override_file() {
    let config = GameConfig::default().with_names(Some("Ann".to_string()), None);
    assert_eq!(config.player1_name(), "Ann");
    assert_eq!(config.player2_name(), "");
}
