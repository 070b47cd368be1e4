//! tictactoe - play in the terminal or replay a scripted game.

use anyhow::Result;
use clap::Parser;
use tictactoe_session::{Cli, Command, GameConfig, GameSession, Position, replay, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        None => run_play("tictactoe.toml".into(), None, None),
        Some(Command::Play {
            config,
            player1,
            player2,
        }) => run_play(config, player1, player2),
        Some(Command::Replay {
            moves,
            player1,
            player2,
            json,
        }) => run_replay(&moves, &player1, &player2, json),
    }
}

/// Run the interactive terminal UI
fn run_play(
    config_path: std::path::PathBuf,
    player1: Option<String>,
    player2: Option<String>,
) -> Result<()> {
    let config = GameConfig::load_or_default(&config_path)?.with_names(player1, player2);
    tui::run_tui(config)
}

/// Play a scripted game and print the result
#[instrument(skip(moves), fields(move_count = moves.len()))]
fn run_replay(moves: &[Position], player1: &str, player2: &str, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    info!("Replaying scripted game");

    let mut session = GameSession::new();
    let statuses = replay(&mut session, player1, player2, moves);

    if json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        for status in &statuses {
            println!("{}", status);
        }
        println!();
        println!("{}", session.board().display());
    }

    Ok(())
}
