//! Tic-tac-toe CLI
//!
//! Plays against the minimax opponent in the terminal, or prints the
//! opponent's analysis of a single board.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, SideArgs};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;
use unbeatable_tictactoe::{
    Board, GameConfig, GameEngine, GameStatus, MoveScore, Phase, Searcher, Side, Sides, rules,
};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, sides } => run_play(config, sides),
        Command::BestMove { board, sides, json } => run_best_move(board, sides, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(sides))]
fn run_play(config: Option<PathBuf>, sides: SideArgs) -> Result<()> {
    let config = match config {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    }
    .with_overrides(sides.player_side, sides.opponent_side);

    let mut engine = GameEngine::with_sides(config.sides()?)?;
    info!(player = %config.player_side(), "Starting interactive game");

    let stdin = std::io::stdin();
    let mut out = std::io::stdout().lock();
    writeln!(
        out,
        "You are {}. Enter a cell 0-8, 'r' to restart, 'q' to quit.",
        engine.sides().player()
    )?;
    render(&mut out, &engine)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        match input {
            "q" | "quit" => break,
            "r" | "restart" => engine.restart_game()?,
            _ => match input.parse::<usize>() {
                Ok(index) => match engine.place_mark(index) {
                    Ok(status) => debug!(?status, "Move resolved"),
                    Err(e) => writeln!(out, "{}", e)?,
                },
                Err(_) => writeln!(out, "Not a cell: {:?}", input)?,
            },
        }
        render(&mut out, &engine)?;
    }

    Ok(())
}

fn render(out: &mut impl Write, engine: &GameEngine) -> Result<()> {
    writeln!(out, "\n{}\n", engine.board())?;
    match engine.phase() {
        Phase::GameOver(outcome) => writeln!(out, "{}. 'r' to play again.", outcome)?,
        _ => write!(out, "{} to move> ", engine.current_turn())?,
    }
    out.flush()?;
    Ok(())
}

/// Analysis printed by `best-move --json`.
#[derive(Debug, Serialize)]
struct Analysis {
    board: Board,
    opponent: Side,
    status: GameStatus,
    best: Option<usize>,
    candidates: Vec<MoveScore>,
}

/// Print the opponent's move for one board
#[instrument(skip(sides))]
fn run_best_move(board: Board, sides: SideArgs, json: bool) -> Result<()> {
    // The side to move on the board plays the opponent unless told otherwise.
    let sides = match (sides.player_side, sides.opponent_side) {
        (None, None) => Sides::new(board.next_side().opponent(), board.next_side())?,
        (player, opponent) => GameConfig::default()
            .with_overrides(player, opponent)
            .sides()?,
    };
    if sides.opponent() != board.next_side() {
        warn!(opponent = %sides.opponent(), "Opponent is not the side to move on this board");
    }

    let status = match board.winner() {
        Some(side) => GameStatus::Win(side),
        None if rules::is_draw(&board) => GameStatus::Draw,
        None => GameStatus::Continue,
    };
    let searcher = Searcher::new(sides);
    let candidates = match status {
        GameStatus::Continue => searcher.score_moves(&board),
        _ => Vec::new(),
    };
    let best = Searcher::pick(&candidates);
    debug!(?best, "Analysis finished");

    let analysis = Analysis {
        board,
        opponent: sides.opponent(),
        status,
        best,
        candidates,
    };

    let mut out = std::io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&analysis)?)?;
        return Ok(());
    }

    writeln!(out, "{}\n", analysis.board)?;
    match analysis.best {
        Some(index) => {
            writeln!(out, "{} plays {}", analysis.opponent, index)?;
            for c in &analysis.candidates {
                writeln!(out, "  cell {} scores {}", c.index, c.score)?;
            }
        }
        None => writeln!(out, "No move: game is already decided ({:?})", analysis.status)?,
    }
    Ok(())
}
