//! Command-line interface for the tic-tac-toe engine.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use unbeatable_tictactoe::{Board, Side};

/// Tic-tac-toe against an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against an unbeatable minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        sides: SideArgs,
    },

    /// Print the opponent's chosen move for a board
    BestMove {
        /// Nine cells in row-major order, e.g. "XX.OO...."
        #[arg(long)]
        board: Board,

        #[command(flatten)]
        sides: SideArgs,

        /// Emit the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Side overrides shared by the subcommands
#[derive(Args, Debug)]
pub struct SideArgs {
    /// Side played by the human (X or O)
    #[arg(long)]
    pub player_side: Option<Side>,

    /// Side played by the engine (X or O)
    #[arg(long)]
    pub opponent_side: Option<Side>,
}
