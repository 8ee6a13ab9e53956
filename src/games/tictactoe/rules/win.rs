//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Side};
use tracing::instrument;

/// The eight index triples that win: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns true if `side` holds all three cells of any win line.
///
/// `Side::None` never wins, even on an empty board.
#[instrument(skip(board))]
pub fn is_win(board: &Board, side: Side) -> bool {
    let mark = side.mark();
    if mark == Cell::Empty {
        return false;
    }
    let cells = board.cells();
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == mark))
}

/// Returns the side with three in a row, if any.
#[instrument]
pub fn winner(board: &Board) -> Option<Side> {
    [Side::X, Side::O]
        .into_iter()
        .find(|&side| is_win(board, side))
}

impl Board {
    /// Returns true if `side` has completed a win line.
    pub fn is_win(&self, side: Side) -> bool {
        is_win(self, side)
    }

    /// Returns the winning side, if any.
    pub fn winner(&self) -> Option<Side> {
        winner(self)
    }
}
