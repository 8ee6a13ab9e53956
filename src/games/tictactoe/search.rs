//! Minimax move selection for the opponent.
//!
//! Scores are from the player's point of view: the player maximizes, the
//! opponent minimizes. A win found `depth` plies below the root is worth
//! `10 - depth`, so quicker wins and slower losses rank ahead of the rest.
//! The search is exhaustive and deterministic; each ply works on its own
//! copy of the board.

use super::sides::Sides;
use super::types::{Board, Side};
use serde::Serialize;
use tracing::{debug, instrument};

/// Score of a win found at the root.
pub const WIN_SCORE: i32 = 10;

/// A candidate index and the score minimax gives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveScore {
    /// Board index (0-8).
    pub index: usize,
    /// Minimax score after the opponent plays here.
    pub score: i32,
}

/// Minimax searcher bound to one side assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Searcher {
    sides: Sides,
}

impl Searcher {
    /// Creates a searcher that plays for `sides.opponent()`.
    pub fn new(sides: Sides) -> Self {
        Self { sides }
    }

    /// The side assignment this searcher scores against.
    pub fn sides(&self) -> Sides {
        self.sides
    }

    /// Static score of `board` found `depth` plies into the search.
    ///
    /// Positive when the player has a line, negative when the opponent
    /// has one, zero otherwise.
    pub fn evaluate_board(&self, board: &Board, depth: i32) -> i32 {
        if board.is_win(self.sides.player()) {
            WIN_SCORE - depth
        } else if board.is_win(self.sides.opponent()) {
            -(WIN_SCORE - depth)
        } else {
            0
        }
    }

    /// Minimax value of `board` with `is_maximizing` telling whether the
    /// player (maximizer) or the opponent (minimizer) moves next.
    pub fn minimax(&self, board: &Board, depth: i32, is_maximizing: bool) -> i32 {
        let score = self.evaluate_board(board, depth);
        if score != 0 {
            return score;
        }
        if !board.has_empty_cell() {
            return 0;
        }

        let mover = if is_maximizing {
            self.sides.player()
        } else {
            self.sides.opponent()
        };
        let scores = board
            .empty_indices()
            .map(|index| self.minimax(&board.with_mark(index, mover), depth + 1, !is_maximizing));

        if is_maximizing {
            scores.max().unwrap_or(0)
        } else {
            scores.min().unwrap_or(0)
        }
    }

    /// Scores every empty cell as the opponent's next move, in ascending
    /// index order.
    pub fn score_moves(&self, board: &Board) -> Vec<MoveScore> {
        let opponent = self.sides.opponent();
        board
            .empty_indices()
            .map(|index| MoveScore {
                index,
                score: self.minimax(&board.with_mark(index, opponent), 0, true),
            })
            .collect()
    }

    /// Returns the opponent's best index: the lowest score, earliest index
    /// on ties. `None` only when the board has no empty cell.
    #[instrument(skip(self, board), fields(opponent = %self.sides.opponent()))]
    pub fn find_best_move(&self, board: &Board) -> Option<usize> {
        let candidates = self.score_moves(board);
        for candidate in &candidates {
            debug!(index = candidate.index, score = candidate.score, "Scored candidate move");
        }

        let best = Self::pick(&candidates);
        debug!(?best, "Search finished");
        best
    }

    /// Lowest-scoring candidate, earliest index on ties.
    pub fn pick(candidates: &[MoveScore]) -> Option<usize> {
        candidates.iter().min_by_key(|c| c.score).map(|c| c.index)
    }
}

impl Board {
    /// Copy of this board with `side`'s mark at `index`.
    ///
    /// `index` must come from [`Board::empty_indices`].
    pub(crate) fn with_mark(&self, index: usize, side: Side) -> Board {
        let mut cells = *self.cells();
        cells[index] = side.mark();
        Board::from_cells(cells)
    }
}
