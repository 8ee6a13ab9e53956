//! Core domain types for tic-tac-toe.

use super::error::EngineError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of squares on the board.
pub const CELL_COUNT: usize = 9;

/// A side in the game, or the absence of one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    /// No side; never a valid player.
    None,
    /// Side X (moves first).
    X,
    /// Side O.
    O,
}

impl Side {
    /// Returns the other side. `None` has no opponent.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
            Side::None => Side::None,
        }
    }

    /// Returns the cell value this side writes onto the board.
    pub fn mark(self) -> Cell {
        match self {
            Side::X => Cell::X,
            Side::O => Cell::O,
            Side::None => Cell::Empty,
        }
    }
}

/// A square on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    #[strum(to_string = ".")]
    Empty,
    /// Marked by X.
    X,
    /// Marked by O.
    O,
}

impl Cell {
    /// Returns the side owning this cell, `Side::None` when empty.
    pub fn side(self) -> Side {
        match self {
            Cell::Empty => Side::None,
            Cell::X => Side::X,
            Cell::O => Side::O,
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order: indices 0-2 are the top row,
/// 3-5 the middle row and 6-8 the bottom row. The board is `Copy`, so the
/// search hands out fresh copies instead of mutating a shared scratch grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from raw cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIndex`] if `index` is not in 0..9.
    pub fn cell_at(&self, index: usize) -> Result<Cell, EngineError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(EngineError::InvalidIndex(index))
    }

    /// Overwrites the cell at `index`.
    ///
    /// The board holds no turn context; callers enforce that only empty
    /// cells are written during play.
    pub fn set_cell(&mut self, index: usize, cell: Cell) -> Result<(), EngineError> {
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(EngineError::InvalidIndex(index))?;
        *slot = cell;
        Ok(())
    }

    /// Returns the lowest empty index, if any.
    pub fn first_empty_index(&self) -> Option<usize> {
        self.cells.iter().position(|c| c.is_empty())
    }

    /// Returns true if any cell is still empty.
    pub fn has_empty_cell(&self) -> bool {
        self.first_empty_index().is_some()
    }

    /// Returns the empty indices in ascending order.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Number of cells carrying `side`'s mark.
    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|c| c.side() == side).count()
    }

    /// Side whose turn it is by mark count. X opens, so X is next whenever
    /// the counts are level.
    pub fn next_side(&self) -> Side {
        if self.count(Side::X) > self.count(Side::O) {
            Side::O
        } else {
            Side::X
        }
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos)?,
                    cell => write!(f, "{}", cell)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// Wrong number of cells.
    #[display("Board needs {} cells, got {}", CELL_COUNT, _0)]
    WrongLength(usize),

    /// Unrecognized cell character.
    #[display("Unrecognized cell {:?} at index {}", _1, _0)]
    BadCell(usize, char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells such as `"XX.OO...."`.
    ///
    /// `X` and `O` are marks (any case); `.`, `-`, `_`, space and digits are
    /// empty. Line breaks, `|` separators and `-+-+-` rows are skipped, so
    /// the output of `Display` parses back to the same board.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .lines()
            .filter(|line| !is_separator_row(line))
            .flat_map(str::chars)
            .filter(|&c| c != '|')
            .collect();
        if chars.len() != CELL_COUNT {
            return Err(BoardParseError::WrongLength(chars.len()));
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, c) in chars.into_iter().enumerate() {
            cells[i] = match c {
                'x' | 'X' => Cell::X,
                'o' | 'O' => Cell::O,
                '.' | '-' | '_' | ' ' => Cell::Empty,
                d if d.is_ascii_digit() => Cell::Empty,
                other => return Err(BoardParseError::BadCell(i, other)),
            };
        }
        Ok(Self { cells })
    }
}

/// A rendered row divider such as `-+-+-`.
fn is_separator_row(line: &str) -> bool {
    let line = line.trim();
    line.contains('+') && line.chars().all(|c| matches!(c, '-' | '+'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.first_empty_index(), Some(0));
        assert!(board.has_empty_cell());
        assert_eq!(board.empty_indices().count(), 9);
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let board = Board::new();
        assert_eq!(board.cell_at(9), Err(EngineError::InvalidIndex(9)));
    }

    #[test]
    fn test_set_cell_out_of_range_leaves_board() {
        let mut board = Board::new();
        assert!(board.set_cell(12, Cell::X).is_err());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_first_empty_skips_occupied() {
        let board: Board = "XO.......".parse().unwrap();
        assert_eq!(board.first_empty_index(), Some(2));
    }

    #[test]
    fn test_full_board_has_no_empty() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(board.first_empty_index(), None);
        assert!(!board.has_empty_cell());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongLength(2))
        );
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(BoardParseError::BadCell(2, 'Z'))
        );
        // A row of dashes is nine empty cells, not a divider.
        assert_eq!("---------".parse::<Board>(), Ok(Board::new()));
    }

    #[test]
    fn test_display_round_trips() {
        let board: Board = "X.O.X...O".parse().unwrap();
        let rendered = board.to_string();
        assert_eq!(rendered, "X|1|O\n-+-+-\n3|X|5\n-+-+-\n6|7|O");
        assert_eq!(rendered.parse::<Board>(), Ok(board));
        assert_eq!(Board::new().to_string().parse::<Board>(), Ok(Board::new()));
    }

    #[test]
    fn test_next_side_by_count() {
        assert_eq!(Board::new().next_side(), Side::X);
        assert_eq!("X........".parse::<Board>().unwrap().next_side(), Side::O);
        assert_eq!("X...O....".parse::<Board>().unwrap().next_side(), Side::X);
    }

    #[test]
    fn test_side_parses_case_insensitively() {
        assert_eq!("x".parse::<Side>().unwrap(), Side::X);
        assert_eq!("O".parse::<Side>().unwrap(), Side::O);
        assert!("Q".parse::<Side>().is_err());
    }

    #[test]
    fn test_side_opponent_and_mark() {
        assert_eq!(Side::X.opponent(), Side::O);
        assert_eq!(Side::None.opponent(), Side::None);
        assert_eq!(Side::O.mark(), Cell::O);
        assert_eq!(Cell::X.side(), Side::X);
    }
}
