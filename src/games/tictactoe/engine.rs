//! Turn state machine with a minimax opponent.
//!
//! The engine owns the board and the turn order. A player's move is applied
//! and judged; if the game continues the opponent's reply is searched and
//! applied in the same call, so control only returns to the caller when
//! the player is on turn again or the game is over.

use super::action::Move;
use super::contracts::{Contract, MoveContract};
use super::error::EngineError;
use super::phases::{GameStatus, Outcome, Phase, Turn};
use super::search::Searcher;
use super::sides::Sides;
use super::types::{Board, CELL_COUNT, Cell, Side};
use tracing::{debug, error, info, instrument};

/// Tic-tac-toe engine: board, turn order and the opponent's search.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    sides: Sides,
    searcher: Searcher,
    phase: Phase,
    move_count: usize,
    history: Vec<Move>,
}

impl GameEngine {
    /// Configures the sides and enters the opening phase.
    ///
    /// If the opponent plays X it moves before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] unless the sides are
    /// one X and one O.
    #[instrument]
    pub fn start_game(player_side: Side, opponent_side: Side) -> Result<Self, EngineError> {
        let sides = Sides::new(player_side, opponent_side)?;
        Self::with_sides(sides)
    }

    /// Starts a game from an already validated side assignment.
    #[instrument]
    pub fn with_sides(sides: Sides) -> Result<Self, EngineError> {
        let mut engine = Self {
            board: Board::new(),
            sides,
            searcher: Searcher::new(sides),
            phase: Phase::for_turn(sides.first_turn()),
            move_count: 0,
            history: Vec::new(),
        };
        engine.enter_opening()?;
        Ok(engine)
    }

    /// Continues a game from an arbitrary legal, undecided position.
    ///
    /// Move order is not recoverable from a board, so the history lists X
    /// and O marks interleaved in ascending index order. If the opponent is
    /// the side to move it replies before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPosition`] if the mark counts are not
    /// X-first alternating, or the board is already won or full.
    #[instrument(skip(board), fields(board = ?board.cells()))]
    pub fn resume(sides: Sides, board: Board) -> Result<Self, EngineError> {
        let (xs, os): (Vec<usize>, Vec<usize>) = (0..CELL_COUNT)
            .filter(|&i| board.cells()[i] != Cell::Empty)
            .partition(|&i| board.cells()[i] == Cell::X);
        if xs.len() != os.len() && xs.len() != os.len() + 1 {
            return Err(EngineError::InvalidPosition(format!(
                "{} X marks against {} O marks",
                xs.len(),
                os.len()
            )));
        }
        if let Some(side) = board.winner() {
            return Err(EngineError::InvalidPosition(format!("{} has already won", side)));
        }
        if board.is_full() {
            return Err(EngineError::InvalidPosition("board is full".to_string()));
        }

        let mut history = Vec::with_capacity(xs.len() + os.len());
        for (turn, &x) in xs.iter().enumerate() {
            history.push(Move::new(Side::X, x));
            if let Some(&o) = os.get(turn) {
                history.push(Move::new(Side::O, o));
            }
        }

        let next = if board.next_side() == sides.player() {
            Turn::Player
        } else {
            Turn::Opponent
        };
        let mut engine = Self {
            board,
            sides,
            searcher: Searcher::new(sides),
            phase: Phase::for_turn(next),
            move_count: history.len(),
            history,
        };
        info!(moves = engine.move_count, next = ?next, "Game resumed");
        if next == Turn::Opponent {
            engine.opponent_move()?;
        }
        Ok(engine)
    }

    /// Clears the board and replays the opening rule.
    #[instrument(skip(self))]
    pub fn restart_game(&mut self) -> Result<(), EngineError> {
        info!(moves = self.move_count, "Restarting game");
        self.board = Board::new();
        self.move_count = 0;
        self.history.clear();
        self.phase = Phase::for_turn(self.sides.first_turn());
        self.enter_opening()
    }

    /// Plays the player's mark at `index`, then the opponent's reply.
    ///
    /// # Errors
    ///
    /// See [`GameEngine::apply_move`].
    #[instrument(skip(self), fields(player = %self.sides.player()))]
    pub fn place_mark(&mut self, index: usize) -> Result<GameStatus, EngineError> {
        self.apply_move(index, self.sides.player())
    }

    /// Plays `side`'s mark at `index` and resolves the end of the turn.
    ///
    /// Rejected moves leave the engine untouched.
    ///
    /// # Errors
    ///
    /// - [`EngineError::GameOver`] once the game has ended.
    /// - [`EngineError::InvalidIndex`] if `index` is not in 0..9.
    /// - [`EngineError::CellOccupied`] if the cell already holds a mark.
    /// - [`EngineError::WrongTurn`] if `side` is not on turn.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, side: Side) -> Result<GameStatus, EngineError> {
        let mv = Move::new(side, index);
        MoveContract::pre(self, &mv)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set_cell(index, side.mark())?;
        self.move_count += 1;
        self.history.push(mv);
        debug!(%mv, move_count = self.move_count, "Mark placed");

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)
            .inspect_err(|e| error!(error = %e, "Postcondition failed"))?;

        self.end_turn(side)
    }

    /// Side on turn, or `Side::None` once the game is over.
    pub fn current_turn(&self) -> Side {
        self.phase
            .turn()
            .map_or(Side::None, |turn| self.sides.side_of(turn))
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Status as seen by the caller of a move.
    pub fn status(&self) -> GameStatus {
        self.phase.into()
    }

    /// Marks placed so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Moves in the order they were played.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Configured sides.
    pub fn sides(&self) -> Sides {
        self.sides
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn enter_opening(&mut self) -> Result<(), EngineError> {
        info!(
            player = %self.sides.player(),
            opponent = %self.sides.opponent(),
            first = ?self.sides.first_turn(),
            "Game started"
        );
        if self.phase == Phase::OpponentTurn {
            self.opponent_move()?;
        }
        Ok(())
    }

    fn end_turn(&mut self, side: Side) -> Result<GameStatus, EngineError> {
        if self.board.is_win(side) {
            self.phase = Phase::GameOver(Outcome::Win(side));
            info!(winner = %side, moves = self.move_count, "Game won");
            return Ok(self.status());
        }

        if self.move_count == CELL_COUNT {
            self.phase = Phase::GameOver(Outcome::Draw);
            info!("Game drawn");
            return Ok(self.status());
        }

        let next = match self.phase.turn() {
            Some(turn) => turn.flip(),
            None => {
                return Err(EngineError::InvariantViolation(
                    "turn ended after game over".to_string(),
                ));
            }
        };
        self.phase = Phase::for_turn(next);

        match next {
            Turn::Opponent => self.opponent_move(),
            Turn::Player => Ok(GameStatus::Continue),
        }
    }

    #[instrument(skip(self), fields(opponent = %self.sides.opponent()))]
    fn opponent_move(&mut self) -> Result<GameStatus, EngineError> {
        let Some(index) = self.searcher.find_best_move(&self.board) else {
            error!(move_count = self.move_count, "Search found no move");
            return Err(EngineError::InvariantViolation(
                "opponent searched a full board".to_string(),
            ));
        };
        info!(index, "Opponent plays");
        self.apply_move(index, self.sides.opponent())
    }
}
