//! Turn-taking engine for human vs. computer play.
//!
//! One call to [`GameEngine::on_cell_activated`] runs the whole turn
//! synchronously: the human mark, the terminal check, the computer's
//! minimax reply and the second terminal check. The UI renders whatever
//! [`GameEvent`]s come back.

use super::board::Board;
use super::minimax;
use super::types::{Cells, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where the engine is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// Waiting for the human to pick a cell.
    AwaitingHuman,
    /// Checking the board for a line or a full grid.
    Evaluating,
    /// The computer is about to search and move.
    AwaitingComputer,
    /// A game just ended; a reset follows.
    Terminal,
}

/// Notification for the UI collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move was applied; render these cells.
    CellsChanged(Cells),
    /// The game ended with this outcome.
    GameOver(Outcome),
    /// The board was cleared and the human is to move.
    Reset(Cells),
}

/// Board plus the player whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
}

impl GameState {
    /// Empty board, human to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Human,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tic-tac-toe engine: human moves first, computer answers by minimax.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
    phase: Phase,
}

impl GameEngine {
    /// Creates an engine with an empty board and the human to move.
    #[instrument]
    pub fn new() -> Self {
        info!("New game");
        Self {
            state: GameState::new(),
            phase: Phase::AwaitingHuman,
        }
    }

    /// Resumes play from an ongoing position.
    ///
    /// A terminal `board` is treated as already finished and replaced by a
    /// fresh game.
    #[instrument(skip(board), fields(board = %board))]
    pub fn with_board(board: Board, to_move: Player) -> Self {
        if board.outcome().is_terminal() {
            debug!("Resumed board is already terminal, starting fresh");
            return Self::new();
        }
        let phase = match to_move {
            Player::Human => Phase::AwaitingHuman,
            Player::Computer => Phase::AwaitingComputer,
        };
        Self {
            state: GameState {
                board,
                current_player: to_move,
            },
            phase,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Snapshot of the cells for rendering.
    pub fn cells(&self) -> Cells {
        *self.state.board.cells()
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        self.state.board.outcome()
    }

    /// UI entry point for a cell selection.
    ///
    /// Out-of-range, occupied, or out-of-turn activations are ignored and
    /// produce no events.
    pub fn on_cell_activated(&mut self, index: usize) -> Vec<GameEvent> {
        self.submit_human_move(index)
    }

    /// UI entry point for the restart control. Always succeeds.
    pub fn on_reset_requested(&mut self) -> Vec<GameEvent> {
        info!("Reset requested");
        self.reset();
        vec![GameEvent::Reset(self.cells())]
    }

    /// Places the human mark and, if the game continues, the computer reply.
    #[instrument(skip(self), fields(board = %self.state.board))]
    pub fn submit_human_move(&mut self, index: usize) -> Vec<GameEvent> {
        if self.phase != Phase::AwaitingHuman {
            debug!(phase = %self.phase, "Ignoring activation out of turn");
            return Vec::new();
        }
        if !self.state.board.is_empty(index) {
            debug!("Ignoring activation of unavailable cell");
            return Vec::new();
        }

        let mut events = Vec::new();
        self.state.board.place(index, Player::Human);
        debug!(index, "Human moved");
        events.push(GameEvent::CellsChanged(self.cells()));

        if self.evaluate(&mut events) {
            return events;
        }

        events.extend(self.play_computer_turn());
        events
    }

    /// Runs the computer's turn when it is due: search, apply, evaluate.
    #[instrument(skip(self), fields(board = %self.state.board))]
    pub fn play_computer_turn(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.compute_computer_move().is_some() {
            events.push(GameEvent::CellsChanged(self.cells()));
            self.evaluate(&mut events);
        }
        events
    }

    /// Chooses and applies the computer's move, returning its index.
    fn compute_computer_move(&mut self) -> Option<usize> {
        if self.phase != Phase::AwaitingComputer {
            return None;
        }
        let index = minimax::best_move(&self.state.board)?;
        self.state.board.place(index, Player::Computer);
        debug!(index, "Computer moved");
        Some(index)
    }

    /// Checks for a finished game. On a terminal board, pushes the outcome
    /// and the reset and returns true; otherwise hands the turn over.
    fn evaluate(&mut self, events: &mut Vec<GameEvent>) -> bool {
        self.phase = Phase::Evaluating;
        let outcome = self.state.board.outcome();

        if outcome.is_terminal() {
            self.phase = Phase::Terminal;
            info!(%outcome, board = %self.state.board, "Game over");
            events.push(GameEvent::GameOver(outcome));
            self.reset();
            events.push(GameEvent::Reset(self.cells()));
            return true;
        }

        self.state.current_player = self.state.current_player.opponent();
        self.phase = match self.state.current_player {
            Player::Human => Phase::AwaitingHuman,
            Player::Computer => Phase::AwaitingComputer,
        };
        false
    }

    /// Clears the board and hands the first move to the human.
    fn reset(&mut self) {
        self.state.board.reset();
        self.state.current_player = Player::Human;
        self.phase = Phase::AwaitingHuman;
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_new_engine_awaits_human() {
        let engine = GameEngine::new();
        assert_eq!(engine.phase(), Phase::AwaitingHuman);
        assert_eq!(engine.state().current_player(), Player::Human);
        assert_eq!(engine.outcome(), Outcome::Ongoing);
    }

    #[test]
    fn test_human_move_gets_immediate_reply() {
        let mut engine = GameEngine::new();
        let events = engine.on_cell_activated(4);
        assert_eq!(events.len(), 2);
        assert_eq!(engine.board().move_count(), 2);
        assert_eq!(engine.board().get(4), Some(Cell::Occupied(Player::Human)));
        assert_eq!(engine.phase(), Phase::AwaitingHuman);
        assert_eq!(events.last(), Some(&GameEvent::CellsChanged(engine.cells())));
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut engine = GameEngine::new();
        engine.on_cell_activated(0);
        let before = engine.cells();
        assert!(engine.on_cell_activated(0).is_empty());
        assert_eq!(engine.cells(), before);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut engine = GameEngine::new();
        assert!(engine.on_cell_activated(9).is_empty());
        assert!(engine.on_cell_activated(usize::MAX).is_empty());
        assert_eq!(engine.board(), &Board::new());
    }

    #[test]
    fn test_human_move_ignored_on_computer_turn() {
        let board: Board = "X__/___/___".parse().unwrap();
        let mut engine = GameEngine::with_board(board, Player::Computer);
        assert_eq!(engine.phase(), Phase::AwaitingComputer);
        assert!(engine.on_cell_activated(4).is_empty());
        let events = engine.play_computer_turn();
        assert_eq!(events.len(), 1);
        assert_eq!(engine.phase(), Phase::AwaitingHuman);
    }

    #[test]
    fn test_computer_turn_ignored_on_human_turn() {
        let mut engine = GameEngine::new();
        assert!(engine.play_computer_turn().is_empty());
        assert_eq!(engine.board().move_count(), 0);
    }

    #[test]
    fn test_reset_request_always_succeeds() {
        let mut engine = GameEngine::new();
        engine.on_cell_activated(0);
        let events = engine.on_reset_requested();
        assert_eq!(events, vec![GameEvent::Reset([Cell::Empty; 9])]);
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.phase(), Phase::AwaitingHuman);
        assert_eq!(engine.on_reset_requested().len(), 1);
    }

    #[test]
    fn test_with_terminal_board_starts_fresh() {
        let board: Board = "XXX/OO_/___".parse().unwrap();
        let engine = GameEngine::with_board(board, Player::Computer);
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.phase(), Phase::AwaitingHuman);
    }
}
