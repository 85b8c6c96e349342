//! Pure tic-tac-toe logic: the board, the turn engine and a minimax opponent.
//!
//! # Architecture
//!
//! - **Board**: nine cells, line rules, outcome derivation
//! - **Engine**: human-first turn cycle, computer reply, reset on game over
//! - **Minimax**: exhaustive search over a single backtracking buffer
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameEngine, GameEvent};
//!
//! let mut engine = GameEngine::new();
//! let events = engine.on_cell_activated(4);
//! assert!(matches!(events.last(), Some(GameEvent::CellsChanged(_))));
//! assert_eq!(engine.board().move_count(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod minimax;
mod position;
mod types;

pub use board::{Board, BoardParseError, CELL_COUNT, LINES};
pub use engine::{GameEngine, GameEvent, GameState, Phase};
pub use minimax::{WIN_SCORE, best_move, minimax};
pub use position::Position;
pub use types::{Cell, Cells, Outcome, Player};

/// Alias for clarity where a player is drawn on the board.
pub type Mark = Player;
