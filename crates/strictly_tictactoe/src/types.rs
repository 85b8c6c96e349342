//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Participant in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// The person at the keyboard (moves first, plays X).
    #[display("Human")]
    Human,
    /// The minimax opponent (plays O).
    #[display("Computer")]
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Returns the mark this player draws on the board.
    pub fn mark(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }

    /// Parses a board mark back into its player.
    pub fn from_mark(mark: char) -> Option<Self> {
        match mark.to_ascii_uppercase() {
            'X' => Some(Player::Human),
            'O' => Some(Player::Computer),
            _ => None,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unplayed cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Snapshot of all nine cells in row-major order.
pub type Cells = [Cell; 9];

/// Result of evaluating a board.
///
/// Always derived from board contents, never stored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// No line and at least one empty cell.
    #[display("Game in progress")]
    Ongoing,
    /// The human completed a line.
    #[display("You win!")]
    HumanWin,
    /// The computer completed a line.
    #[display("AI wins!")]
    ComputerWin,
    /// Board full with no line.
    #[display("It's a tie!")]
    Tie,
}

impl Outcome {
    /// Returns true once the game can no longer continue.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winning player, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::HumanWin => Some(Player::Human),
            Outcome::ComputerWin => Some(Player::Computer),
            Outcome::Ongoing | Outcome::Tie => None,
        }
    }
}

impl From<Player> for Outcome {
    fn from(winner: Player) -> Self {
        match winner {
            Player::Human => Outcome::HumanWin,
            Player::Computer => Outcome::ComputerWin,
        }
    }
}
