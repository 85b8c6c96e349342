//! The 3x3 board and its line rules.

use super::types::{Cell, Cells, Outcome, Player};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Winning lines, scanned rows first, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: Cells,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from a full cell snapshot.
    pub fn from_cells(cells: Cells) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is unplayed. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Places a player's mark.
    ///
    /// The caller must check [`Board::is_empty`] first; placing on an
    /// occupied or out-of-range cell is a logic error.
    pub fn place(&mut self, index: usize, player: Player) {
        debug_assert!(self.is_empty(index), "place on unavailable cell {index}");
        self.cells[index] = Cell::Occupied(player);
    }

    /// Undoes a hypothetical placement during search.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    /// Sets every cell back to empty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Returns the player owning the first fully matched line, if any.
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| {
            let player = self.cells[a].player()?;
            (self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a]).then_some(player)
        })
    }

    /// Returns true when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Derives the outcome from the current contents.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::from(player),
            None if self.is_full() => Outcome::Tie,
            None => Outcome::Ongoing,
        }
    }

    /// Returns all cells.
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Indices of unplayed cells in ascending order.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELL_COUNT).filter(|&i| self.cells[i] == Cell::Empty)
    }

    /// Number of marks placed so far.
    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Formats the board as a grid, numbering empty cells 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => char::from(b'1' + pos as u8),
                    Cell::Occupied(player) => player.mark(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Compact form: `XX_/OO_/___`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                write!(f, "/")?;
            }
            let symbol = match cell {
                Cell::Empty => '_',
                Cell::Occupied(player) => player.mark(),
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Not exactly nine cells after dropping separators.
    #[display("Expected 9 cells, found {found}")]
    WrongLength {
        /// Number of cells read.
        found: usize,
    },
    /// A character that is neither a mark nor an empty marker.
    #[display("Invalid cell character {mark:?}")]
    InvalidMark {
        /// The offending character.
        mark: char,
    },
}

impl std::error::Error for BoardParseError {}

/// Accepts `X`/`O` (any case) and `_`, `.` or `-` for empty cells.
/// Whitespace, `/` and `|` are separators and ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for ch in s.chars() {
            if ch.is_whitespace() || ch == '/' || ch == '|' {
                continue;
            }
            let cell = match ch {
                '_' | '.' | '-' => Cell::Empty,
                other => Player::from_mark(other)
                    .map(Cell::Occupied)
                    .ok_or(BoardParseError::InvalidMark { mark: other })?,
            };
            cells.push(cell);
        }
        let cells: Cells = cells
            .try_into()
            .map_err(|v: Vec<Cell>| BoardParseError::WrongLength { found: v.len() })?;
        Ok(Self { cells })
    }
}
