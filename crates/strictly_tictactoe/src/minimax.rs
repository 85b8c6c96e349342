//! Exhaustive minimax search for the computer's move.
//!
//! The search owns a single mutable board and walks the game tree with a
//! place / recurse / undo discipline. Every terminal check reads that same
//! buffer, so each recursion level sees the hypothetical marks above it.
//! No pruning and no memoization: at most 9! leaves.

use super::board::{Board, CELL_COUNT};
use super::types::Player;
use tracing::{debug, instrument};

/// Score of an immediate computer win; reduced by one per ply of depth.
pub const WIN_SCORE: i32 = 10;

/// Picks the computer's move on `board`.
///
/// Scans empty cells 0→8 and keeps the first cell with the highest score.
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board) -> Option<usize> {
    let mut scratch = *board;
    let choice = search_root(&mut scratch);
    debug_assert_eq!(&scratch, board, "search must undo every hypothetical mark");
    if let Some((index, score)) = choice {
        debug!(index, score, "Computer move selected");
    }
    choice.map(|(index, _)| index)
}

/// Scores every computer reply at the root, reverting each one.
fn search_root(board: &mut Board) -> Option<(usize, i32)> {
    let mut best: Option<(usize, i32)> = None;
    for index in 0..CELL_COUNT {
        if !board.is_empty(index) {
            continue;
        }
        board.place(index, Player::Computer);
        let score = minimax(board, 0, false);
        board.clear(index);
        // Strictly greater keeps the lowest index on ties.
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((index, score));
        }
    }
    best
}

/// Minimax value of `board` from the computer's point of view.
///
/// `depth` counts the plies simulated since the real position;
/// `computer_to_move` selects the maximizing or minimizing side.
/// The board is restored before returning.
pub fn minimax(board: &mut Board, depth: i32, computer_to_move: bool) -> i32 {
    match board.winner() {
        Some(Player::Computer) => return WIN_SCORE - depth,
        Some(Player::Human) => return depth - WIN_SCORE,
        None if board.is_full() => return 0,
        None => {}
    }

    let (mover, mut best) = if computer_to_move {
        (Player::Computer, i32::MIN)
    } else {
        (Player::Human, i32::MAX)
    };

    for index in 0..CELL_COUNT {
        if !board.is_empty(index) {
            continue;
        }
        board.place(index, mover);
        let score = minimax(board, depth + 1, !computer_to_move);
        board.clear(index);
        best = if computer_to_move {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
