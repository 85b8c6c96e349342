//! Headless move suggestion for the `suggest` command.

use strictly_tictactoe::{Board, Player, Position, best_move};
use tracing::instrument;

/// Describes the computer's choice on `board`, with the board drawn below.
#[instrument(skip(board), fields(board = %board))]
pub fn describe(board: &Board) -> String {
    let outcome = board.outcome();
    if outcome.is_terminal() {
        return format!("Board is already decided: {outcome}\n\n{}", board.display());
    }

    match best_move(board).and_then(Position::from_index) {
        Some(position) => {
            let mut after = *board;
            after.place(position.to_index(), Player::Computer);
            format!(
                "Computer plays {} ({})\n\n{}",
                position.to_index(),
                position,
                after.display()
            )
        }
        None => format!("No move available\n\n{}", board.display()),
    }
}
