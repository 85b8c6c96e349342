//! Game-level scenarios for the human vs. minimax engine.

use strictly_tictactoe::{
    Board, Cell, GameEngine, GameEvent, Outcome, Phase, Player, best_move,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

fn game_over(events: &[GameEvent]) -> Option<Outcome> {
    events.iter().find_map(|event| match event {
        GameEvent::GameOver(outcome) => Some(*outcome),
        _ => None,
    })
}

/// Index of the computer mark added between two snapshots.
fn computer_reply(before: &Board, after: &Board) -> usize {
    (0..9)
        .find(|&i| before.is_empty(i) && after.get(i) == Some(Cell::Occupied(Player::Computer)))
        .expect("computer should have replied")
}

#[test]
fn test_center_opening_gets_corner_reply() {
    let mut engine = GameEngine::new();
    engine.on_cell_activated(4);

    let reply = computer_reply(&board("___/_X_/___"), engine.board());
    assert!([0, 2, 6, 8].contains(&reply), "got {reply}");
}

#[test]
fn test_human_completes_top_row() {
    let mut engine = GameEngine::with_board(board("XX_/OO_/___"), Player::Human);

    let events = engine.on_cell_activated(2);

    assert_eq!(
        events,
        vec![
            GameEvent::CellsChanged(*board("XXX/OO_/___").cells()),
            GameEvent::GameOver(Outcome::HumanWin),
            GameEvent::Reset([Cell::Empty; 9]),
        ]
    );
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.state().current_player(), Player::Human);
    assert_eq!(engine.phase(), Phase::AwaitingHuman);
}

#[test]
fn test_full_board_without_line_is_tie() {
    assert_eq!(board("XOX/OXO/OXO").outcome(), Outcome::Tie);
}

#[test]
fn test_human_fills_last_cell_for_tie() {
    let mut engine = GameEngine::with_board(board("XOX/XOO/OX_"), Player::Human);

    let events = engine.on_cell_activated(8);

    assert_eq!(game_over(&events), Some(Outcome::Tie));
    assert_eq!(events.last(), Some(&GameEvent::Reset([Cell::Empty; 9])));
}

#[test]
fn test_computer_win_is_reported_and_reset() {
    // O threatens 3-4-5; human plays elsewhere.
    let mut engine = GameEngine::with_board(board("XX_/_OO/X__"), Player::Human);

    let events = engine.on_cell_activated(7);

    assert_eq!(game_over(&events), Some(Outcome::ComputerWin));
    assert_eq!(engine.board(), &Board::new());
}

#[test]
fn test_computer_blocks_row_threat() {
    let mut engine = GameEngine::new();
    engine.on_cell_activated(0);
    assert_eq!(engine.board(), &board("X__/_O_/___"));

    engine.on_cell_activated(1);
    assert_eq!(engine.board().get(2), Some(Cell::Occupied(Player::Computer)));
}

#[test]
fn test_computer_avoids_opposite_corner_fork() {
    // A corner reply looks fine one ply deep but lets X fork.
    let mut engine = GameEngine::new();
    engine.on_cell_activated(0);
    let before = *engine.board();
    engine.on_cell_activated(8);

    let mut after_human = before;
    after_human.place(8, Player::Human);
    let reply = computer_reply(&after_human, engine.board());
    assert!([1, 3, 5, 7].contains(&reply), "got {reply}");
}

#[test]
fn test_selection_is_deterministic() {
    let position = board("X__/_O_/__X");
    let expected = best_move(&position);
    assert_eq!(expected, Some(1));

    for _ in 0..3 {
        let mut engine = GameEngine::with_board(position, Player::Computer);
        engine.play_computer_turn();
        assert_eq!(engine.board().get(1), Some(Cell::Occupied(Player::Computer)));
    }
}

fn explore(engine: &GameEngine, outcomes: &mut Vec<Outcome>) {
    let moves: Vec<usize> = engine.board().empty_indices().collect();
    for index in moves {
        let mut next = engine.clone();
        let events = next.on_cell_activated(index);
        match game_over(&events) {
            Some(outcome) => outcomes.push(outcome),
            None => explore(&next, outcomes),
        }
    }
}

#[test]
fn test_computer_never_loses() {
    let mut outcomes = Vec::new();
    explore(&GameEngine::new(), &mut outcomes);

    assert!(!outcomes.is_empty());
    assert!(!outcomes.contains(&Outcome::HumanWin));
    assert!(outcomes.contains(&Outcome::ComputerWin));
    assert!(outcomes.contains(&Outcome::Tie));
}

#[test]
fn test_events_serialize_for_frontends() {
    let mut engine = GameEngine::new();
    let events = engine.on_cell_activated(4);

    let json = serde_json::to_string(&events).expect("serializable");
    let back: Vec<GameEvent> = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, events);
}
