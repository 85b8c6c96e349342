//! Application state and logic.

use super::input::{Action, action_for};
use crossterm::event::KeyCode;
use strictly_tictactoe::{Cells, GameEngine, GameEvent, Outcome, Position};
use tracing::debug;

const READY: &str = "Your move (X). Arrows + Enter or 1-9 to play, 'r' restarts, 'q' quits.";

/// Main application state.
pub struct App {
    engine: GameEngine,
    cursor: Position,
    shown: Cells,
    status_message: String,
    popup: Option<Outcome>,
    pending_reset: Option<Cells>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        let engine = GameEngine::new();
        Self {
            shown: engine.cells(),
            engine,
            cursor: Position::Center,
            status_message: READY.to_string(),
            popup: None,
            pending_reset: None,
            should_quit: false,
        }
    }

    /// Cells currently on screen. While an outcome popup is open this is
    /// the finished board, not the reset one.
    pub fn shown(&self) -> &Cells {
        &self.shown
    }

    /// Cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Outcome waiting to be acknowledged.
    pub fn popup(&self) -> Option<Outcome> {
        self.popup
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let action = action_for(self.cursor, key);
        debug!(?key, ?action, "Key pressed");

        if self.popup.is_some() {
            if action == Action::Quit {
                self.should_quit = true;
            }
            self.dismiss_popup();
            return;
        }

        match action {
            Action::MoveCursor(pos) => self.cursor = pos,
            Action::Activate(pos) => {
                self.cursor = pos;
                self.activate(pos);
            }
            Action::ActivateCursor => self.activate(self.cursor),
            Action::Restart => {
                let events = self.engine.on_reset_requested();
                self.apply(events);
            }
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    fn activate(&mut self, pos: Position) {
        let events = self.engine.on_cell_activated(pos.to_index());
        self.apply(events);
    }

    /// Applies engine notifications to what is displayed.
    fn apply(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::CellsChanged(cells) => {
                    self.shown = cells;
                    self.status_message = READY.to_string();
                }
                GameEvent::GameOver(outcome) => {
                    self.popup = Some(outcome);
                    self.status_message = format!("{outcome} Press any key for a new game.");
                }
                GameEvent::Reset(cells) if self.popup.is_some() => {
                    self.pending_reset = Some(cells);
                }
                GameEvent::Reset(cells) => {
                    self.shown = cells;
                    self.status_message = format!("New game. {READY}");
                }
            }
        }
    }

    fn dismiss_popup(&mut self) {
        self.popup = None;
        if let Some(cells) = self.pending_reset.take() {
            self.shown = cells;
        }
        self.status_message = format!("New game. {READY}");
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
