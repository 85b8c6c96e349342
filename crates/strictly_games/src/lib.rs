//! Strictly Games - tic-tac-toe against a minimax opponent.
//!
//! The game logic lives in `strictly_tictactoe`; this crate is the shell
//! around it: command line, configuration, logging and the terminal UI.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod suggest;
pub mod tui;

pub use config::{AppConfig, ConfigError};
