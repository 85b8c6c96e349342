//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand};

/// Strictly Games - tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Play tic-tac-toe against an unbeatable computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal UI
    Play {
        /// Path to the TOML config file (missing file means defaults)
        #[arg(short, long, default_value = "strictly_games.toml")]
        config: std::path::PathBuf,
    },

    /// Print the move the computer would make on a board
    Suggest {
        /// Board as nine cells, e.g. `XX_/OO_/___` (X human, O computer)
        board: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: std::path::PathBuf::from("strictly_games.toml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_is_play() {
        let cli = Cli::try_parse_from(["strictly_games"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Play { .. }));
    }

    #[test]
    fn test_suggest_takes_board() {
        let cli = Cli::try_parse_from(["strictly_games", "suggest", "XX_/OO_/___"]).unwrap();
        match cli.command {
            Some(Command::Suggest { board }) => assert_eq!(board, "XX_/OO_/___"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_play_config_flag() {
        let cli = Cli::try_parse_from(["strictly_games", "play", "-c", "custom.toml"]).unwrap();
        match cli.command {
            Some(Command::Play { config }) => assert_eq!(config, std::path::PathBuf::from("custom.toml")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
