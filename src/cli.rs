//! Command-line interface for tictactoe_duel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_duel::GameMode;

/// Tic-tac-toe for two players or against a random AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe_duel")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(long, global = true, default_value = "tictactoe_duel.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Tui {
        /// Starting mode: two-player or vs-ai
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Delay before the AI answers, in milliseconds
        #[arg(long)]
        ai_delay_ms: Option<u64>,

        /// Seed for the AI's random choices
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Tui {
            mode: None,
            ai_delay_ms: None,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui_defaults() {
        let cli = Cli::try_parse_from(["tictactoe_duel"]).expect("parses");
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
        assert_eq!(cli.config, PathBuf::from("tictactoe_duel.toml"));
    }

    #[test]
    fn test_tui_flags() {
        let cli = Cli::try_parse_from([
            "tictactoe_duel",
            "tui",
            "--mode",
            "vs-ai",
            "--ai-delay-ms",
            "0",
            "--seed",
            "5",
            "--config",
            "custom.toml",
        ])
        .expect("parses");
        assert_eq!(
            cli.command,
            Some(Command::Tui {
                mode: Some(GameMode::SingleVsAi),
                ai_delay_ms: Some(0),
                seed: Some(5),
            })
        );
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
    }

    #[test]
    fn test_bad_mode_rejected() {
        assert!(Cli::try_parse_from(["tictactoe_duel", "tui", "--mode", "hard"]).is_err());
    }
}
