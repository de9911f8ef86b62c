//! tictactoe_duel - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_duel::Settings;
use tracing::instrument;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // Not logged: the settings name the log file, so the subscriber comes later.
    let settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or_default() {
        Command::Tui {
            mode,
            ai_delay_ms,
            seed,
        } => run_tui(apply_overrides(settings, mode, ai_delay_ms, seed)).await,
    }
}

/// Command-line flags win over the settings file.
#[instrument(skip(settings))]
fn apply_overrides(
    mut settings: Settings,
    mode: Option<tictactoe_duel::GameMode>,
    ai_delay_ms: Option<u64>,
    seed: Option<u64>,
) -> Settings {
    if let Some(mode) = mode {
        settings = settings.with_mode(mode);
    }
    if let Some(ms) = ai_delay_ms {
        settings = settings.with_ai_delay_ms(ms);
    }
    if let Some(seed) = seed {
        settings = settings.with_ai_seed(seed);
    }
    settings
}

/// Run the TUI client
async fn run_tui(settings: Settings) -> Result<()> {
    tictactoe_duel::tui::run_tui(settings).await
}
