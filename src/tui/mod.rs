//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for, move_cursor};

use crate::games::tictactoe::Notification;
use crate::session::{Session, SessionHandle};
use crate::settings::Settings;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the player quits.
#[instrument(skip_all, fields(mode = ?settings.mode()))]
pub async fn run_tui(settings: Settings) -> Result<()> {
    init_logging(&settings)?;
    // Settings were loaded before any subscriber existed.
    info!(?settings, "Starting tic-tac-toe TUI");

    let (notify_tx, mut notify_rx) = mpsc::unbounded_channel();
    let (session, handle) = Session::from_settings(&settings, notify_tx);
    let session_task = tokio::spawn(session.run());

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;
    let res = run_app(&mut terminal, &handle, &mut notify_rx).await;
    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    // The session may already be gone if it failed.
    let _ = handle.shutdown();
    match session_task.await {
        Ok(Ok(state)) => info!(
            moves = state.history().len(),
            status = %state.status(),
            "Session ended"
        ),
        Ok(Err(e)) => error!(error = %e, "Session error"),
        Err(e) => error!(error = %e, "Session task failed"),
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Sends logs to the configured file so they do not interfere with the TUI.
///
/// `RUST_LOG` wins over the configured filter. A subscriber installed
/// earlier stays in place.
pub fn init_logging(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draw, drain notifications, forward key presses to the session.
async fn run_app(
    terminal: &mut Tui,
    handle: &SessionHandle,
    notify_rx: &mut mpsc::UnboundedReceiver<Notification>,
) -> Result<()> {
    let mut app = App::new();

    loop {
        while let Ok(note) = notify_rx.try_recv() {
            app.apply(note);
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(50))? {
            // Let the AI timer and session run between polls.
            tokio::task::yield_now().await;
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(action) = action_for(key.code) else {
            continue;
        };
        debug!(?action, "Key action");
        match action {
            Action::Quit => {
                info!("User quit");
                return Ok(());
            }
            Action::Select(index) => handle.select_cell(index)?,
            Action::SelectCursor => handle.select_cell(app.cursor().to_index())?,
            Action::Cursor(code) => app.set_cursor(move_cursor(app.cursor(), code)),
            Action::Restart => handle.restart()?,
            Action::Mode(mode) => handle.select_mode(mode)?,
        }
    }
}
