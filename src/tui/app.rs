//! Application state: what the screen shows.
//!
//! The app never consults the controller. It only applies notifications,
//! so it shows exactly what the session published.

use crate::games::tictactoe::{Cell, GameMode, Line, MoveError, Notification, Position};
use tracing::debug;

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    cells: [Cell; 9],
    status_message: String,
    highlight: Option<Line>,
    mode: GameMode,
    cursor: Position,
    last_rejection: Option<MoveError>,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
            status_message: "Waiting for game to start...".to_string(),
            highlight: None,
            mode: GameMode::default(),
            cursor: Position::Center,
            last_rejection: None,
        }
    }

    /// Applies one notification from the session.
    pub fn apply(&mut self, note: Notification) {
        debug!(?note, "Applying notification");

        match note {
            Notification::CellChanged { position, cell } => {
                self.cells[position.to_index()] = cell;
                self.last_rejection = None;
            }
            Notification::StatusChanged(text) => self.status_message = text,
            Notification::HighlightLine(line) => self.highlight = Some(line),
            Notification::HighlightCleared => self.highlight = None,
            Notification::ModeChanged(mode) => self.mode = mode,
            Notification::MoveRejected(e) => self.last_rejection = Some(e),
        }
    }

    /// What the cell at `pos` shows.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether `pos` is part of the highlighted winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlight.is_some_and(|line| line.contains(pos))
    }

    /// The active mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the keyboard cursor.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Why the last input was refused, until the next cell change.
    pub fn last_rejection(&self) -> Option<MoveError> {
        self.last_rejection
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
