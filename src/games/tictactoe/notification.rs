//! Presentation notifications.
//!
//! The controller knows nothing about rendering. After each operation the
//! session turns the result into these messages and a front end applies
//! them to whatever it draws.

use super::action::MoveError;
use super::controller::{GameController, MoveReport};
use super::rules::Line;
use super::{Cell, GameMode, Position};
use serde::{Deserialize, Serialize};

/// A single change a front end must render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// The cell at `position` now shows `cell`.
    CellChanged {
        /// Which cell.
        position: Position,
        /// What it shows now.
        cell: Cell,
    },
    /// New status line text.
    StatusChanged(String),
    /// Highlight the winning line.
    HighlightLine(Line),
    /// Remove any highlight.
    HighlightCleared,
    /// The active mode changed.
    ModeChanged(GameMode),
    /// An input was refused; the game is unchanged.
    MoveRejected(MoveError),
}

impl Notification {
    /// Full re-render after a reset: every cell, highlight, status.
    pub fn after_reset(game: &GameController) -> Vec<Self> {
        let board = game.board();
        let mut out: Vec<Self> = Position::ALL
            .into_iter()
            .map(|position| Notification::CellChanged {
                position,
                cell: board.get(position),
            })
            .collect();
        out.push(Notification::HighlightCleared);
        out.push(Notification::StatusChanged(game.status().to_string()));
        out
    }

    /// Mode change: announce the mode, then the reset that comes with it.
    pub fn after_mode_change(game: &GameController) -> Vec<Self> {
        let mut out = vec![Notification::ModeChanged(game.mode())];
        out.extend(Self::after_reset(game));
        out
    }

    /// The changed cell, the new status and, on a win, the line.
    pub fn after_move(report: &MoveReport) -> Vec<Self> {
        let mut out = vec![
            Notification::CellChanged {
                position: report.applied.position,
                cell: Cell::Occupied(report.applied.player),
            },
            Notification::StatusChanged(report.status.to_string()),
        ];
        if let Some(line) = report.status.winning_line() {
            out.push(Notification::HighlightLine(line));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{LINES, Player};

    #[test]
    fn test_reset_repaints_every_cell() {
        let game = GameController::default();
        let notes = Notification::after_reset(&game);
        let cells = notes
            .iter()
            .filter(|n| matches!(n, Notification::CellChanged { cell: Cell::Empty, .. }))
            .count();
        assert_eq!(cells, 9);
        assert_eq!(
            notes.last(),
            Some(&Notification::StatusChanged("Player X's Turn".to_string()))
        );
        assert!(notes.contains(&Notification::HighlightCleared));
    }

    #[test]
    fn test_winning_move_highlights_line() {
        let mut game = GameController::replay(GameMode::TwoPlayer, &[3, 0, 4, 1]).expect("legal");
        let report = game.apply_move(5).expect("winning move");
        assert_eq!(
            Notification::after_move(&report),
            vec![
                Notification::CellChanged {
                    position: Position::MiddleRight,
                    cell: Cell::Occupied(Player::X),
                },
                Notification::StatusChanged("Player X Wins!".to_string()),
                Notification::HighlightLine(LINES[1]),
            ]
        );
    }

    #[test]
    fn test_mode_change_leads_with_mode() {
        let mut game = GameController::default();
        game.set_mode(GameMode::SingleVsAi);
        let notes = Notification::after_mode_change(&game);
        assert_eq!(notes[0], Notification::ModeChanged(GameMode::SingleVsAi));
        assert_eq!(notes.len(), 12);
    }
}
