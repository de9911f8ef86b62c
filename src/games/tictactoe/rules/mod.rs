//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Rules are separated from board storage so the
//! controller re-evaluates after every move instead of caching an outcome.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, winning_line};

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// No line complete and at least one empty cell.
    Ongoing,
    /// A player holds a full line.
    Win {
        /// The winning player.
        player: Player,
        /// The line they hold.
        line: Line,
    },
    /// Board full with no line.
    Draw,
}

impl Evaluation {
    /// True for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Evaluation::Ongoing)
    }
}

/// Evaluates the board: a win beats a full board, a full board is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((player, line)) = winning_line(board) {
        return Evaluation::Win { player, line };
    }
    if is_full(board) {
        return Evaluation::Draw;
    }
    Evaluation::Ongoing
}
