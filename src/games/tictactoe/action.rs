//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A rejected move is a normal
//! outcome described by [`MoveError`], never a panic.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// The game has been won or drawn; only a reset accepts moves again.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a board cell.
    #[display("Index {} is not a board cell (0-8)", _0)]
    InvalidIndex(usize),

    /// The cell at the position is already occupied.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The selection came from the human while the AI is to move.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Player),
}

impl MoveError {
    /// True when the rejection points at a bug in the caller rather than
    /// ordinary play (a front end should never produce an out-of-range index).
    pub fn is_caller_bug(&self) -> bool {
        matches!(self, MoveError::InvalidIndex(_))
    }
}

impl std::error::Error for MoveError {}
