//! Move validation and application.
//!
//! Preconditions are checked in a fixed order: the game must be active,
//! the index must name a cell, and the cell must be empty. The board is
//! only touched once all three hold.

use super::action::MoveError;
use super::{Board, Cell, Position, TurnState};
use tracing::{instrument, warn};

/// Precondition: the game accepts moves.
pub struct GameActive;

impl GameActive {
    /// Fails with [`MoveError::GameOver`] once the game has ended.
    pub fn check(turn: &TurnState) -> Result<(), MoveError> {
        if turn.active {
            Ok(())
        } else {
            Err(MoveError::GameOver)
        }
    }
}

/// Precondition: the index names one of the nine cells.
pub struct IndexInRange;

impl IndexInRange {
    /// Converts the index, or fails with [`MoveError::InvalidIndex`].
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or_else(|| {
            warn!(index, "Move index out of range");
            MoveError::InvalidIndex(index)
        })
    }
}

/// Precondition: the cell at the position is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] on a marked cell.
    pub fn check(board: &Board, pos: Position) -> Result<(), MoveError> {
        if board.is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Validates and applies a move for the current player.
///
/// On success the board is mutated in place and the marked position is
/// returned; evaluating the outcome and flipping the turn is the caller's job.
/// On rejection nothing is mutated.
#[instrument(skip(board), fields(player = %turn.current))]
pub fn try_move(index: usize, board: &mut Board, turn: &TurnState) -> Result<Position, MoveError> {
    GameActive::check(turn)?;
    let pos = IndexInRange::check(index)?;
    CellIsEmpty::check(board, pos)?;

    board.set(pos, Cell::Occupied(turn.current));
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    #[test]
    fn test_marks_current_player() {
        let mut board = Board::new();
        let turn = TurnState::new();
        assert_eq!(try_move(4, &mut board, &turn), Ok(Position::Center));
        assert_eq!(board.get(Position::Center), Cell::Occupied(Player::X));
    }

    #[test]
    fn test_inactive_checked_before_index() {
        let mut board = Board::new();
        let turn = TurnState {
            current: Player::O,
            active: false,
        };
        assert_eq!(try_move(42, &mut board, &turn), Err(MoveError::GameOver));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_out_of_range_is_invalid_index() {
        let mut board = Board::new();
        assert_eq!(
            try_move(9, &mut board, &TurnState::new()),
            Err(MoveError::InvalidIndex(9))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_occupied_cell_rejected_without_change() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Player::X));
        let before = board.clone();
        let turn = TurnState {
            current: Player::O,
            active: true,
        };
        assert_eq!(
            try_move(0, &mut board, &turn),
            Err(MoveError::CellOccupied(Position::TopLeft))
        );
        assert_eq!(board, before);
    }
}
