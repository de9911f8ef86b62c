//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::super::{Evaluation, evaluate};
    use super::*;

    fn board_from(marks: [Option<Player>; 9]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            if let Some(player) = mark {
                board.set(pos, Cell::Occupied(player));
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert_eq!(evaluate(&board), Evaluation::Ongoing);
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        #[rustfmt::skip]
        let board = board_from([
            Some(X), Some(O), Some(X),
            Some(O), Some(X), Some(X),
            Some(O), Some(X), Some(O),
        ]);
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Evaluation::Draw);
    }

    #[test]
    fn test_no_draw_with_one_empty_cell() {
        use Player::{O, X};
        #[rustfmt::skip]
        let board = board_from([
            Some(X), Some(O), Some(X),
            Some(O), Some(X), Some(X),
            Some(O), Some(X), None,
        ]);
        assert!(!is_full(&board));
        assert_eq!(evaluate(&board), Evaluation::Ongoing);
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{O, X};
        // Full board where X holds the top row.
        #[rustfmt::skip]
        let board = board_from([
            Some(X), Some(X), Some(X),
            Some(O), Some(O), Some(X),
            Some(X), Some(O), Some(O),
        ]);
        assert!(is_full(&board));
        assert!(matches!(evaluate(&board), Evaluation::Win { player: X, .. }));
    }
}
