//! Simple AI that picks uniformly among the empty cells.
//!
//! No look-ahead and no blocking: this is deliberately the weakest opponent.

use super::{Board, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Chooses one empty position uniformly at random.
///
/// Returns `None` only for a full board.
#[instrument(skip(board, rng))]
pub fn select_move<R: rand::Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let candidates = board.empty_positions();
    let choice = candidates.choose(rng).copied();
    debug!(candidates = candidates.len(), ?choice, "AI selected move");
    choice
}

/// Anything that can pick the AI's next move.
pub trait MoveSelector: Send {
    /// Picks a position for the next move, `None` if the board is full.
    fn select_move(&mut self, board: &Board) -> Option<Position>;

    /// Returns the selector's display name.
    fn name(&self) -> &str;
}

/// Uniform-random AI owning its own RNG.
#[derive(Debug)]
pub struct RandomAi {
    name: String,
    rng: StdRng,
}

impl RandomAi {
    /// Creates a random AI seeded from the operating system.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a random AI with a fixed seed for reproducible games.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, OS-seeded otherwise.
    pub fn with_seed(name: impl Into<String>, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(name, seed),
            None => Self::new(name),
        }
    }
}

impl MoveSelector for RandomAi {
    fn select_move(&mut self, board: &Board) -> Option<Position> {
        select_move(board, &mut self.rng)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, Player};
    use std::collections::HashSet;

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Cell::Occupied(Player::X));
        }
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(select_move(&board, &mut rng), None);
    }

    #[test]
    fn test_single_empty_cell_is_forced() {
        let mut board = Board::new();
        for pos in Position::ALL {
            if pos != Position::BottomCenter {
                board.set(pos, Cell::Occupied(Player::O));
            }
        }
        let mut ai = RandomAi::seeded("AI", 3);
        for _ in 0..20 {
            assert_eq!(ai.select_move(&board), Some(Position::BottomCenter));
        }
    }

    #[test]
    fn test_always_picks_empty_cell() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Occupied(Player::X));
        board.set(Position::TopLeft, Cell::Occupied(Player::O));
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let pos = select_move(&board, &mut rng).expect("board has empty cells");
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_every_candidate_reachable() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<Position> = (0..500)
            .filter_map(|_| select_move(&board, &mut rng))
            .collect();
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomAi::seeded("a", 99);
        let mut b = RandomAi::seeded("b", 99);
        for _ in 0..10 {
            assert_eq!(a.select_move(&board), b.select_move(&board));
        }
    }
}
