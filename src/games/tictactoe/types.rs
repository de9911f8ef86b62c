//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Single-character symbol, blank for an empty cell.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::Occupied(Player::X) => "X",
            Cell::Occupied(Player::O) => "O",
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Always exactly nine cells. Only positions address cells, so range checks
/// happen when an index is turned into a [`Position`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells as an array.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the empty positions in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter().filter(|pos| self.is_empty(*pos)).collect()
    }

}

/// Empty cells show their 1-based key so the layout doubles as a keypad hint.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i % 3 == 0 && i > 0 {
                f.write_str("\n-+-+-\n")?;
            }
            match cell {
                Cell::Empty => write!(f, "{}", i + 1)?,
                Cell::Occupied(player) => write!(f, "{player}")?,
            }
            if i % 3 < 2 {
                f.write_str("|")?;
            }
        }
        Ok(())
    }
}

/// Who the second mark belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum GameMode {
    /// Two humans share the keyboard.
    #[default]
    #[serde(rename = "two-player")]
    #[strum(serialize = "two-player", serialize = "player")]
    TwoPlayer,
    /// A human plays X against the random AI playing O.
    #[serde(rename = "vs-ai")]
    #[strum(serialize = "vs-ai", serialize = "ai")]
    SingleVsAi,
}

impl GameMode {
    /// Returns display name.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Two Player",
            GameMode::SingleVsAi => "vs AI",
        }
    }

    /// The mark the AI plays in this mode, if any.
    pub fn ai_player(self) -> Option<Player> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::SingleVsAi => Some(Player::O),
        }
    }
}

/// Current player plus whether moves are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// The player permitted to move next.
    pub current: Player,
    /// False once the game has been won or drawn.
    pub active: bool,
}

impl TurnState {
    /// Fresh turn state: X to move, accepting moves.
    pub fn new() -> Self {
        Self {
            current: Player::X,
            active: true,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_board_display_shows_keys_and_marks() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Occupied(Player::X));
        assert_eq!(board.to_string(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_empty_positions_skip_occupied() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Player::O));
        let empty = board.empty_positions();
        assert_eq!(empty.len(), 8);
        assert!(!empty.contains(&Position::TopLeft));
    }

    #[test]
    fn test_mode_parses_aliases() {
        assert_eq!(GameMode::from_str("vs-ai").ok(), Some(GameMode::SingleVsAi));
        assert_eq!(GameMode::from_str("ai").ok(), Some(GameMode::SingleVsAi));
        assert_eq!(GameMode::from_str("player").ok(), Some(GameMode::TwoPlayer));
        assert!(GameMode::from_str("hard").is_err());
    }
}
