//! Keyboard mapping and cursor movement.

use crate::games::tictactoe::{GameMode, Position};
use crossterm::event::KeyCode;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select the cell with this index directly.
    Select(usize),
    /// Select the cell under the cursor.
    SelectCursor,
    /// Move the cursor.
    Cursor(KeyCode),
    /// Start over.
    Restart,
    /// Switch mode.
    Mode(GameMode),
    /// Leave the program.
    Quit,
}

/// Maps a key to an action; `None` for keys without a binding.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::Select(d as usize - 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::Cursor(key)),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('t') => Some(Action::Mode(GameMode::TwoPlayer)),
        KeyCode::Char('a') => Some(Action::Mode(GameMode::SingleVsAi)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = cursor.row_col();
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys_are_one_based() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::Select(0)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::Select(8)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_mode_keys() {
        assert_eq!(action_for(KeyCode::Char('a')), Some(Action::Mode(GameMode::SingleVsAi)));
        assert_eq!(action_for(KeyCode::Char('t')), Some(Action::Mode(GameMode::TwoPlayer)));
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Down), Position::BottomLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Right), Position::TopRight);
    }
}
