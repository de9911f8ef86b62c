//! Tic-tac-toe for two players or one player against a random AI.
//!
//! # Architecture
//!
//! - **Games**: board, rules, the [`GameController`] state machine and the
//!   random AI. Pure and synchronous; no I/O.
//! - **Session**: a single tokio task that owns the controller, handles
//!   input events one at a time, defers AI replies, and publishes
//!   [`Notification`]s.
//! - **TUI**: a ratatui front end that maps keys to inputs and renders
//!   notifications.
//!
//! # Example
//!
//! ```
//! use tictactoe_duel::{GameController, GameMode, GameStatus, Player};
//!
//! let mut game = GameController::new(GameMode::TwoPlayer);
//! for index in [0, 4, 1, 5, 2] {
//!     game.apply_move(index).unwrap();
//! }
//! assert!(matches!(game.status(), GameStatus::Won { player: Player::X, .. }));
//! assert_eq!(game.status().to_string(), "Player X Wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod games;
mod session;
mod settings;
pub mod tui;

// Crate-level exports - Session
pub use session::{Input, Session, SessionHandle};

// Crate-level exports - Settings
pub use settings::{ConfigError, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AiTicket, AiTurn, Board, Cell, Evaluation, GameController, GameMode, GameSnapshot, GameStatus,
    LINES, Line, Move, MoveError, MoveReport, MoveSelector, Notification, Player, Position,
    RandomAi, TurnState, evaluate, select_move, try_move,
};
