//! Tic-tac-toe: board, rules, controller and the random AI.

mod action;
mod ai;
mod controller;
mod dispatch;
mod notification;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use ai::{MoveSelector, RandomAi, select_move};
pub use controller::{AiTicket, AiTurn, GameController, GameSnapshot, GameStatus, MoveReport};
pub use dispatch::try_move;
pub use notification::Notification;
pub use position::Position;
pub use rules::{Evaluation, LINES, Line, evaluate};
pub use types::{Board, Cell, GameMode, Player, TurnState};
