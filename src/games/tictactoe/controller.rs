//! The game controller: board, turn and mode behind one owner.
//!
//! Every mutation goes through this type. Status is derived from the board
//! on demand; only the turn state's `active` flag records that the game
//! has ended, and it is cleared in the same step that produces the
//! terminal evaluation.

use super::action::{Move, MoveError};
use super::ai::MoveSelector;
use super::rules::{self, Evaluation, Line};
use super::{Board, GameMode, Player, Position, TurnState};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Derived status of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// The player to move.
        to_move: Player,
    },
    /// Game ended in a win.
    Won {
        /// The winner.
        player: Player,
        /// The line to highlight.
        line: Line,
    },
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// The winning line, on a win only.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { to_move } => write!(f, "Player {to_move}'s Turn"),
            GameStatus::Won { player, .. } => write!(f, "Player {player} Wins!"),
            GameStatus::Draw => write!(f, "It's a Draw!"),
        }
    }
}

/// Result of an applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// The move that was applied.
    pub applied: Move,
    /// The board evaluation right after it.
    pub evaluation: Evaluation,
    /// Status after the move, including the turn flip.
    pub status: GameStatus,
}

/// Permission for one AI move in one particular game.
///
/// Issued by [`GameController::ai_ticket`]. A ticket from before a reset
/// carries an older generation and is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiTicket {
    generation: u64,
}

impl AiTicket {
    /// The game generation this ticket was issued for.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened when an AI ticket was redeemed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiTurn {
    /// The AI moved.
    Played(MoveReport),
    /// The ticket no longer applies: the game was reset, ended, or it is
    /// not the AI's turn.
    Stale,
    /// The selector found nothing to play.
    NoMove,
    /// The selector chose a move the dispatcher refused.
    Rejected(MoveError),
}

/// Owned copy of everything a front end may observe.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    board: Board,
    mode: GameMode,
    turn: TurnState,
    status: GameStatus,
    history: Vec<Move>,
    generation: u64,
}

/// Tic-tac-toe game controller.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    turn: TurnState,
    mode: GameMode,
    history: Vec<Move>,
    generation: u64,
}

impl GameController {
    /// Creates a controller with a fresh game in the given mode.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            turn: TurnState::new(),
            mode,
            history: Vec::new(),
            generation: 0,
        }
    }

    /// Starts a fresh game: empty board, X to move, regardless of prior state.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = TurnState::new();
        self.history.clear();
        self.generation = self.generation.wrapping_add(1);
        info!(mode = ?self.mode, generation = self.generation, "Game reset");
    }

    /// Switches mode and resets, even when the mode is unchanged.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        debug!(from = ?self.mode, to = ?mode, "Mode selected");
        self.mode = mode;
        self.reset();
    }

    /// Applies a move for the current player at `index` (0-8).
    ///
    /// # Errors
    ///
    /// Returns the rejection reason; the game is unchanged in that case.
    #[instrument(skip(self), fields(player = %self.turn.current))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveReport, MoveError> {
        let player = self.turn.current;
        let position = super::dispatch::try_move(index, &mut self.board, &self.turn)?;
        let applied = Move::new(player, position);
        self.history.push(applied);

        let evaluation = rules::evaluate(&self.board);
        if evaluation.is_terminal() {
            self.turn.active = false;
            info!(
                ?evaluation,
                moves = self.history.len(),
                board = %self.board,
                "Game over"
            );
        } else {
            self.turn.current = player.opponent();
        }

        debug!(%applied, "Move applied");
        Ok(MoveReport {
            applied,
            evaluation,
            status: self.status(),
        })
    }

    /// Human cell selection.
    ///
    /// Same as [`apply_move`](Self::apply_move), but while playing against
    /// the AI the human cannot place the AI's mark.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotYourTurn`] when the AI is to move, otherwise
    /// whatever `apply_move` returns.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> Result<MoveReport, MoveError> {
        if self.turn.active && self.mode.ai_player() == Some(self.turn.current) {
            return Err(MoveError::NotYourTurn(self.turn.current));
        }
        self.apply_move(index)
    }

    /// A ticket for the AI's move, if the AI is the one to move now.
    pub fn ai_ticket(&self) -> Option<AiTicket> {
        (self.turn.active && self.mode.ai_player() == Some(self.turn.current)).then_some(AiTicket {
            generation: self.generation,
        })
    }

    /// Redeems an AI ticket, re-checking that it still applies first.
    #[instrument(skip(self, selector), fields(ai = selector.name(), ticket = ticket.generation))]
    pub fn play_ai_turn(&mut self, ticket: AiTicket, selector: &mut dyn MoveSelector) -> AiTurn {
        if self.ai_ticket() != Some(ticket) {
            debug!(current = self.generation, "Ignoring stale AI turn");
            return AiTurn::Stale;
        }

        let Some(position) = selector.select_move(&self.board) else {
            warn!("AI found no move on an active board");
            return AiTurn::NoMove;
        };

        match self.apply_move(position.to_index()) {
            Ok(report) => AiTurn::Played(report),
            Err(e) => {
                warn!(error = %e, "AI move rejected");
                AiTurn::Rejected(e)
            }
        }
    }

    /// Derives the status from the board and turn state.
    pub fn status(&self) -> GameStatus {
        match rules::evaluate(&self.board) {
            Evaluation::Ongoing => GameStatus::InProgress {
                to_move: self.turn.current,
            },
            Evaluation::Win { player, line } => GameStatus::Won { player, line },
            Evaluation::Draw => GameStatus::Draw,
        }
    }

    /// Owned snapshot of the whole game.
    pub fn current_state(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            mode: self.mode,
            turn: self.turn,
            status: self.status(),
            history: self.history.clone(),
            generation: self.generation,
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the turn state.
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Returns the active mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the move history of the current game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Counter bumped by every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replays cell indices from a fresh game, stopping at the first rejection.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move's reason.
    #[instrument]
    pub fn replay(mode: GameMode, indices: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new(mode);
        for &index in indices {
            game.apply_move(index)?;
        }
        Ok(game)
    }

    /// Position of the last move, if any.
    pub fn last_move(&self) -> Option<Position> {
        self.history.last().map(|m| m.position)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
