//! Single-task event loop driving one game controller.
//!
//! Front ends send [`Input`]s and receive [`Notification`]s. Exactly one
//! input is handled at a time. The AI's reply is deferred through a one-shot
//! timer that posts an [`Input::AiTurnDue`] back into the same queue, so it is
//! sequenced like any other input and re-validated when it arrives.

use crate::games::tictactoe::{
    AiTicket, AiTurn, GameController, GameMode, GameSnapshot, MoveSelector, Notification, RandomAi,
};
use crate::settings::Settings;
use anyhow::{Context, Result};
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Events consumed by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// The human picked a cell (0-8).
    CellSelected(usize),
    /// Start over in the current mode.
    RestartRequested,
    /// Switch mode; always restarts.
    ModeSelected(GameMode),
    /// A deferred AI turn has come due.
    AiTurnDue(AiTicket),
    /// Stop the event loop.
    Shutdown,
}

/// Cloneable sender side of a session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    input_tx: mpsc::UnboundedSender<Input>,
}

impl SessionHandle {
    /// Sends a raw input.
    pub fn send(&self, input: Input) -> Result<()> {
        self.input_tx
            .send(input)
            .context("Session is no longer running")
    }

    /// Selects a cell by index.
    pub fn select_cell(&self, index: usize) -> Result<()> {
        self.send(Input::CellSelected(index))
    }

    /// Requests a restart.
    pub fn restart(&self) -> Result<()> {
        self.send(Input::RestartRequested)
    }

    /// Selects a mode.
    pub fn select_mode(&self, mode: GameMode) -> Result<()> {
        self.send(Input::ModeSelected(mode))
    }

    /// Stops the session.
    pub fn shutdown(&self) -> Result<()> {
        self.send(Input::Shutdown)
    }
}

/// Owns the controller and the AI; runs until shut down.
pub struct Session {
    controller: GameController,
    ai: Box<dyn MoveSelector>,
    ai_delay: Duration,
    // Weak so the loop ends once every handle is dropped.
    input_tx: mpsc::WeakUnboundedSender<Input>,
    input_rx: mpsc::UnboundedReceiver<Input>,
    notify_tx: mpsc::UnboundedSender<Notification>,
}

impl Session {
    /// Creates a session around a controller and an AI.
    pub fn new(
        controller: GameController,
        ai: Box<dyn MoveSelector>,
        ai_delay: Duration,
        notify_tx: mpsc::UnboundedSender<Notification>,
    ) -> (Self, SessionHandle) {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let session = Self {
            controller,
            ai,
            ai_delay,
            input_tx: input_tx.downgrade(),
            input_rx,
            notify_tx,
        };
        (session, SessionHandle { input_tx })
    }

    /// Creates a session from user settings with a [`RandomAi`] opponent.
    #[instrument(skip_all)]
    pub fn from_settings(
        settings: &Settings,
        notify_tx: mpsc::UnboundedSender<Notification>,
    ) -> (Self, SessionHandle) {
        let ai = RandomAi::with_seed("AI", *settings.ai_seed());
        Self::new(
            GameController::new(*settings.mode()),
            Box::new(ai),
            settings.ai_delay(),
            notify_tx,
        )
    }

    /// Returns the controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Runs the event loop.
    ///
    /// Publishes the initial board first, then handles inputs until
    /// [`Input::Shutdown`] or until every handle is gone. Returns the final
    /// game state.
    #[instrument(skip(self), fields(mode = ?self.controller.mode(), ai = self.ai.name()))]
    pub async fn run(mut self) -> Result<GameSnapshot> {
        info!("Starting game session");
        self.publish(Notification::after_mode_change(&self.controller))?;

        while let Some(input) = self.input_rx.recv().await {
            if self.handle(input)?.is_break() {
                break;
            }
        }

        info!(moves = self.controller.history().len(), "Session finished");
        Ok(self.controller.current_state())
    }

    /// Handles one input and publishes what changed.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Result<ControlFlow<()>> {
        match input {
            Input::CellSelected(index) => match self.controller.select_cell(index) {
                Ok(report) => {
                    self.publish(Notification::after_move(&report))?;
                    self.schedule_ai_turn();
                }
                Err(e) => {
                    if e.is_caller_bug() {
                        warn!(error = %e, "Rejected cell selection");
                    } else {
                        debug!(error = %e, "Rejected cell selection");
                    }
                    self.publish([Notification::MoveRejected(e)])?;
                }
            },
            Input::RestartRequested => {
                self.controller.reset();
                self.publish(Notification::after_reset(&self.controller))?;
            }
            Input::ModeSelected(mode) => {
                self.controller.set_mode(mode);
                self.publish(Notification::after_mode_change(&self.controller))?;
            }
            Input::AiTurnDue(ticket) => {
                match self.controller.play_ai_turn(ticket, self.ai.as_mut()) {
                    AiTurn::Played(report) => {
                        self.publish(Notification::after_move(&report))?;
                        self.schedule_ai_turn();
                    }
                    AiTurn::Stale => debug!("Dropped stale AI turn"),
                    AiTurn::NoMove => warn!("AI had no move"),
                    AiTurn::Rejected(e) => self.publish([Notification::MoveRejected(e)])?,
                }
            }
            Input::Shutdown => {
                debug!("Shutdown requested");
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Queues the AI's reply if it is the AI's turn.
    fn schedule_ai_turn(&self) {
        let Some(ticket) = self.controller.ai_ticket() else {
            return;
        };
        let Some(tx) = self.input_tx.upgrade() else {
            return;
        };

        debug!(
            generation = ticket.generation(),
            delay_ms = self.ai_delay.as_millis() as u64,
            "Scheduling AI turn"
        );
        if self.ai_delay.is_zero() {
            queue_ai_turn(&tx, ticket);
            return;
        }

        let delay = self.ai_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            queue_ai_turn(&tx, ticket);
        });
    }

    fn publish(&self, notes: impl IntoIterator<Item = Notification>) -> Result<()> {
        for note in notes {
            self.notify_tx
                .send(note)
                .context("Front end stopped listening for notifications")?;
        }
        Ok(())
    }
}

/// Posts a due AI turn. The session may have stopped in the meantime.
fn queue_ai_turn(tx: &mpsc::UnboundedSender<Input>, ticket: AiTicket) -> bool {
    let queued = tx.send(Input::AiTurnDue(ticket)).is_ok();
    if !queued {
        debug!(
            generation = ticket.generation(),
            "Session stopped before the AI turn came due"
        );
    }
    queued
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Cell, MoveError, Player, Position};

    /// Plays the lowest empty cell.
    struct FirstEmpty;

    impl MoveSelector for FirstEmpty {
        fn select_move(&mut self, board: &Board) -> Option<Position> {
            board.empty_positions().first().copied()
        }

        fn name(&self) -> &str {
            "first-empty"
        }
    }

    fn session(mode: GameMode) -> (Session, SessionHandle, mpsc::UnboundedReceiver<Notification>) {
        let (notify_tx, notify_rx) = mpsc::unbounded_channel();
        let (session, handle) = Session::new(
            GameController::new(mode),
            Box::new(FirstEmpty),
            Duration::ZERO,
            notify_tx,
        );
        (session, handle, notify_rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<Notification>) -> Vec<Notification> {
        let mut out = Vec::new();
        while let Ok(n) = rx.try_recv() {
            out.push(n);
        }
        out
    }

    #[test]
    fn test_rejected_selection_is_published() {
        let (mut session, _handle, mut rx) = session(GameMode::TwoPlayer);
        session.handle(Input::CellSelected(4)).expect("handled");
        drain(&mut rx);
        session.handle(Input::CellSelected(4)).expect("handled");
        assert_eq!(
            drain(&mut rx),
            vec![Notification::MoveRejected(MoveError::CellOccupied(Position::Center))]
        );
    }

    #[test]
    fn test_zero_delay_ai_turn_is_queued_not_played_inline() {
        let (mut session, _handle, mut rx) = session(GameMode::SingleVsAi);
        session.handle(Input::CellSelected(4)).expect("handled");
        assert_eq!(session.controller().history().len(), 1);
        drain(&mut rx);

        let queued = session.input_rx.try_recv().expect("AI turn queued");
        assert!(matches!(queued, Input::AiTurnDue(_)));
        session.handle(queued).expect("handled");
        assert_eq!(
            session.controller().board().get(Position::TopLeft),
            Cell::Occupied(Player::O)
        );
        let status = Notification::StatusChanged("Player X's Turn".to_string());
        assert!(drain(&mut rx).contains(&status));
    }

    #[test]
    fn test_ai_turn_after_session_stopped_is_dropped() {
        let (mut session, _handle, _rx) = session(GameMode::SingleVsAi);
        session.handle(Input::CellSelected(4)).expect("handled");
        let ticket = session.controller().ai_ticket().expect("AI to move");
        let (tx, rx) = mpsc::unbounded_channel();
        assert!(queue_ai_turn(&tx, ticket));
        drop(rx);
        assert!(!queue_ai_turn(&tx, ticket));
    }

    #[test]
    fn test_reset_between_schedule_and_fire_drops_ai_turn() {
        let (mut session, _handle, _rx) = session(GameMode::SingleVsAi);
        session.handle(Input::CellSelected(4)).expect("handled");
        let queued = session.input_rx.try_recv().expect("AI turn queued");

        session.handle(Input::RestartRequested).expect("handled");
        session.handle(queued).expect("handled");
        assert_eq!(session.controller().board(), &Board::new());
        assert_eq!(session.controller().turn().current, Player::X);
    }

    #[test]
    fn test_shutdown_breaks() {
        let (mut session, _handle, _rx) = session(GameMode::TwoPlayer);
        assert!(session.handle(Input::Shutdown).expect("handled").is_break());
    }
}
