//! Session actor: serializes every session mutation through one queue and
//! drives the deferred computer turn with a timer.

use crate::SessionError;
use std::time::Duration;
use tictactoe_core::{
    Board, Difficulty, FirstMover, GameConfig, GameSession, Mark, Mode, Notifier, PendingTurn,
    Phase, Position, SessionEvent, Status,
};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, trace};

/// Notifier that forwards session events into a channel.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<SessionEvent>,
}

impl ChannelNotifier {
    /// Creates a notifier and the receiving end of its events.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, event: SessionEvent) {
        if self.tx.send(event).is_err() {
            trace!("Event receiver dropped");
        }
    }
}

impl Notifier for ChannelNotifier {
    fn board_changed(&mut self, board: &Board) {
        self.send(SessionEvent::BoardChanged { board: *board });
    }

    fn status_changed(&mut self, status: Status) {
        self.send(SessionEvent::StatusChanged { status });
    }
}

/// Point-in-time copy of a session's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// The board.
    pub board: Board,
    /// Mark that places next.
    pub turn: Mark,
    /// Lifecycle phase.
    pub phase: Phase,
    /// Configuration for the next reset.
    pub config: GameConfig,
}

impl Snapshot {
    fn of<N>(session: &GameSession<N>) -> Self {
        Self {
            board: *session.board(),
            turn: session.turn(),
            phase: session.phase(),
            config: *session.config(),
        }
    }
}

/// Messages processed by the actor, one at a time.
#[derive(Debug)]
enum Command {
    Reset,
    PlayerMove(Position),
    SetMode(Mode),
    SetDifficulty(Difficulty),
    SetFirstMover(FirstMover),
    ToggleFirstMover,
    OpponentTurn(PendingTurn),
    Snapshot(oneshot::Sender<Snapshot>),
}

/// Cloneable handle for sending commands to a running session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<Command>,
}

impl SessionHandle {
    /// Starts a new game.
    pub fn reset(&self) -> Result<(), SessionError> {
        self.send(Command::Reset)
    }

    /// Plays a human move at a raw board index.
    ///
    /// # Errors
    ///
    /// Fails for indices outside `0..=8`. Moves the session cannot accept
    /// (occupied cell, wrong turn, finished game) are not errors; the
    /// session ignores them.
    #[instrument(skip(self))]
    pub fn player_move(&self, index: usize) -> Result<(), SessionError> {
        let pos = Position::try_from(index)?;
        self.play(pos)
    }

    /// Plays a human move at a position.
    pub fn play(&self, pos: Position) -> Result<(), SessionError> {
        self.send(Command::PlayerMove(pos))
    }

    /// Sets the mode for the next reset.
    pub fn set_mode(&self, mode: Mode) -> Result<(), SessionError> {
        self.send(Command::SetMode(mode))
    }

    /// Sets the difficulty for the next reset.
    pub fn set_difficulty(&self, difficulty: Difficulty) -> Result<(), SessionError> {
        self.send(Command::SetDifficulty(difficulty))
    }

    /// Sets who opens for the next reset.
    pub fn set_first_mover(&self, first_mover: FirstMover) -> Result<(), SessionError> {
        self.send(Command::SetFirstMover(first_mover))
    }

    /// Swaps who opens for the next reset.
    pub fn toggle_first_mover(&self) -> Result<(), SessionError> {
        self.send(Command::ToggleFirstMover)
    }

    /// Reads the session state after every command queued before it.
    pub async fn snapshot(&self) -> Result<Snapshot, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Snapshot(reply))?;
        rx.await
            .map_err(|_| SessionError::new("Session stopped before replying"))
    }

    fn send(&self, command: Command) -> Result<(), SessionError> {
        self.tx
            .send(command)
            .map_err(|e| SessionError::new(format!("Session stopped, dropped {:?}", e.0)))
    }
}

/// Spawns the actor owning `session`.
///
/// The computer answers `delay` after it becomes its turn. The actor stops
/// once every handle is dropped.
#[instrument(skip(session))]
pub fn spawn_session<N>(session: GameSession<N>, delay: Duration) -> (SessionHandle, JoinHandle<()>)
where
    N: Notifier + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let actor = SessionActor {
        session,
        delay,
        commands: rx,
        scheduler: tx.downgrade(),
        timer: None,
    };
    let task = tokio::spawn(actor.run());
    (SessionHandle { tx }, task)
}

struct SessionActor<N> {
    session: GameSession<N>,
    delay: Duration,
    commands: mpsc::UnboundedReceiver<Command>,
    // Weak so that pending timers, not the actor itself, keep the queue open.
    scheduler: mpsc::WeakUnboundedSender<Command>,
    timer: Option<JoinHandle<()>>,
}

impl<N: Notifier> SessionActor<N> {
    async fn run(mut self) {
        info!(delay = ?self.delay, "Session actor started");
        while let Some(command) = self.commands.recv().await {
            self.handle(command);
        }
        self.cancel_timer();
        info!("Session actor stopped");
    }

    fn handle(&mut self, command: Command) {
        trace!(?command, "Handling command");
        let pending = match command {
            Command::Reset => {
                self.cancel_timer();
                self.session.reset()
            }
            Command::PlayerMove(pos) => self.session.player_move(pos),
            Command::SetMode(mode) => {
                self.session.set_mode(mode);
                None
            }
            Command::SetDifficulty(difficulty) => {
                self.session.set_difficulty(difficulty);
                None
            }
            Command::SetFirstMover(first_mover) => {
                self.session.set_first_mover(first_mover);
                None
            }
            Command::ToggleFirstMover => {
                self.session.toggle_first_mover();
                None
            }
            Command::OpponentTurn(ticket) => {
                self.session.opponent_turn(ticket);
                None
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(Snapshot::of(&self.session));
                None
            }
        };

        if let Some(ticket) = pending {
            self.schedule(ticket);
        }
    }

    fn schedule(&mut self, ticket: PendingTurn) {
        let Some(tx) = self.scheduler.upgrade() else {
            debug!("No handles left, not scheduling opponent turn");
            return;
        };
        self.cancel_timer();
        let delay = self.delay;
        debug!(?delay, "Scheduling opponent turn");
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Command::OpponentTurn(ticket));
        }));
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
