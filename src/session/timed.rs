//! Timer-driven session on top of Tokio.
//!
//! `TimedSession` realizes the resolution delay: an accepted submission
//! spawns a task that sleeps for the configured delay and then resolves its
//! ticket. All mutation goes through one mutex, and every state change is
//! published on a `watch` channel.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use super::engine::GameSession;
use super::state::{ResolutionTicket, SessionSnapshot};
use crate::core::SessionConfig;
use crate::moves::Move;
use crate::opponent::{OpponentPolicy, UniformOpponent};

struct Inner {
    session: GameSession,
    opponent: Box<dyn OpponentPolicy>,
    pending: Option<JoinHandle<()>>,
}

struct Shared {
    inner: Mutex<Inner>,
    updates: watch::Sender<SessionSnapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every operation leaves `Inner` consistent, so a poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, snapshot: SessionSnapshot) {
        self.updates.send_replace(snapshot);
    }

    fn fire(&self, ticket: ResolutionTicket) {
        let mut inner = self.lock();
        let Inner {
            session, opponent, ..
        } = &mut *inner;

        if session.resolve(ticket, &mut **opponent).is_some() {
            inner.pending = None;
            let snapshot = inner.session.snapshot();
            self.publish(snapshot);
        }
    }
}

/// A game session whose resolutions run on a Tokio timer.
///
/// Cloning yields another handle to the same session.
/// Must be used from within a Tokio runtime.
#[derive(Clone)]
pub struct TimedSession {
    shared: Arc<Shared>,
}

impl TimedSession {
    /// Create a session with a uniform opponent seeded from `config`.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let opponent = UniformOpponent::from_config(&config);
        Self::with_opponent(config, Box::new(opponent))
    }

    /// Create a session with an injected opponent policy.
    #[must_use]
    pub fn with_opponent(config: SessionConfig, opponent: Box<dyn OpponentPolicy>) -> Self {
        let session = GameSession::new(config);
        let (updates, _) = watch::channel(session.snapshot());
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    session,
                    opponent,
                    pending: None,
                }),
                updates,
            }),
        }
    }

    /// Submit the player's move and arm the resolution timer.
    ///
    /// Returns `false` if the submission was debounced.
    #[instrument(skip(self))]
    pub fn submit_move(&self, player_move: Move) -> bool {
        let mut inner = self.shared.lock();
        let Some(ticket) = inner.session.submit_move(player_move) else {
            return false;
        };

        let shared = Arc::clone(&self.shared);
        inner.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(ticket.delay()).await;
            shared.fire(ticket);
        }));

        let snapshot = inner.session.snapshot();
        self.shared.publish(snapshot);
        true
    }

    /// Cancel any pending resolution, zero the score and return to `Idle`.
    #[instrument(skip(self))]
    pub fn reset(&self) {
        let mut inner = self.shared.lock();
        if let Some(handle) = inner.pending.take() {
            debug!("aborting pending resolution");
            handle.abort();
        }
        inner.session.reset();

        let snapshot = inner.session.snapshot();
        self.shared.publish(snapshot);
    }

    /// Current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.shared.lock().session.snapshot()
    }

    /// Receiver that observes every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.shared.updates.subscribe()
    }

    /// True while a resolution timer is armed.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.shared.lock().session.is_busy()
    }
}
