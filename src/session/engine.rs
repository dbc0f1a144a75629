//! The turn state machine.

use tracing::{debug, info, instrument};

use super::state::{ResolutionTicket, Score, SessionSnapshot, TurnReport, TurnState};
use crate::core::{GameError, SessionConfig};
use crate::moves::{Move, MoveCatalog, Outcome};
use crate::opponent::OpponentPolicy;

/// A long-lived game session.
///
/// Owns the score and turn state together, so every transition updates
/// both at once. Clock-agnostic: an accepted submission hands back a
/// `ResolutionTicket`, and the caller resolves it once the delay elapses.
///
/// ```
/// use rps_engine::{GameSession, Move, Outcome, ScriptedOpponent, TurnState};
///
/// let mut session = GameSession::default();
/// let ticket = session.submit_move(Move::Rock).unwrap();
/// assert_eq!(session.turn_state(), TurnState::AwaitingResolution);
///
/// let mut opponent = ScriptedOpponent::always(Move::Scissors);
/// let report = session.resolve(ticket, &mut opponent).unwrap();
/// assert_eq!(report.outcome, Outcome::Wins);
/// assert_eq!(session.score().player, 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    turn_state: TurnState,
    player_move: Option<Move>,
    opponent_move: Option<Move>,
    outcome: Option<Outcome>,
    score: Score,
    /// Bumped on every accepted submission and every reset.
    epoch: u64,
    turns_played: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl GameSession {
    /// Create an idle session with a zero score.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            turn_state: TurnState::Idle,
            player_move: None,
            opponent_move: None,
            outcome: None,
            score: Score::default(),
            epoch: 0,
            turns_played: 0,
        }
    }

    /// Get the session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Submit the player's move.
    ///
    /// Returns `None` without touching any state if a resolution is already
    /// pending (debounced input).
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn submit_move(&mut self, player_move: Move) -> Option<ResolutionTicket> {
        match self.try_submit_move(player_move) {
            Ok(ticket) => Some(ticket),
            Err(err) => {
                debug!(%err, "ignoring submission");
                None
            }
        }
    }

    /// Submit the player's move, failing with `GameError::Busy` while a
    /// resolution is pending.
    pub fn try_submit_move(&mut self, player_move: Move) -> Result<ResolutionTicket, GameError> {
        if self.is_busy() {
            return Err(GameError::Busy);
        }

        self.epoch += 1;
        self.turn_state = TurnState::AwaitingResolution;
        self.player_move = Some(player_move);
        self.opponent_move = None;
        self.outcome = None;

        debug!(epoch = self.epoch, %player_move, "awaiting resolution");

        Ok(ResolutionTicket {
            epoch: self.epoch,
            delay: self.config.resolution_delay,
        })
    }

    /// Run the resolution step for `ticket`.
    ///
    /// Draws the opponent move from `opponent`, scores the turn and moves to
    /// `Resolved`. A stale ticket (issued before the latest reset) is
    /// discarded and `opponent` is not consulted.
    #[instrument(skip(self, opponent), fields(epoch = ticket.epoch))]
    pub fn resolve<P>(&mut self, ticket: ResolutionTicket, opponent: &mut P) -> Option<TurnReport>
    where
        P: OpponentPolicy + ?Sized,
    {
        if ticket.epoch != self.epoch || self.turn_state != TurnState::AwaitingResolution {
            debug!(current_epoch = self.epoch, state = ?self.turn_state, "discarding stale resolution");
            return None;
        }
        let player_move = self.player_move?;

        let opponent_move = opponent.choose_move();
        let outcome = MoveCatalog::resolve(player_move, opponent_move);
        self.score.record(outcome);

        self.opponent_move = Some(opponent_move);
        self.outcome = Some(outcome);
        self.turn_state = TurnState::Resolved;
        self.turns_played += 1;

        info!(
            %player_move,
            %opponent_move,
            ?outcome,
            score = %self.score,
            "turn resolved"
        );

        Some(TurnReport {
            player: player_move,
            opponent: opponent_move,
            outcome,
            score: self.score,
        })
    }

    /// Zero the score and return to `Idle`.
    ///
    /// Unconditional; confirmation is the caller's job. Any outstanding
    /// ticket becomes stale.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.turn_state = TurnState::Idle;
        self.player_move = None;
        self.opponent_move = None;
        self.outcome = None;
        self.score = Score::default();
        self.turns_played = 0;

        info!(epoch = self.epoch, "session reset");
    }

    /// Read-only view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            turn_state: self.turn_state,
            player_move: self.player_move,
            opponent_move: self.opponent_move,
            outcome: self.outcome,
            score: self.score,
        }
    }

    /// The most recently applied turn, if the session is `Resolved`.
    #[must_use]
    pub fn last_report(&self) -> Option<TurnReport> {
        if self.turn_state != TurnState::Resolved {
            return None;
        }
        Some(TurnReport {
            player: self.player_move?,
            opponent: self.opponent_move?,
            outcome: self.outcome?,
            score: self.score,
        })
    }

    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// True while a resolution is pending.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.turn_state == TurnState::AwaitingResolution
    }

    /// Resolutions applied since the last reset.
    #[must_use]
    pub fn turns_played(&self) -> u64 {
        self.turns_played
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}
