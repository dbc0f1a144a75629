//! Observable session state: turn state, score, snapshots.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::moves::{Move, Outcome};

/// One of the two sides of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human driving the presentation layer.
    Player,
    /// The generated opponent.
    Opponent,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => f.write_str("Player"),
            Side::Opponent => f.write_str("Opponent"),
        }
    }
}

/// Turn lifecycle.
///
/// `AwaitingResolution` is the only state that advances on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// No turn played since the session started or was reset.
    #[default]
    Idle,
    /// Player move committed, opponent move pending.
    AwaitingResolution,
    /// Both moves known, outcome computed.
    Resolved,
}

/// Cumulative score.
///
/// Counters only grow within a session; `reset` zeroes both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    /// Create a score from two counters.
    #[must_use]
    pub const fn new(player: u32, opponent: u32) -> Self {
        Self { player, opponent }
    }

    /// Credit the winner of an outcome. A tie credits nobody.
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome.winner() {
            Some(Side::Player) => self.player = self.player.saturating_add(1),
            Some(Side::Opponent) => self.opponent = self.opponent.saturating_add(1),
            None => {}
        }
    }

    /// Total decisive turns.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.player as u64 + self.opponent as u64
    }

    /// The side ahead, or `None` when level.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        match self.player.cmp(&self.opponent) {
            std::cmp::Ordering::Greater => Some(Side::Player),
            std::cmp::Ordering::Less => Some(Side::Opponent),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.player, self.opponent)
    }
}

/// Read-only view of a session for the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub turn_state: TurnState,
    /// Set in `AwaitingResolution` and `Resolved`.
    pub player_move: Option<Move>,
    /// Set only in `Resolved`.
    pub opponent_move: Option<Move>,
    /// Set only in `Resolved`.
    pub outcome: Option<Outcome>,
    pub score: Score,
}

/// Record of one applied resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub player: Move,
    pub opponent: Move,
    pub outcome: Outcome,
    /// Score after this turn was applied.
    pub score: Score,
}

/// Handle for a pending resolution.
///
/// Issued by an accepted submission. Whoever owns the clock waits `delay`
/// and hands the ticket back to `GameSession::resolve`. A ticket from before
/// the latest reset or submission is stale and resolves to nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionTicket {
    pub(crate) epoch: u64,
    pub(crate) delay: Duration,
}

impl ResolutionTicket {
    /// Session epoch this ticket was issued in.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// How long to wait before resolving.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
