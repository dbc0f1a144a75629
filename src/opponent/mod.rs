//! Opponent move generation.
//!
//! The session never reaches for an ambient generator: the opponent's move
//! comes from an injected `OpponentPolicy`.
//!
//! - `UniformOpponent`: seeded uniform draw over the three moves
//! - `ScriptedOpponent`: replays a fixed sequence, for deterministic tests

use crate::core::{GameError, GameRng, GameRngState, SessionConfig};
use crate::moves::{Move, MoveCatalog, MOVE_COUNT};

/// Source of opponent moves.
pub trait OpponentPolicy: Send {
    /// Choose the opponent's move for the turn being resolved.
    fn choose_move(&mut self) -> Move;
}

/// Uniform random opponent policy.
///
/// Each of the three moves is drawn with probability 1/3.
#[derive(Clone, Debug)]
pub struct UniformOpponent {
    rng: GameRng,
}

impl UniformOpponent {
    /// Create a uniform opponent with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a uniform opponent seeded from the session config.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.seed)
    }

    /// Resume from a captured RNG position.
    #[must_use]
    pub fn from_rng_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }

    /// Capture the RNG position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl OpponentPolicy for UniformOpponent {
    fn choose_move(&mut self) -> Move {
        let idx = self.rng.gen_range_usize(0..MOVE_COUNT);
        MoveCatalog::all_moves()[idx]
    }
}

/// Replays a fixed move sequence, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct ScriptedOpponent {
    script: Vec<Move>,
    cursor: usize,
}

impl ScriptedOpponent {
    /// Create a scripted opponent. The script must not be empty.
    pub fn new(script: impl Into<Vec<Move>>) -> Result<Self, GameError> {
        let script = script.into();
        if script.is_empty() {
            return Err(GameError::invalid_move("empty opponent script"));
        }
        Ok(Self { script, cursor: 0 })
    }

    /// An opponent that always plays `mv`.
    #[must_use]
    pub fn always(mv: Move) -> Self {
        Self {
            script: vec![mv],
            cursor: 0,
        }
    }
}

impl OpponentPolicy for ScriptedOpponent {
    fn choose_move(&mut self) -> Move {
        let mv = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        mv
    }
}

impl<P: OpponentPolicy + ?Sized> OpponentPolicy for Box<P> {
    fn choose_move(&mut self) -> Move {
        (**self).choose_move()
    }
}
