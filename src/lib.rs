//! # rps-engine
//!
//! A rock-paper-scissors game engine: move resolution, turn sequencing and a
//! session-scoped score ledger.
//!
//! ## Design Principles
//!
//! 1. **Closed Move Set**: `Move` is an enum, so only the three catalog
//!    moves can reach the engine. Text input is parsed with `FromStr`.
//!
//! 2. **Injected Randomness**: The opponent move comes from an
//!    `OpponentPolicy` supplied by the caller. Seeded ChaCha8 by default.
//!
//! 3. **Explicit Scheduling**: A submission returns a `ResolutionTicket`
//!    tagged with the session epoch. Resetting the session invalidates every
//!    outstanding ticket.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `moves`: Move catalog and the beats-relation
//! - `opponent`: Opponent move policies
//! - `session`: Turn state machine, score, timer-driven session

pub mod core;
pub mod moves;
pub mod opponent;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, GameRngState, SessionConfig, DEFAULT_RESOLUTION_DELAY};

pub use crate::moves::{Move, MoveCatalog, Outcome, MOVE_COUNT};

pub use crate::opponent::{OpponentPolicy, ScriptedOpponent, UniformOpponent};

pub use crate::session::{
    GameSession, ResolutionTicket, Score, SessionSnapshot, Side, TimedSession, TurnReport,
    TurnState,
};
