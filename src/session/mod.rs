//! Game session: turn lifecycle and cumulative score.
//!
//! ## State Machine
//!
//! ```text
//! Idle --submit_move--> AwaitingResolution --(delay elapses)--> Resolved
//! Resolved --submit_move--> AwaitingResolution
//! Idle|AwaitingResolution|Resolved --reset--> Idle
//! ```
//!
//! `GameSession` is the clock-agnostic engine. `TimedSession` drives it
//! from a Tokio timer.
//!
//! ## Stale Resolutions
//!
//! Each accepted submission and each reset advances the session epoch. A
//! `ResolutionTicket` carries the epoch it was issued in; resolving a ticket
//! from an older epoch is a no-op, so a reset can never be overwritten by a
//! timer armed before it.

mod engine;
mod state;
mod timed;

pub use engine::GameSession;
pub use state::{ResolutionTicket, Score, SessionSnapshot, Side, TurnReport, TurnState};
pub use timed::TimedSession;
