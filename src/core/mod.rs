//! Core engine types: RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{SessionConfig, DEFAULT_RESOLUTION_DELAY};
pub use error::GameError;
pub use rng::{GameRng, GameRngState};
