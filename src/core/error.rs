//! Engine error types.

/// Errors surfaced by the engine.
///
/// Neither is fatal: the session stays usable after either one.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Input does not name one of the three catalog moves.
    #[display("Invalid move: {:?}", input)]
    InvalidMove {
        /// The rejected input.
        input: String,
    },

    /// A resolution is already pending.
    #[display("A turn is already awaiting resolution")]
    Busy,
}

impl GameError {
    pub(crate) fn invalid_move(input: impl Into<String>) -> Self {
        Self::InvalidMove {
            input: input.into(),
        }
    }
}

impl std::error::Error for GameError {}
