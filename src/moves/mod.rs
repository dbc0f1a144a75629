//! Move catalog: the three legal moves and the beats-relation.
//!
//! ## Rule Table
//!
//! | move     | beats    |
//! |----------|----------|
//! | rock     | scissors |
//! | paper    | rock     |
//! | scissors | paper    |
//!
//! Every pair of moves resolves to exactly one `Outcome`. `Move` is a closed
//! enum, so moves outside the catalog can't be constructed; text input goes
//! through `FromStr` and fails with `GameError::InvalidMove`.

mod catalog;
mod kind;

pub use catalog::{MoveCatalog, Outcome, MOVE_COUNT};
pub use kind::Move;
