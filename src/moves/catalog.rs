//! Move catalog and the resolution rule.

use serde::{Deserialize, Serialize};

use super::kind::Move;
use crate::session::Side;

/// Number of legal moves.
pub const MOVE_COUNT: usize = 3;

static ALL_MOVES: [Move; MOVE_COUNT] = [Move::Rock, Move::Paper, Move::Scissors];

/// Result of resolving one move against another, from the first move's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Wins,
    Loses,
    Ties,
}

impl Outcome {
    /// The same result seen from the other side.
    #[must_use]
    pub const fn reversed(self) -> Outcome {
        match self {
            Outcome::Wins => Outcome::Loses,
            Outcome::Loses => Outcome::Wins,
            Outcome::Ties => Outcome::Ties,
        }
    }

    /// Which side scores, assuming the player's move was resolved first.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::Wins => Some(Side::Player),
            Outcome::Loses => Some(Side::Opponent),
            Outcome::Ties => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Outcome::Wins => "You win!",
            Outcome::Loses => "You lose!",
            Outcome::Ties => "It's a tie!",
        };
        f.write_str(message)
    }
}

/// Static catalog of legal moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveCatalog;

impl MoveCatalog {
    /// All legal moves in catalog order: rock, paper, scissors.
    ///
    /// ```
    /// use rps_engine::moves::{Move, MoveCatalog};
    ///
    /// assert_eq!(MoveCatalog::all_moves(), &[Move::Rock, Move::Paper, Move::Scissors]);
    /// ```
    #[must_use]
    pub fn all_moves() -> &'static [Move; MOVE_COUNT] {
        &ALL_MOVES
    }

    /// Resolve `a` against `b`. Total and pure.
    #[must_use]
    pub fn resolve(a: Move, b: Move) -> Outcome {
        if a == b {
            Outcome::Ties
        } else if a.beats(b) {
            Outcome::Wins
        } else {
            Outcome::Loses
        }
    }
}
