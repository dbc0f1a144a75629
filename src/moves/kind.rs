//! The three legal moves and the dominance cycle between them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// A legal move.
///
/// Moves compare by identifier; the glyph is presentation-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// Symbolic identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// Display glyph. Opaque to the engine.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Move::Rock => "✊",
            Move::Paper => "📄",
            Move::Scissors => "✂️",
        }
    }

    /// Position in the catalog order (rock, paper, scissors).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Map a catalog position back to a move.
    pub fn from_index(index: usize) -> Result<Self, GameError> {
        match index {
            0 => Ok(Move::Rock),
            1 => Ok(Move::Paper),
            2 => Ok(Move::Scissors),
            _ => Err(GameError::invalid_move(format!("index {index}"))),
        }
    }

    /// The one move this move beats.
    #[must_use]
    pub const fn beats_move(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The one move that beats this move.
    #[must_use]
    pub const fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Check if this move beats the other.
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        self.beats_move() == other
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Move {
    type Err = GameError;

    /// Accepts English identifiers and the Spanish names
    /// (`piedra`, `papel`, `tijeras`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "piedra" => Ok(Move::Rock),
            "paper" | "papel" => Ok(Move::Paper),
            "scissors" | "tijeras" => Ok(Move::Scissors),
            _ => Err(GameError::invalid_move(s)),
        }
    }
}
