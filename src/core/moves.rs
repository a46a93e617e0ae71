//! Moves and per-frame gesture readings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three playable hands.
///
/// The declaration order Rock, Paper, Scissors is the canonical order used
/// wherever ties must be broken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves in canonical order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Position in [`Move::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// The move this one defeats.
    pub const fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The move that defeats this one.
    pub const fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(ParseError::UnknownMove(s.to_string())),
        }
    }
}

/// What the gesture classifier saw in a single frame.
///
/// `NoHand` and `Unrecognized` are sentinels: the round machine consumes them
/// but never produces them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reading {
    Hand(Move),
    NoHand,
    Unrecognized,
}

impl Reading {
    pub const fn as_move(self) -> Option<Move> {
        match self {
            Reading::Hand(mv) => Some(mv),
            Reading::NoHand | Reading::Unrecognized => None,
        }
    }

    pub const fn is_sentinel(self) -> bool {
        self.as_move().is_none()
    }
}

impl From<Move> for Reading {
    fn from(mv: Move) -> Self {
        Reading::Hand(mv)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Hand(mv) => fmt::Display::fmt(mv, f),
            Reading::NoHand => f.write_str("no hand"),
            Reading::Unrecognized => f.write_str("unrecognized"),
        }
    }
}

/// Parses classifier labels. Move names parse to [`Reading::Hand`];
/// `none`/`nohand`/`no_hand` and `unknown`/`unrecognized` map to the sentinels.
impl FromStr for Reading {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(mv) = s.parse::<Move>() {
            return Ok(Reading::Hand(mv));
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "nohand" | "no_hand" => Ok(Reading::NoHand),
            "unknown" | "unrecognized" => Ok(Reading::Unrecognized),
            _ => Err(ParseError::UnknownReading(s.to_string())),
        }
    }
}

/// Errors from parsing classifier labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown move label '{0}'")]
    UnknownMove(String),

    #[error("unknown gesture label '{0}'")]
    UnknownReading(String),
}
