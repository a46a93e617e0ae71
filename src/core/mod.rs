//! Core game types and logic.
//!
//! This module contains the pure building blocks of the opponent:
//! - Moves and gesture readings
//! - The bounded transition memory the predictor learns from
//! - Outcome rules and scoring
//! - The `State` trait implemented by round phases

mod memory;
mod moves;
mod score;
mod state;

pub use memory::{Row, Transition, TransitionMemory, DEFAULT_CAPACITY};
pub use moves::{Move, ParseError, Reading};
pub use score::{Outcome, Score, ScoreKeeper};
pub use state::State;
