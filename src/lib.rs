//! rpsmind: an adaptive rock-paper-scissors opponent
//!
//! The opponent learns which move a human tends to play after each of their
//! previous moves, keeping only the most recent transitions, and answers the
//! most likely one. Rounds are sequenced by a tick-driven state machine that
//! commits the agent's move before the human shows theirs.
//!
//! Gesture recognition, cameras and rendering live outside this crate: the
//! shell feeds one [`round::TickInput`] per frame and reads the machine's
//! display fields back.
//!
//! # Core Concepts
//!
//! - **TransitionMemory**: bounded sliding window of (previous, next) moves
//! - **Predictor**: counters the most frequent follow-up, random when unsure
//! - **ScoreKeeper**: rule table and running tally
//! - **RoundMachine**: Waiting -> Counting -> Result, one tick at a time
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use rpsmind::core::Move;
//! use rpsmind::round::{RoundMachine, TickEvent, TickInput};
//!
//! let mut machine = RoundMachine::new(SmallRng::seed_from_u64(3));
//! machine.tick(TickInput::start());
//!
//! let events: Vec<TickEvent> = (0..30)
//!     .map(|_| machine.tick(TickInput::hand(Move::Paper)))
//!     .collect();
//!
//! assert!(matches!(
//!     events.last(),
//!     Some(TickEvent::Resolved { human: Move::Paper, .. })
//! ));
//! assert!(machine.score().rounds_decided() <= 1);
//! ```

pub mod builder;
pub mod core;
pub mod predictor;
pub mod round;

// Re-export commonly used types
pub use builder::{ConfigError, RoundConfig, RoundMachineBuilder};
pub use crate::core::{Move, Outcome, Reading, Score, TransitionMemory};
pub use predictor::{Predictor, RandomSource};
pub use round::{RoundMachine, RoundPhase, TickEvent, TickInput};
