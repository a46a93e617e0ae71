//! The round lifecycle.
//!
//! One [`RoundMachine`] call per frame drives a round through
//! Waiting -> Counting -> Result -> Waiting. Each tick is first planned as a
//! pure [`Step`] and then applied, so every transition can be inspected on
//! its own.

mod feed;
mod machine;
mod phase;

pub use feed::{GestureFeed, TickInput};
pub use machine::{RoundMachine, RoundView, Step, TickEvent};
pub use phase::RoundPhase;
