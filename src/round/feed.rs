//! Per-tick input from the outside world.

use crate::core::{Move, Reading};
use serde::{Deserialize, Serialize};

/// Everything the round machine needs to know about one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// The gesture classifier's verdict for this frame
    pub reading: Reading,
    /// Whether the human asked for a new round on this tick (edge-triggered)
    pub start: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self::idle()
    }
}

impl TickInput {
    /// Nothing in frame and no start request.
    pub fn idle() -> Self {
        Self {
            reading: Reading::NoHand,
            start: false,
        }
    }

    /// A start request with nothing in frame.
    pub fn start() -> Self {
        Self {
            reading: Reading::NoHand,
            start: true,
        }
    }

    /// A frame showing `reading`, without a start request.
    pub fn reading(reading: impl Into<Reading>) -> Self {
        Self {
            reading: reading.into(),
            start: false,
        }
    }

    /// A frame showing a hand playing `mv`.
    pub fn hand(mv: Move) -> Self {
        Self::reading(mv)
    }
}

/// Source of per-tick input, typically a camera plus gesture classifier and
/// a key handler.
pub trait GestureFeed {
    /// Classification of the current frame.
    fn current_reading(&mut self) -> Reading;

    /// Whether a new round was requested since the last tick.
    fn start_requested(&mut self) -> bool;

    /// Gather both signals into a [`TickInput`].
    fn poll(&mut self) -> TickInput {
        let start = self.start_requested();
        let reading = self.current_reading();
        TickInput { reading, start }
    }
}
