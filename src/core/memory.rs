//! Bounded memory of the human's move-to-move transitions.
//!
//! The memory is a sliding window: it keeps the most recent `capacity`
//! transitions in arrival order, alongside a 3x3 table counting how often each
//! (previous, next) pair appears in that window. Evicting the oldest
//! transition decrements exactly the cell its insertion incremented, so the
//! table always mirrors the window.

use super::moves::{Move, Reading};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of transitions remembered when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 15;

/// One observed step in the human's behavior.
///
/// # Example
///
/// ```rust
/// use rpsmind::core::{Move, Transition};
///
/// let transition = Transition {
///     from: Move::Rock,
///     to: Move::Paper,
/// };
/// assert_eq!(transition.from, Move::Rock);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    /// The move played in the earlier round
    pub from: Move,
    /// The move played in the round after it
    pub to: Move,
}

/// Counts of next moves following one particular move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Row([u32; 3]);

impl Row {
    /// How often `next` followed this row's move.
    pub fn get(&self, next: Move) -> u32 {
        self.0[next.index()]
    }

    /// Sum of every count in the row.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// `(next move, count)` pairs in canonical move order.
    pub fn iter(&self) -> impl Iterator<Item = (Move, u32)> + '_ {
        Move::ALL.into_iter().map(move |mv| (mv, self.get(mv)))
    }
}

/// Sliding-window transition counter.
///
/// # Example
///
/// ```rust
/// use rpsmind::core::{Move, Reading, TransitionMemory};
///
/// let mut memory = TransitionMemory::with_capacity(2);
/// memory.record(Some(Move::Rock), Reading::Hand(Move::Paper));
/// memory.record(Some(Move::Paper), Reading::Hand(Move::Paper));
/// memory.record(Some(Move::Paper), Reading::Hand(Move::Scissors));
///
/// // The oldest transition (Rock -> Paper) was evicted.
/// assert_eq!(memory.size(), 2);
/// assert_eq!(memory.history_for(Move::Rock).total(), 0);
/// assert_eq!(memory.history_for(Move::Paper).total(), 2);
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct TransitionMemory {
    counts: [Row; 3],
    window: VecDeque<Transition>,
    capacity: usize,
}

impl Default for TransitionMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionMemory {
    /// Create an empty memory holding up to [`DEFAULT_CAPACITY`] transitions.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty memory holding up to `capacity` transitions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: [Row::default(); 3],
            window: VecDeque::new(),
            capacity,
        }
    }

    /// Learn that the human played `current` after `previous`.
    ///
    /// Sentinel readings are ignored. When `previous` is `None` (nothing
    /// played yet) there is no transition to learn and the call is a no-op.
    /// Once the window is full, the oldest transition is forgotten.
    pub fn record(&mut self, previous: Option<Move>, current: Reading) {
        let Some(to) = current.as_move() else {
            return;
        };
        let Some(from) = previous else {
            return;
        };

        let transition = Transition { from, to };
        self.counts[from.index()].0[to.index()] += 1;
        self.window.push_back(transition);

        if self.window.len() > self.capacity {
            if let Some(oldest) = self.window.pop_front() {
                let cell = &mut self.counts[oldest.from.index()].0[oldest.to.index()];
                debug_assert!(*cell > 0, "evicted transition was never counted");
                *cell -= 1;
                log::trace!("evicted {} -> {}", oldest.from, oldest.to);
            }
        }
    }

    /// Read-only view of what followed `mv` within the window.
    pub fn history_for(&self, mv: Move) -> Row {
        self.counts[mv.index()]
    }

    /// Count of a single transition within the window.
    pub fn count(&self, from: Move, to: Move) -> u32 {
        self.counts[from.index()].get(to)
    }

    /// Number of transitions currently remembered.
    pub fn size(&self) -> usize {
        self.window.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Remembered transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.window.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(mv: Move) -> Reading {
        Reading::Hand(mv)
    }

    fn total_count(memory: &TransitionMemory) -> u32 {
        Move::ALL
            .iter()
            .map(|&mv| memory.history_for(mv).total())
            .sum()
    }

    #[test]
    fn new_memory_is_empty() {
        let memory = TransitionMemory::new();
        assert!(memory.is_empty());
        assert_eq!(memory.size(), 0);
        assert_eq!(memory.capacity(), DEFAULT_CAPACITY);
        assert_eq!(total_count(&memory), 0);
    }

    #[test]
    fn record_counts_transition() {
        let mut memory = TransitionMemory::new();
        memory.record(Some(Move::Rock), hand(Move::Scissors));

        assert_eq!(memory.size(), 1);
        assert_eq!(memory.count(Move::Rock, Move::Scissors), 1);
        assert_eq!(memory.history_for(Move::Rock).get(Move::Scissors), 1);
        assert_eq!(memory.history_for(Move::Scissors).total(), 0);
    }

    #[test]
    fn record_without_previous_is_noop() {
        let mut memory = TransitionMemory::new();
        memory.record(None, hand(Move::Rock));

        assert!(memory.is_empty());
        assert_eq!(total_count(&memory), 0);
    }

    #[test]
    fn record_ignores_sentinels() {
        let mut memory = TransitionMemory::new();
        memory.record(Some(Move::Rock), Reading::NoHand);
        memory.record(Some(Move::Paper), Reading::Unrecognized);

        assert!(memory.is_empty());
        assert_eq!(total_count(&memory), 0);
    }

    #[test]
    fn window_is_bounded() {
        let mut memory = TransitionMemory::new();
        let mut previous = Move::Rock;
        for i in 0..40 {
            let next = Move::ALL[i % 3];
            memory.record(Some(previous), hand(next));
            previous = next;
        }

        assert_eq!(memory.size(), DEFAULT_CAPACITY);
        assert_eq!(total_count(&memory), DEFAULT_CAPACITY as u32);
    }

    #[test]
    fn eviction_decrements_oldest_cell() {
        let mut memory = TransitionMemory::new();
        for _ in 0..16 {
            memory.record(Some(Move::Paper), hand(Move::Rock));
        }

        assert_eq!(memory.count(Move::Paper, Move::Rock), 15);
        assert_eq!(memory.size(), 15);
    }

    #[test]
    fn eviction_forgets_first_transition() {
        let mut memory = TransitionMemory::with_capacity(3);
        memory.record(Some(Move::Rock), hand(Move::Rock));
        memory.record(Some(Move::Paper), hand(Move::Paper));
        memory.record(Some(Move::Paper), hand(Move::Paper));
        memory.record(Some(Move::Scissors), hand(Move::Rock));

        assert_eq!(memory.count(Move::Rock, Move::Rock), 0);
        assert_eq!(memory.count(Move::Paper, Move::Paper), 2);
        assert_eq!(memory.count(Move::Scissors, Move::Rock), 1);

        let oldest = memory.transitions().next().copied();
        assert_eq!(
            oldest,
            Some(Transition {
                from: Move::Paper,
                to: Move::Paper
            })
        );
    }

    #[test]
    fn rows_match_window_entries() {
        let mut memory = TransitionMemory::with_capacity(5);
        let sequence = [
            Move::Rock,
            Move::Rock,
            Move::Paper,
            Move::Scissors,
            Move::Rock,
            Move::Paper,
            Move::Paper,
            Move::Scissors,
        ];
        for pair in sequence.windows(2) {
            memory.record(Some(pair[0]), hand(pair[1]));
        }

        for mv in Move::ALL {
            let queued = memory.transitions().filter(|t| t.from == mv).count() as u32;
            assert_eq!(memory.history_for(mv).total(), queued);
        }
    }

    #[test]
    fn row_iter_uses_canonical_order() {
        let mut memory = TransitionMemory::new();
        memory.record(Some(Move::Rock), hand(Move::Scissors));

        let row: Vec<_> = memory.history_for(Move::Rock).iter().collect();
        assert_eq!(
            row,
            vec![(Move::Rock, 0), (Move::Paper, 0), (Move::Scissors, 1)]
        );
    }

    #[test]
    fn huge_capacity_starts_empty() {
        let mut memory = TransitionMemory::with_capacity(usize::MAX);
        assert!(memory.is_empty());

        memory.record(Some(Move::Rock), hand(Move::Paper));
        assert_eq!(memory.size(), 1);
        assert_eq!(memory.capacity(), usize::MAX);
    }

    #[test]
    fn memory_serializes_window_and_counts() {
        let mut memory = TransitionMemory::with_capacity(4);
        memory.record(Some(Move::Rock), hand(Move::Paper));

        let json = serde_json::to_value(&memory).unwrap();

        assert_eq!(json["capacity"], 4);
        assert_eq!(json["window"][0]["from"], "rock");
        assert_eq!(json["counts"][0][1], 1);
    }
}
