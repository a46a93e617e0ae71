//! Move selection for the agent.
//!
//! The predictor looks up what the human has historically played after their
//! last move, assumes they will do the most frequent thing again, and answers
//! with the move that beats it. Without usable history it falls back to a
//! uniformly random move drawn from an injected [`RandomSource`].

use crate::core::{Move, TransitionMemory};
use rand::Rng;

/// Capability to draw a uniformly random move.
///
/// Every [`rand::Rng`] is a `RandomSource`, so a seeded
/// `rand::rngs::SmallRng` gives reproducible play.
pub trait RandomSource {
    fn pick_move(&mut self) -> Move;
}

impl<R: Rng> RandomSource for R {
    fn pick_move(&mut self) -> Move {
        Move::ALL[self.random_range(0..Move::ALL.len())]
    }
}

/// Frequency-based forecaster over a [`TransitionMemory`].
///
/// # Example
///
/// ```rust
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use rpsmind::core::{Move, Reading, TransitionMemory};
/// use rpsmind::Predictor;
///
/// let mut memory = TransitionMemory::new();
/// memory.record(Some(Move::Rock), Reading::Hand(Move::Scissors));
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let predictor = Predictor::new();
///
/// // After Rock the human played Scissors, so the agent answers with Rock.
/// assert_eq!(predictor.forecast(Some(Move::Rock), &memory), Some(Move::Scissors));
/// assert_eq!(predictor.choose(Some(Move::Rock), &memory, &mut rng), Move::Rock);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Predictor;

impl Predictor {
    pub fn new() -> Self {
        Self
    }

    /// Most likely next human move, if the memory has an opinion.
    ///
    /// Returns `None` when there is no last move or nothing has followed it
    /// yet. Ties go to the earliest move in canonical order (Rock, Paper,
    /// Scissors).
    pub fn forecast(&self, last: Option<Move>, memory: &TransitionMemory) -> Option<Move> {
        let row = memory.history_for(last?);
        if row.total() == 0 {
            return None;
        }

        let mut best = Move::Rock;
        for (mv, count) in row.iter() {
            if count > row.get(best) {
                best = mv;
            }
        }
        Some(best)
    }

    /// The agent's move for the next round.
    pub fn choose<R>(&self, last: Option<Move>, memory: &TransitionMemory, rng: &mut R) -> Move
    where
        R: RandomSource + ?Sized,
    {
        match self.forecast(last, memory) {
            Some(expected) => expected.counter(),
            None => rng.pick_move(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Reading;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn memory_with(pairs: &[(Move, Move)]) -> TransitionMemory {
        let mut memory = TransitionMemory::new();
        for &(from, to) in pairs {
            memory.record(Some(from), Reading::Hand(to));
        }
        memory
    }

    #[test]
    fn counters_most_frequent_follow_up() {
        let memory = memory_with(&[
            (Move::Paper, Move::Scissors),
            (Move::Paper, Move::Scissors),
            (Move::Paper, Move::Rock),
        ]);
        let mut rng = SmallRng::seed_from_u64(1);

        let choice = Predictor::new().choose(Some(Move::Paper), &memory, &mut rng);
        assert_eq!(choice, Move::Rock);
    }

    #[test]
    fn ties_prefer_canonical_order() {
        let predictor = Predictor::new();

        let all_tied = memory_with(&[
            (Move::Rock, Move::Scissors),
            (Move::Rock, Move::Paper),
            (Move::Rock, Move::Rock),
        ]);
        assert_eq!(predictor.forecast(Some(Move::Rock), &all_tied), Some(Move::Rock));

        let paper_scissors = memory_with(&[
            (Move::Rock, Move::Scissors),
            (Move::Rock, Move::Paper),
        ]);
        assert_eq!(
            predictor.forecast(Some(Move::Rock), &paper_scissors),
            Some(Move::Paper)
        );
    }

    #[test]
    fn no_forecast_without_history() {
        let predictor = Predictor::new();
        let memory = memory_with(&[(Move::Rock, Move::Rock)]);

        assert_eq!(predictor.forecast(None, &memory), None);
        assert_eq!(predictor.forecast(Some(Move::Paper), &memory), None);
    }

    #[test]
    fn choice_is_deterministic_under_fixed_seed() {
        let predictor = Predictor::new();
        let memory = TransitionMemory::new();

        let first: Vec<Move> = {
            let mut rng = SmallRng::seed_from_u64(42);
            (0..20).map(|_| predictor.choose(None, &memory, &mut rng)).collect()
        };
        let second: Vec<Move> = {
            let mut rng = SmallRng::seed_from_u64(42);
            (0..20).map(|_| predictor.choose(None, &memory, &mut rng)).collect()
        };

        assert_eq!(first, second);
    }

    #[test]
    fn cold_start_is_roughly_uniform() {
        let predictor = Predictor::new();
        let memory = TransitionMemory::new();
        let mut rng = rand::rng();
        let trials = 3000;

        let mut tally = [0usize; 3];
        for _ in 0..trials {
            tally[predictor.choose(None, &memory, &mut rng).index()] += 1;
        }

        let expected = trials / 3;
        for count in tally {
            assert!(
                count.abs_diff(expected) <= expected / 10,
                "skewed cold start: {tally:?}"
            );
        }
    }

    #[test]
    fn dyn_random_source_is_accepted() {
        let predictor = Predictor::new();
        let memory = TransitionMemory::new();
        let mut rng = SmallRng::seed_from_u64(3);
        let source: &mut dyn RandomSource = &mut rng;

        let choice = predictor.choose(None, &memory, source);
        assert!(Move::ALL.contains(&choice));
    }
}
