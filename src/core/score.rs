//! Outcome rules and the running tally.

use super::moves::Move;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a round from the human's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Evaluate the rule table without touching any tally.
    ///
    /// ```rust
    /// use rpsmind::core::{Move, Outcome};
    ///
    /// assert_eq!(Outcome::of(Move::Rock, Move::Scissors), Outcome::Win);
    /// assert_eq!(Outcome::of(Move::Scissors, Move::Rock), Outcome::Lose);
    /// assert_eq!(Outcome::of(Move::Paper, Move::Paper), Outcome::Draw);
    /// ```
    pub fn of(human: Move, agent: Move) -> Self {
        if human == agent {
            Outcome::Draw
        } else if human.beats() == agent {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Win => "you win",
            Outcome::Lose => "you lose",
            Outcome::Draw => "draw",
        })
    }
}

/// Rounds won by each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub human_wins: u32,
    pub agent_wins: u32,
}

impl Score {
    /// Rounds that ended with a winner.
    pub fn rounds_decided(&self) -> u32 {
        self.human_wins + self.agent_wins
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "human {} | agent {}", self.human_wins, self.agent_wins)
    }
}

/// Applies the rule table and keeps the tally.
#[derive(Clone, Debug, Default)]
pub struct ScoreKeeper {
    score: Score,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide a round and credit the winner. Draws leave the tally alone.
    pub fn resolve(&mut self, human: Move, agent: Move) -> Outcome {
        let outcome = Outcome::of(human, agent);
        match outcome {
            Outcome::Win => self.score.human_wins += 1,
            Outcome::Lose => self.score.agent_wins += 1,
            Outcome::Draw => {}
        }
        outcome
    }

    pub fn score(&self) -> Score {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Move::{Paper, Rock, Scissors};

    #[test]
    fn outcome_table_is_exhaustive() {
        let table = [
            (Rock, Rock, Outcome::Draw),
            (Rock, Paper, Outcome::Lose),
            (Rock, Scissors, Outcome::Win),
            (Paper, Rock, Outcome::Win),
            (Paper, Paper, Outcome::Draw),
            (Paper, Scissors, Outcome::Lose),
            (Scissors, Rock, Outcome::Lose),
            (Scissors, Paper, Outcome::Win),
            (Scissors, Scissors, Outcome::Draw),
        ];

        for (human, agent, expected) in table {
            assert_eq!(Outcome::of(human, agent), expected, "{human} vs {agent}");
        }
    }

    #[test]
    fn resolve_credits_the_winner() {
        let mut keeper = ScoreKeeper::new();

        assert_eq!(keeper.resolve(Rock, Scissors), Outcome::Win);
        assert_eq!(keeper.score(), Score { human_wins: 1, agent_wins: 0 });

        assert_eq!(keeper.resolve(Rock, Paper), Outcome::Lose);
        assert_eq!(keeper.score(), Score { human_wins: 1, agent_wins: 1 });
    }

    #[test]
    fn draw_leaves_tally_unchanged() {
        let mut keeper = ScoreKeeper::new();
        keeper.resolve(Scissors, Scissors);

        assert_eq!(keeper.score(), Score::default());
        assert_eq!(keeper.score().rounds_decided(), 0);
    }

    #[test]
    fn score_display() {
        let score = Score {
            human_wins: 3,
            agent_wins: 5,
        };
        assert_eq!(score.to_string(), "human 3 | agent 5");
    }
}
