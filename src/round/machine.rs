//! Tick-driven round lifecycle.

use crate::builder::{ConfigError, RoundConfig};
use crate::core::{Move, Outcome, Reading, Score, ScoreKeeper, State, TransitionMemory};
use crate::predictor::{Predictor, RandomSource};
use crate::round::feed::{GestureFeed, TickInput};
use crate::round::phase::RoundPhase;
use serde::Serialize;

/// The transition a tick will perform, decided purely from the current state
/// and input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Waiting and nobody asked to play
    Idle,
    /// Commit the agent's move and begin the countdown
    Start,
    /// Countdown continues; the reading is shown but not committed
    Count { remaining: u32, reading: Reading },
    /// Countdown over with a valid hand: score it and learn from it
    Resolve { human: Move, agent: Move },
    /// Countdown over without a valid hand: discard the round
    Abort { reading: Reading },
    /// Result stays on display
    Hold { remaining: u32 },
    /// Result display over
    Clear,
}

/// What happened during a tick, for the shell to react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TickEvent {
    Idle,
    Started { agent: Move },
    Counted { remaining: u32 },
    Resolved { human: Move, agent: Move, outcome: Outcome },
    Aborted { reading: Reading },
    Holding { remaining: u32 },
    Cleared,
}

/// Snapshot of every display field, ready to hand to a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoundView {
    pub phase: RoundPhase,
    pub timer: u32,
    pub countdown: Option<u32>,
    pub agent_move: Option<Move>,
    pub human_move: Option<Move>,
    pub outcome: Option<Outcome>,
    pub live_reading: Option<Reading>,
    pub score: Score,
}

/// Adaptive rock-paper-scissors opponent driven one tick at a time.
///
/// The agent commits to its move when the round starts, using only what the
/// memory held before the round. The human's gesture is read on the tick the
/// countdown reaches zero. Rounds ending on a sentinel reading are discarded
/// without scoring or learning.
///
/// # Example
///
/// ```rust
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use rpsmind::core::Move;
/// use rpsmind::round::{RoundMachine, RoundPhase, TickInput};
///
/// let mut machine = RoundMachine::new(SmallRng::seed_from_u64(1));
/// machine.tick(TickInput::start());
/// assert_eq!(machine.phase(), RoundPhase::Counting);
///
/// for _ in 0..30 {
///     machine.tick(TickInput::hand(Move::Rock));
/// }
/// assert_eq!(machine.phase(), RoundPhase::Result);
/// assert_eq!(machine.finalized_human_move(), Some(Move::Rock));
/// ```
#[derive(Clone, Debug)]
pub struct RoundMachine<R> {
    config: RoundConfig,
    phase: RoundPhase,
    timer: u32,
    agent_move: Option<Move>,
    human_move: Option<Move>,
    outcome: Option<Outcome>,
    live_reading: Option<Reading>,
    previous_human: Option<Move>,
    memory: TransitionMemory,
    keeper: ScoreKeeper,
    predictor: Predictor,
    rng: R,
}

impl<R: RandomSource> RoundMachine<R> {
    /// Create a machine with the default configuration.
    pub fn new(rng: R) -> Self {
        Self::unchecked(RoundConfig::default(), rng)
    }

    /// Create a machine after validating `config`.
    pub fn with_config(config: RoundConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::unchecked(config, rng))
    }

    fn unchecked(config: RoundConfig, rng: R) -> Self {
        Self {
            config,
            phase: RoundPhase::Waiting,
            timer: 0,
            agent_move: None,
            human_move: None,
            outcome: None,
            live_reading: None,
            previous_human: None,
            memory: TransitionMemory::with_capacity(config.memory_capacity),
            keeper: ScoreKeeper::new(),
            predictor: Predictor::new(),
            rng,
        }
    }

    /// Decide what `input` would do to the machine, without doing it.
    pub fn plan(&self, input: &TickInput) -> Step {
        match self.phase {
            RoundPhase::Waiting if input.start => Step::Start,
            RoundPhase::Waiting => Step::Idle,
            RoundPhase::Counting => {
                let remaining = self.timer.saturating_sub(1);
                if remaining > 0 {
                    return Step::Count {
                        remaining,
                        reading: input.reading,
                    };
                }
                match (input.reading.as_move(), self.agent_move) {
                    (Some(human), Some(agent)) => Step::Resolve { human, agent },
                    _ => Step::Abort {
                        reading: input.reading,
                    },
                }
            }
            RoundPhase::Result => {
                let remaining = self.timer.saturating_sub(1);
                if remaining > 0 {
                    Step::Hold { remaining }
                } else {
                    Step::Clear
                }
            }
        }
    }

    /// Advance one tick.
    pub fn tick(&mut self, input: TickInput) -> TickEvent {
        let step = self.plan(&input);
        self.apply(step)
    }

    /// Advance one tick, pulling input from `feed`.
    pub fn tick_with<F>(&mut self, feed: &mut F) -> TickEvent
    where
        F: GestureFeed + ?Sized,
    {
        let input = feed.poll();
        self.tick(input)
    }

    /// Carry out a step produced by [`plan`](Self::plan).
    ///
    /// Steps are meant to come from `plan` on the current state; applying a
    /// step planned for a different phase moves the machine anyway.
    pub fn apply(&mut self, step: Step) -> TickEvent {
        let from = self.phase;
        let event = match step {
            Step::Idle => TickEvent::Idle,
            Step::Start => {
                let agent = self
                    .predictor
                    .choose(self.previous_human, &self.memory, &mut self.rng);
                log::debug!(
                    "round starting: agent commits {agent}, memory holds {} transitions",
                    self.memory.size()
                );
                self.clear_round();
                self.agent_move = Some(agent);
                self.phase = RoundPhase::Counting;
                self.timer = self.config.countdown_ticks;
                TickEvent::Started { agent }
            }
            Step::Count { remaining, reading } => {
                self.timer = remaining;
                self.live_reading = Some(reading);
                TickEvent::Counted { remaining }
            }
            Step::Resolve { human, agent } => {
                let outcome = self.keeper.resolve(human, agent);
                self.memory.record(self.previous_human, Reading::Hand(human));
                self.previous_human = Some(human);
                log::info!(
                    "round resolved: human {human}, agent {agent}, {outcome} ({})",
                    self.keeper.score()
                );
                self.human_move = Some(human);
                self.outcome = Some(outcome);
                self.live_reading = Some(Reading::Hand(human));
                self.phase = RoundPhase::Result;
                self.timer = self.config.result_ticks;
                TickEvent::Resolved {
                    human,
                    agent,
                    outcome,
                }
            }
            Step::Abort { reading } => {
                log::info!("round discarded: read {reading} when the countdown ended");
                self.clear_round();
                self.phase = RoundPhase::Waiting;
                self.timer = 0;
                TickEvent::Aborted { reading }
            }
            Step::Hold { remaining } => {
                self.timer = remaining;
                TickEvent::Holding { remaining }
            }
            Step::Clear => {
                self.clear_round();
                self.phase = RoundPhase::Waiting;
                self.timer = 0;
                TickEvent::Cleared
            }
        };

        if from != self.phase {
            log::trace!("{} -> {}", from.name(), self.phase.name());
        }
        event
    }

    fn clear_round(&mut self) {
        self.agent_move = None;
        self.human_move = None;
        self.outcome = None;
        self.live_reading = None;
    }
}

impl<R> RoundMachine<R> {
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Ticks left in the current phase; zero while waiting.
    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// Digit to show during the countdown, counting down to 1.
    ///
    /// The digit is `timer / ticks_per_count + 1`, capped at the first digit
    /// so the start tick does not flash an extra one. With the defaults
    /// (30 ticks, 10 per digit) the ticks after the start show 3 ten times,
    /// 2 ten times and 1 nine times.
    pub fn countdown(&self) -> Option<u32> {
        let per = self.config.ticks_per_count.max(1);
        let first = self.config.countdown_ticks.div_ceil(per);
        (self.phase == RoundPhase::Counting).then(|| (self.timer / per + 1).min(first))
    }

    /// The agent's move, from round start until the result is cleared.
    pub fn committed_agent_move(&self) -> Option<Move> {
        self.agent_move
    }

    /// The human's scored move, while the result is on display.
    pub fn finalized_human_move(&self) -> Option<Move> {
        self.human_move
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The most recent reading seen during the current round, for display.
    pub fn live_reading(&self) -> Option<Reading> {
        self.live_reading
    }

    /// The human's last scored move, which the next prediction starts from.
    pub fn previous_human_move(&self) -> Option<Move> {
        self.previous_human
    }

    pub fn score(&self) -> Score {
        self.keeper.score()
    }

    pub fn memory(&self) -> &TransitionMemory {
        &self.memory
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn view(&self) -> RoundView {
        RoundView {
            phase: self.phase,
            timer: self.timer,
            countdown: self.countdown(),
            agent_move: self.agent_move,
            human_move: self.human_move,
            outcome: self.outcome,
            live_reading: self.live_reading,
            score: self.score(),
        }
    }
}
