//! Builder for constructing round machines.

use crate::builder::config::RoundConfig;
use crate::builder::error::ConfigError;
use crate::predictor::RandomSource;
use crate::round::RoundMachine;

/// Builder for constructing round machines with a fluent API.
///
/// Starts from [`RoundConfig::default`]; every setter overrides one field.
/// The configuration is validated once, in [`build`](Self::build).
///
/// # Example
///
/// ```rust
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use rpsmind::builder::RoundMachineBuilder;
///
/// let machine = RoundMachineBuilder::new()
///     .countdown_ticks(60)
///     .memory_capacity(30)
///     .build(SmallRng::seed_from_u64(5))
///     .unwrap();
///
/// assert_eq!(machine.config().countdown_ticks, 60);
/// assert_eq!(machine.memory().capacity(), 30);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RoundMachineBuilder {
    config: RoundConfig,
}

impl RoundMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration, e.g. one loaded from JSON.
    pub fn config(mut self, config: RoundConfig) -> Self {
        self.config = config;
        self
    }

    pub fn countdown_ticks(mut self, ticks: u32) -> Self {
        self.config.countdown_ticks = ticks;
        self
    }

    pub fn result_ticks(mut self, ticks: u32) -> Self {
        self.config.result_ticks = ticks;
        self
    }

    pub fn memory_capacity(mut self, capacity: usize) -> Self {
        self.config.memory_capacity = capacity;
        self
    }

    pub fn ticks_per_count(mut self, ticks: u32) -> Self {
        self.config.ticks_per_count = ticks;
        self
    }

    /// Build the round machine.
    /// Returns an error listing every invalid setting.
    pub fn build<R: RandomSource>(self, rng: R) -> Result<RoundMachine<R>, ConfigError> {
        RoundMachine::with_config(self.config, rng)
    }
}
