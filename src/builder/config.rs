//! Tunable round constants.

use crate::builder::error::{ConfigError, ConfigViolation};
use crate::core::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Timing and memory settings for a [`RoundMachine`](crate::round::RoundMachine).
///
/// Missing fields take their defaults when deserializing:
///
/// ```rust
/// use rpsmind::builder::RoundConfig;
///
/// let config = RoundConfig::from_json(r#"{ "countdown_ticks": 45 }"#).unwrap();
/// assert_eq!(config.countdown_ticks, 45);
/// assert_eq!(config.result_ticks, 40);
/// assert_eq!(config.memory_capacity, 15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoundConfig {
    /// Ticks between the start signal and reading the human's move
    pub countdown_ticks: u32,

    /// Ticks the result stays on display
    pub result_ticks: u32,

    /// Transitions the predictor remembers
    pub memory_capacity: usize,

    /// Ticks per displayed countdown digit
    pub ticks_per_count: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            countdown_ticks: 30,
            result_ticks: 40,
            memory_capacity: DEFAULT_CAPACITY,
            ticks_per_count: 10,
        }
    }
}

impl RoundConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every rule, accumulating ALL violations.
    pub fn check(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let rule = |ok: bool,
                    violation: ConfigViolation|
         -> Validation<(), NonEmptyVec<ConfigViolation>> {
            if ok {
                Validation::success(())
            } else {
                Validation::fail(violation)
            }
        };

        let checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = vec![
            rule(self.countdown_ticks > 0, ConfigViolation::ZeroCountdown),
            rule(self.result_ticks > 0, ConfigViolation::ZeroResultHold),
            rule(self.memory_capacity > 0, ConfigViolation::ZeroMemoryCapacity),
            rule(self.ticks_per_count > 0, ConfigViolation::ZeroTicksPerCount),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`check`](Self::check) as a `Result`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.check() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}
