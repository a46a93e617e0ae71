//! Configuration errors for round machines.

use thiserror::Error;

/// A single rule broken by a [`RoundConfig`](super::RoundConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("countdown_ticks must be at least 1")]
    ZeroCountdown,

    #[error("result_ticks must be at least 1")]
    ZeroResultHold,

    #[error("memory_capacity must be at least 1")]
    ZeroMemoryCapacity,

    #[error("ticks_per_count must be at least 1")]
    ZeroTicksPerCount,
}

/// Errors that can occur when loading or building a round machine.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed round configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid round configuration: {}", join(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
