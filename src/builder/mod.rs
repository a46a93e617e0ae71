//! Configuration and construction of round machines.
//!
//! This module provides the tunable constants, a fluent builder, and the
//! `state_enum!` macro used to declare phases.

pub mod config;
pub mod error;
pub mod machine;
pub mod macros;

pub use config::RoundConfig;
pub use error::{ConfigError, ConfigViolation};
pub use machine::RoundMachineBuilder;
