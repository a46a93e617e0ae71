//! Core State trait for round phases.
//!
//! Phases are plain values; the trait only exposes pure inspection methods
//! used for display and logging.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are small `Copy` values describing where a
/// machine currently is.
///
/// # Example
///
/// ```rust
/// use rpsmind::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum Light {
///     Red,
///     Green,
/// }
///
/// impl State for Light {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Red => "Red",
///             Self::Green => "Green",
///         }
///     }
/// }
///
/// assert_eq!(Light::Green.name(), "Green");
/// assert!(!Light::Red.is_final());
/// ```
pub trait State:
    Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;

    /// Check if this is a final (terminal) state.
    ///
    /// Cyclic machines never reach one. Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
