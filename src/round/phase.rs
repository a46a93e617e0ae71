//! Round phases.

crate::state_enum! {
    /// Where the round lifecycle currently stands.
    ///
    /// The machine cycles Waiting -> Counting -> Result -> Waiting for the life
    /// of the process; no phase is final.
    pub enum RoundPhase {
        /// Idle until the human asks for a round
        Waiting,
        /// Countdown running; the agent's move is already committed
        Counting,
        /// Outcome on display
        Result,
    }
}
