use serde::Serialize;

/// Where the simulation stands between calls to [`crate::Simulation::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// populations built, no round played yet
    Initializing,
    /// agents are being matched and paid
    RoundInProgress,
    /// both populations are revising strategies
    ReviewPhase,
    /// every round has been played
    Finished,
}

impl Phase {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Initializing => "initializing",
                Self::RoundInProgress => "playing",
                Self::ReviewPhase => "reviewing",
                Self::Finished => "finished",
            }
        )
    }
}
