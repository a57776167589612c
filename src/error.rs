use crate::strategy::Strategy;

/// Errors raised while laying out doors, playing strategies or reporting results.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("a simulation needs at least one door")]
    NoDoors,

    #[error("there are only cars behind the remaining doors")]
    NoGoatAvailable,

    #[error("every door is excluded, nothing left to pick")]
    EmptySelection,

    #[error("zero simulations performed yet for {strategy}")]
    NoTrialsRecorded { strategy: Strategy },
}
