use crate::Coins;
use crate::cards::Card;

/// Ways a simulation run can fail. None of them are worth retrying: the
/// model is deterministic, so the same strategy fails the same way again.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{players} players is outside the supported {min}..={max}")]
    InvalidConfiguration {
        players: usize,
        min: usize,
        max: usize,
    },
    #[error("strategy violation: {0}")]
    StrategyViolation(#[from] Violation),
}

/// A defect in the strategy under test rather than in the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Violation {
    #[error("buying a {card} (cost {cost}) in round {round} with only {coins:.2} coins")]
    Overspend {
        card: Card,
        cost: u8,
        round: usize,
        coins: Coins,
    },
    #[error("strategy does not win in time ({rounds} rounds, {victories} of 4 landmarks)")]
    Timeout { rounds: usize, victories: usize },
}
