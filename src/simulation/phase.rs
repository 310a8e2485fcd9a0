use super::error::Violation;

/// Where a simulation run stands.
///
/// `Running` and `Won` carry the round and turn most recently played;
/// a fresh run is `Running` at round 0, turn 0.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Running { round: usize, turn: usize },
    Won { round: usize, turn: usize },
    Failed(Violation),
}

impl Phase {
    pub const fn start() -> Self {
        Self::Running { round: 0, turn: 0 }
    }
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running { .. })
    }
    pub const fn is_won(&self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::start()
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Running { round, turn } => write!(f, "running (round {}, turn {})", round, turn),
            Self::Won { round, turn } => write!(f, "won (round {}, turn {})", round, turn),
            Self::Failed(violation) => write!(f, "failed: {}", violation),
        }
    }
}
