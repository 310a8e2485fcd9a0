pub mod expectation;
pub use expectation::*;

pub mod payoff;
pub use payoff::*;

pub mod revenue;
pub use revenue::*;

pub mod turn;
pub use turn::*;
