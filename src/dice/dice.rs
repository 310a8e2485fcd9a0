use super::activation::Activation;
use crate::Probability;
use serde::Deserialize;
use serde::Serialize;

/// How many dice the active player throws this turn.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dice {
    #[default]
    One = 1,
    Two = 2,
}

impl Dice {
    pub const fn all() -> &'static [Self] {
        &[Self::One, Self::Two]
    }
    pub const fn outcomes(&self) -> u8 {
        match self {
            Self::One => 6,
            Self::Two => 36,
        }
    }
    /// number of equally likely outcomes that total n
    pub const fn ways(&self, n: u8) -> u8 {
        match self {
            Self::One => match n {
                1..=6 => 1,
                _ => 0,
            },
            Self::Two => match n {
                2..=12 => 6 - (7 - n as i8).unsigned_abs(),
                _ => 0,
            },
        }
    }
    /// chance that a single throw lands on any of the activation numbers.
    /// numbers the dice cannot total contribute nothing.
    pub fn probability(&self, activation: Activation) -> Probability {
        let hits = activation
            .into_iter()
            .map(|n| self.ways(n) as u32)
            .sum::<u32>();
        hits as Probability / self.outcomes() as Probability
    }
}

/// bool isomorphism, true meaning two dice
impl From<bool> for Dice {
    fn from(two: bool) -> Self {
        if two { Self::Two } else { Self::One }
    }
}
impl From<Dice> for bool {
    fn from(d: Dice) -> bool {
        d == Dice::Two
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "1d6"),
            Self::Two => write!(f, "2d6"),
        }
    }
}
