use crate::cards::Card;
use crate::cards::Hand;
use crate::dice::Dice;

/// When to throw two dice instead of one.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Roll {
    #[default]
    Never,
    Always,
    /// once the card is in hand
    After(Card),
}

impl Roll {
    pub fn dice(&self, hand: &Hand) -> Dice {
        match self {
            Self::Never => Dice::One,
            Self::Always => Dice::Two,
            Self::After(card) => Dice::from(hand.contains(*card)),
        }
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Never => write!(f, "one die"),
            Self::Always => write!(f, "two dice"),
            Self::After(card) => write!(f, "two dice after {}", card),
        }
    }
}
