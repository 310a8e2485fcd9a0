use crate::cards::Card;
use crate::cards::Color;

/// Whose roll is being resolved, from the owner's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Turn {
    Mine,
    Theirs,
}

impl Turn {
    pub const fn all() -> &'static [Self] {
        &[Self::Mine, Self::Theirs]
    }
    pub const fn admits(&self, color: Color) -> bool {
        match self {
            Self::Mine => color.pays_on_own_turn(),
            Self::Theirs => color.pays_on_other_turn(),
        }
    }
    pub const fn triggers(&self, card: Card) -> bool {
        self.admits(card.color())
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Mine => write!(f, "mine"),
            Self::Theirs => write!(f, "theirs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restaurants_only_on_their_turn() {
        assert!(!Turn::Mine.triggers(Card::Cafe));
        assert!(Turn::Theirs.triggers(Card::FamilyRestaurant));
    }

    #[test]
    fn shops_only_on_my_turn() {
        assert!(Turn::Mine.triggers(Card::Bakery));
        assert!(!Turn::Theirs.triggers(Card::CheeseFactory));
        assert!(!Turn::Theirs.triggers(Card::Stadium));
    }

    #[test]
    fn landmarks_never_trigger() {
        for card in Card::victories() {
            assert!(Turn::all().iter().all(|t| !t.triggers(*card)));
        }
    }
}
