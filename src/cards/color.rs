/// Color decides whose rolls a card listens to.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Color {
    /// takes coins from whoever rolled, on other players' turns
    Red = 0,
    /// pays the owner on their own turn only
    Green = 1,
    /// pays the owner on every player's turn
    Blue = 2,
    /// major establishment, owner's turn only
    Purple = 3,
    /// landmark, never pays
    Gold = 4,
}

impl Color {
    pub const fn all() -> &'static [Self] {
        &[Self::Red, Self::Green, Self::Blue, Self::Purple, Self::Gold]
    }
    pub const fn pays_on_own_turn(&self) -> bool {
        matches!(self, Self::Blue | Self::Green | Self::Purple)
    }
    pub const fn pays_on_other_turn(&self) -> bool {
        matches!(self, Self::Red | Self::Blue)
    }
    pub const fn is_landmark(&self) -> bool {
        matches!(self, Self::Gold)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Red => "red",
                Self::Green => "green",
                Self::Blue => "blue",
                Self::Purple => "purple",
                Self::Gold => "gold",
            }
        )
    }
}
