/// Symbol groups cards that factories and markets count.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Symbol {
    Wheat = 0,
    Cow = 1,
    Box = 2,
    Cup = 3,
    Gear = 4,
    Tower = 5,
    Factory = 6,
    Fruit = 7,
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Wheat => "wheat",
                Self::Cow => "cow",
                Self::Box => "box",
                Self::Cup => "cup",
                Self::Gear => "gear",
                Self::Tower => "tower",
                Self::Factory => "factory",
                Self::Fruit => "fruit",
            }
        )
    }
}
