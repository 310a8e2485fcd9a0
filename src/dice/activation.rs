use super::dice::Dice;
use crate::Probability;

/// Activation is the set of roll totals on which a card pays out.
/// Totals live in 1..=12, so a u16 with bit n set for each total n is enough.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Activation(u16);

impl Activation {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn of(numbers: &[u8]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < numbers.len() {
            if numbers[i] < 16 {
                bits |= 1 << numbers[i];
            }
            i += 1;
        }
        Self(bits & Self::mask())
    }
    pub const fn union(&self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
    pub const fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn probability(&self, dice: Dice) -> Probability {
        dice.probability(*self)
    }

    const fn mask() -> u16 {
        0b0001_1111_1111_1110
    }
}

/// totals come out smallest first
impl Iterator for Activation {
    type Item = u8;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let n = self.0.trailing_zeros() as u8;
            self.0 &= !(1 << n);
            Some(n)
        }
    }
}

impl From<&[u8]> for Activation {
    fn from(numbers: &[u8]) -> Self {
        Self::of(numbers)
    }
}
impl From<Activation> for Vec<u8> {
    fn from(a: Activation) -> Self {
        a.collect()
    }
}

impl FromIterator<Activation> for Activation {
    fn from_iter<I: IntoIterator<Item = Activation>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |a, b| a.union(b))
    }
}

impl std::fmt::Display for Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        let numbers = Vec::<u8>::from(*self)
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{}", numbers)
    }
}
