use super::card::Card;
use super::card::UnknownCard;
use super::symbol::Symbol;
use serde::Deserialize;
use serde::Serialize;

/// Hand is the multiset of cards a player owns.
///
/// Order never matters to the model, so a hand is stored as one counter per
/// card kind. This keeps it Copy and makes same-symbol counts a single pass
/// over nineteen counters. Copies are unbounded, so counters are full width.
/// Iteration yields cards in catalog order, repeated by multiplicity.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Card>", from = "Vec<Card>")]
pub struct Hand([usize; Card::COUNT]);

impl Hand {
    pub fn empty() -> Self {
        Self::default()
    }
    /// what everybody starts the game with
    pub fn starting() -> Self {
        Self::from(&[Card::WheatField, Card::Bakery][..])
    }

    pub fn add(&mut self, card: Card) {
        self.0[card as usize] += 1;
    }
    /// removes one copy. false if there was none to remove.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.0[card as usize] {
            0 => false,
            _ => {
                self.0[card as usize] -= 1;
                true
            }
        }
    }
    pub fn with(mut self, card: Card) -> Self {
        self.add(card);
        self
    }

    pub fn count(&self, card: Card) -> usize {
        self.0[card as usize]
    }
    pub fn count_symbol(&self, symbol: Symbol) -> usize {
        self.kinds()
            .filter(|c| c.symbol() == symbol)
            .map(|c| self.count(c))
            .sum()
    }
    pub fn contains(&self, card: Card) -> bool {
        self.count(card) > 0
    }
    pub fn size(&self) -> usize {
        self.0.iter().sum()
    }
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
    /// landmarks held, copies included
    pub fn victories(&self) -> usize {
        Card::victories().iter().map(|c| self.count(*c)).sum()
    }
    /// establishments held, copies included
    pub fn establishments(&self) -> usize {
        self.size() - self.victories()
    }
    pub fn is_victorious(&self) -> bool {
        Card::victories().iter().all(|c| self.contains(*c))
    }

    /// distinct kinds held
    pub fn kinds(&self) -> impl Iterator<Item = Card> + '_ {
        Card::all().iter().copied().filter(|c| self.contains(*c))
    }
    /// every card held, copies repeated
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.kinds()
            .flat_map(|c| std::iter::repeat(c).take(self.count(c)))
    }
}

impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        cards.iter().fold(Self::empty(), |hand, c| hand.with(*c))
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from(cards.as_slice())
    }
}
impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.iter().collect()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |hand, c| hand.with(c))
    }
}

/// str isomorphism
/// comma separated display names, e.g. "Wheat Field, Ranch, Ranch"
impl TryFrom<&str> for Hand {
    type Error = UnknownCard;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Card::try_from)
            .collect()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self
            .kinds()
            .map(|c| match self.count(c) {
                1 => format!("{}", c),
                n => format!("{} x{}", c, n),
            })
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "[{}]", cards)
    }
}
