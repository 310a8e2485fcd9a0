use super::color::Color;
use super::symbol::Symbol;
use crate::dice::Activation;
use serde::Deserialize;
use serde::Serialize;

/// Card is one establishment or landmark kind from the base game.
///
/// The set is closed, so a card is just its kind: two Wheat Fields are the
/// same value. Everything about a card (cost, color, symbol, activation) is
/// a pure function of the kind, which makes the enum itself the catalog.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Card {
    WheatField = 0,
    Ranch = 1,
    Bakery = 2,
    Cafe = 3,
    ConvenienceStore = 4,
    Forest = 5,
    Stadium = 6,
    TvStation = 7,
    BusinessCenter = 8,
    CheeseFactory = 9,
    FurnitureFactory = 10,
    Mine = 11,
    FamilyRestaurant = 12,
    AppleOrchard = 13,
    FruitAndVegetableMarket = 14,
    TrainStation = 15,
    ShoppingMall = 16,
    AmusementPark = 17,
    RadioTower = 18,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no card named {0:?}")]
pub struct UnknownCard(pub String);

impl Card {
    pub const COUNT: usize = 19;

    /// every card kind, in catalog order
    pub const fn all() -> &'static [Self; Self::COUNT] {
        &[
            Self::WheatField,
            Self::Ranch,
            Self::Bakery,
            Self::Cafe,
            Self::ConvenienceStore,
            Self::Forest,
            Self::Stadium,
            Self::TvStation,
            Self::BusinessCenter,
            Self::CheeseFactory,
            Self::FurnitureFactory,
            Self::Mine,
            Self::FamilyRestaurant,
            Self::AppleOrchard,
            Self::FruitAndVegetableMarket,
            Self::TrainStation,
            Self::ShoppingMall,
            Self::AmusementPark,
            Self::RadioTower,
        ]
    }
    /// the landmarks. owning one of each wins the game.
    pub const fn victories() -> &'static [Self; 4] {
        &[
            Self::TrainStation,
            Self::ShoppingMall,
            Self::AmusementPark,
            Self::RadioTower,
        ]
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::WheatField => "Wheat Field",
            Self::Ranch => "Ranch",
            Self::Bakery => "Bakery",
            Self::Cafe => "Cafe",
            Self::ConvenienceStore => "Convenience Store",
            Self::Forest => "Forest",
            Self::Stadium => "Stadium",
            Self::TvStation => "TV Station",
            Self::BusinessCenter => "Business Center",
            Self::CheeseFactory => "Cheese Factory",
            Self::FurnitureFactory => "Furniture Factory",
            Self::Mine => "Mine",
            Self::FamilyRestaurant => "Family Restaurant",
            Self::AppleOrchard => "Apple Orchard",
            Self::FruitAndVegetableMarket => "Fruit and Vegetable Market",
            Self::TrainStation => "Train Station",
            Self::ShoppingMall => "Shopping Mall",
            Self::AmusementPark => "Amusement Park",
            Self::RadioTower => "Radio Tower",
        }
    }
    pub const fn color(&self) -> Color {
        match self {
            Self::WheatField => Color::Blue,
            Self::Ranch => Color::Blue,
            Self::Bakery => Color::Green,
            Self::Cafe => Color::Red,
            Self::ConvenienceStore => Color::Green,
            Self::Forest => Color::Blue,
            Self::Stadium => Color::Purple,
            Self::TvStation => Color::Purple,
            Self::BusinessCenter => Color::Purple,
            Self::CheeseFactory => Color::Green,
            Self::FurnitureFactory => Color::Green,
            Self::Mine => Color::Blue,
            Self::FamilyRestaurant => Color::Red,
            Self::AppleOrchard => Color::Blue,
            Self::FruitAndVegetableMarket => Color::Green,
            Self::TrainStation => Color::Gold,
            Self::ShoppingMall => Color::Gold,
            Self::AmusementPark => Color::Gold,
            Self::RadioTower => Color::Gold,
        }
    }
    pub const fn symbol(&self) -> Symbol {
        match self {
            Self::WheatField => Symbol::Wheat,
            Self::Ranch => Symbol::Cow,
            Self::Bakery => Symbol::Box,
            Self::Cafe => Symbol::Cup,
            Self::ConvenienceStore => Symbol::Box,
            Self::Forest => Symbol::Gear,
            Self::Stadium => Symbol::Tower,
            Self::TvStation => Symbol::Tower,
            Self::BusinessCenter => Symbol::Tower,
            Self::CheeseFactory => Symbol::Factory,
            Self::FurnitureFactory => Symbol::Factory,
            Self::Mine => Symbol::Gear,
            Self::FamilyRestaurant => Symbol::Cup,
            Self::AppleOrchard => Symbol::Wheat,
            Self::FruitAndVegetableMarket => Symbol::Fruit,
            Self::TrainStation => Symbol::Tower,
            Self::ShoppingMall => Symbol::Tower,
            Self::AmusementPark => Symbol::Tower,
            Self::RadioTower => Symbol::Tower,
        }
    }
    pub const fn cost(&self) -> u8 {
        match self {
            Self::WheatField => 1,
            Self::Ranch => 1,
            Self::Bakery => 1,
            Self::Cafe => 2,
            Self::ConvenienceStore => 2,
            Self::Forest => 3,
            Self::Stadium => 6,
            Self::TvStation => 7,
            Self::BusinessCenter => 8,
            Self::CheeseFactory => 5,
            Self::FurnitureFactory => 3,
            Self::Mine => 6,
            Self::FamilyRestaurant => 3,
            Self::AppleOrchard => 3,
            Self::FruitAndVegetableMarket => 2,
            Self::TrainStation => 4,
            Self::ShoppingMall => 10,
            Self::AmusementPark => 16,
            Self::RadioTower => 22,
        }
    }
    /// landmarks have no activation numbers
    pub const fn activation(&self) -> Activation {
        match self {
            Self::WheatField => Activation::of(&[1]),
            Self::Ranch => Activation::of(&[2]),
            Self::Bakery => Activation::of(&[2, 3]),
            Self::Cafe => Activation::of(&[2, 3]),
            Self::ConvenienceStore => Activation::of(&[4]),
            Self::Forest => Activation::of(&[5]),
            Self::Stadium => Activation::of(&[6]),
            Self::TvStation => Activation::of(&[6]),
            Self::BusinessCenter => Activation::of(&[6]),
            Self::CheeseFactory => Activation::of(&[7]),
            Self::FurnitureFactory => Activation::of(&[8]),
            Self::Mine => Activation::of(&[9]),
            Self::FamilyRestaurant => Activation::of(&[9, 10]),
            Self::AppleOrchard => Activation::of(&[10]),
            Self::FruitAndVegetableMarket => Activation::of(&[11, 12]),
            Self::TrainStation => Activation::empty(),
            Self::ShoppingMall => Activation::empty(),
            Self::AmusementPark => Activation::empty(),
            Self::RadioTower => Activation::empty(),
        }
    }
    pub const fn is_victory(&self) -> bool {
        self.color().is_landmark()
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Card {
    type Error = UnknownCard;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::all()
            .get(n as usize)
            .copied()
            .ok_or_else(|| UnknownCard(n.to_string()))
    }
}
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c as u8
    }
}

/// str isomorphism, by display name.
/// case and surrounding whitespace are ignored.
impl TryFrom<&str> for Card {
    type Error = UnknownCard;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let name = s.trim();
        Self::all()
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| UnknownCard(name.to_string()))
    }
}
impl TryFrom<String> for Card {
    type Error = UnknownCard;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Card> for String {
    fn from(c: Card) -> String {
        c.name().to_string()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_indexed_by_discriminant() {
        for (i, card) in Card::all().iter().enumerate() {
            assert_eq!(u8::from(*card) as usize, i);
            assert_eq!(Card::try_from(i as u8), Ok(*card));
        }
        assert!(Card::try_from(Card::COUNT as u8).is_err());
    }

    #[test]
    fn names_round_trip() {
        for card in Card::all() {
            assert_eq!(Card::try_from(card.name()), Ok(*card));
        }
        assert_eq!(Card::try_from("  tv station "), Ok(Card::TvStation));
        assert_eq!(
            Card::try_from("Casino"),
            Err(UnknownCard(String::from("Casino")))
        );
    }

    #[test]
    fn victories_are_exactly_the_gold_cards() {
        let gold = Card::all()
            .iter()
            .copied()
            .filter(Card::is_victory)
            .collect::<Vec<Card>>();
        assert_eq!(gold, Card::victories().to_vec());
        assert!(gold.iter().all(|c| c.activation().is_empty()));
    }

    #[test]
    fn establishments_activate_in_range() {
        for card in Card::all().iter().filter(|c| !c.is_victory()) {
            let numbers = Vec::<u8>::from(card.activation());
            assert!(!numbers.is_empty(), "{} never activates", card);
            assert!(numbers.iter().all(|n| (1..=12).contains(n)));
        }
    }

    #[test]
    fn serializes_by_name() {
        let json = serde_json::to_string(&Card::FruitAndVegetableMarket).unwrap();
        assert_eq!(json, "\"Fruit and Vegetable Market\"");
        let card = serde_json::from_str::<Card>("\"Mine\"").unwrap();
        assert_eq!(card, Card::Mine);
    }
}
