use crate::Coins;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Symbol;

impl Card {
    /// Coins one activation pays the owner, given what else they own and
    /// how many players sit at the table. Landmarks pay nothing.
    ///
    /// The match is exhaustive over the closed card set, so a new card kind
    /// cannot be added without deciding its rule here.
    pub fn revenue(&self, hand: &Hand, players: usize) -> Coins {
        let opponents = players.saturating_sub(1);
        let coins = match self {
            Self::WheatField => 1,
            Self::Ranch => 1,
            Self::Bakery => 1 + Self::mall(hand),
            Self::Cafe => 1 + Self::mall(hand),
            Self::ConvenienceStore => 3 + Self::mall(hand),
            Self::Forest => 1,
            Self::Stadium => 2 * opponents,
            Self::TvStation => 5,
            Self::BusinessCenter => 0,
            Self::CheeseFactory => 3 * hand.count_symbol(Symbol::Cow),
            Self::FurnitureFactory => 3 * hand.count_symbol(Symbol::Gear),
            Self::Mine => 5,
            Self::FamilyRestaurant => 2 + Self::mall(hand),
            Self::AppleOrchard => 3,
            Self::FruitAndVegetableMarket => 2 * hand.count_symbol(Symbol::Wheat),
            Self::TrainStation => 0,
            Self::ShoppingMall => 0,
            Self::AmusementPark => 0,
            Self::RadioTower => 0,
        };
        coins as Coins
    }

    /// bread and cup establishments earn one extra coin with a Shopping Mall
    fn mall(hand: &Hand) -> usize {
        if hand.contains(Self::ShoppingMall) {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_rates() {
        let hand = Hand::starting();
        assert_eq!(Card::WheatField.revenue(&hand, 4), 1.);
        assert_eq!(Card::Mine.revenue(&hand, 4), 5.);
        assert_eq!(Card::TvStation.revenue(&hand, 2), 5.);
        assert_eq!(Card::BusinessCenter.revenue(&hand, 4), 0.);
    }

    #[test]
    fn mall_bonus_applies_to_shops_and_cafes() {
        let hand = Hand::starting();
        let mall = Hand::starting().with(Card::ShoppingMall);
        for card in [Card::Bakery, Card::Cafe, Card::ConvenienceStore, Card::FamilyRestaurant] {
            assert_eq!(card.revenue(&mall, 4), card.revenue(&hand, 4) + 1.);
        }
        for card in [Card::WheatField, Card::Ranch, Card::Mine, Card::AppleOrchard] {
            assert_eq!(card.revenue(&mall, 4), card.revenue(&hand, 4));
        }
    }

    #[test]
    fn stadium_charges_every_opponent() {
        let hand = Hand::starting();
        assert_eq!(Card::Stadium.revenue(&hand, 2), 2.);
        assert_eq!(Card::Stadium.revenue(&hand, 3), 4.);
        assert_eq!(Card::Stadium.revenue(&hand, 4), 6.);
    }

    #[test]
    fn cheese_factory_pays_per_cow() {
        let hand = Hand::try_from("Ranch, Ranch, Wheat Field").unwrap();
        assert_eq!(Card::CheeseFactory.revenue(&hand, 4), 2. * 3.);
    }

    #[test]
    fn furniture_factory_pays_per_gear() {
        let hand = Hand::try_from("Forest, Mine").unwrap();
        assert_eq!(Card::FurnitureFactory.revenue(&hand, 4), 2. * 3.);
        assert_eq!(Card::FurnitureFactory.revenue(&Hand::starting(), 4), 0.);
    }

    #[test]
    fn market_pays_per_wheat() {
        let hand = Hand::try_from("Wheat Field, Apple Orchard, Bakery").unwrap();
        assert_eq!(Card::FruitAndVegetableMarket.revenue(&hand, 3), 2. * 2.);
    }

    #[test]
    fn landmarks_pay_nothing() {
        let hand = Hand::from(Card::all().as_slice());
        for card in Card::victories() {
            assert_eq!(card.revenue(&hand, 4), 0.);
        }
    }
}
