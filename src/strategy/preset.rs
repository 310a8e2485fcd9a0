use super::order::BuildOrder;
use super::roll::Roll;
use crate::cards::Card;
use crate::cards::Card::*;

/// Named build orders worth comparing.
///
/// Every call to `strategy()` builds a fresh order with its cursor at the
/// first target, so a preset can be simulated any number of times.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Preset {
    /// landmarks only, Shopping Mall first for the Bakery bonus
    BuyNothing,
    /// one of nearly everything, two dice after Train Station
    BuyEverything,
    /// cheap Blue cards stacked on low rolls, then landmarks
    HighestMargin,
    /// Convenience Stores fed by the Shopping Mall bonus
    BigConvenienceStore,
    /// Train Station early, then factories on 7 and 8
    FastTrainToFactory,
    /// four Ranches into three Cheese Factories
    FastTrainToBigCheese,
    /// Ranches and Cafes in turn, then a Stadium before the landmarks
    BigRanch,
}

impl Preset {
    pub const fn all() -> &'static [Self] {
        &[
            Self::BuyNothing,
            Self::BuyEverything,
            Self::HighestMargin,
            Self::BigConvenienceStore,
            Self::FastTrainToFactory,
            Self::FastTrainToBigCheese,
            Self::BigRanch,
        ]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BuyNothing => "buy-nothing",
            Self::BuyEverything => "buy-everything",
            Self::HighestMargin => "highest-margin",
            Self::BigConvenienceStore => "big-convenience-store",
            Self::FastTrainToFactory => "fast-train-to-factory",
            Self::FastTrainToBigCheese => "fast-train-to-big-cheese",
            Self::BigRanch => "big-ranch",
        }
    }
    pub const fn targets(&self) -> &'static [Card] {
        match self {
            Self::BuyNothing => &[ShoppingMall, RadioTower, TrainStation, AmusementPark],
            Self::BuyEverything => &[
                WheatField,
                Ranch,
                Bakery,
                Cafe,
                ConvenienceStore,
                Forest,
                Stadium,
                CheeseFactory,
                FurnitureFactory,
                AppleOrchard,
                TrainStation,
                Mine,
                FruitAndVegetableMarket,
                ShoppingMall,
                Mine,
                AmusementPark,
                RadioTower,
            ],
            Self::HighestMargin => &[
                Ranch,
                WheatField,
                Ranch,
                Ranch,
                Stadium,
                WheatField,
                Ranch,
                WheatField,
                RadioTower,
                WheatField,
                ShoppingMall,
                TrainStation,
                AmusementPark,
            ],
            Self::BigConvenienceStore => &[
                WheatField,
                Ranch,
                Ranch,
                ConvenienceStore,
                ConvenienceStore,
                Ranch,
                ConvenienceStore,
                Forest,
                Bakery,
                ShoppingMall,
                ConvenienceStore,
                RadioTower,
                TrainStation,
                AmusementPark,
            ],
            Self::FastTrainToFactory => &[
                Ranch,
                Ranch,
                Forest,
                TrainStation,
                Ranch,
                CheeseFactory,
                Forest,
                FurnitureFactory,
                CheeseFactory,
                Forest,
                RadioTower,
                AmusementPark,
                ShoppingMall,
            ],
            Self::FastTrainToBigCheese => &[
                Ranch,
                Ranch,
                Ranch,
                Ranch,
                TrainStation,
                CheeseFactory,
                CheeseFactory,
                CheeseFactory,
                RadioTower,
                AmusementPark,
                ShoppingMall,
            ],
            Self::BigRanch => &[
                Ranch,
                Cafe,
                Ranch,
                Cafe,
                Ranch,
                Cafe,
                WheatField,
                Forest,
                Stadium,
                ShoppingMall,
                RadioTower,
                TrainStation,
                AmusementPark,
            ],
        }
    }
    pub const fn roll(&self) -> Roll {
        match self {
            Self::BuyNothing => Roll::Never,
            Self::BuyEverything => Roll::After(TrainStation),
            Self::HighestMargin => Roll::Never,
            Self::BigConvenienceStore => Roll::Never,
            Self::FastTrainToFactory => Roll::After(TrainStation),
            Self::FastTrainToBigCheese => Roll::After(TrainStation),
            Self::BigRanch => Roll::Never,
        }
    }
    pub fn strategy(&self) -> BuildOrder {
        BuildOrder::new(self.targets(), self.roll())
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.name())
    }
}
