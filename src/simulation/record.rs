use super::player::Player;
use crate::Coins;
use crate::cards::Card;
use crate::dice::Dice;
use serde::Deserialize;
use serde::Serialize;

/// One row of a simulation trace: the tracked player right after a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub round: usize,
    /// None on the round 0 row that seeds the trace
    pub turn: Option<usize>,
    pub coins: Coins,
    /// gross expected revenue per roll of the hand at this point
    pub expected: Coins,
    /// establishments held
    pub cards: usize,
    /// landmarks held
    pub victories: usize,
    pub bought: Option<Card>,
}

impl Record {
    pub fn seed(player: &Player, dice: Dice) -> Self {
        Self::from((player, dice, 0, None, None))
    }
    pub fn header() -> String {
        format!(
            "{:>5} {:>4} {:>8} {:>8} {:>5} {:>7}  {}",
            "round", "turn", "coins", "expected", "cards", "victory", "bought"
        )
    }
}

/// (player, dice the owner would throw, round, turn, card bought this turn)
impl From<(&Player, Dice, usize, Option<usize>, Option<Card>)> for Record {
    fn from(
        (player, dice, round, turn, bought): (&Player, Dice, usize, Option<usize>, Option<Card>),
    ) -> Self {
        Self {
            round,
            turn,
            coins: player.coins(),
            expected: player
                .hand()
                .gross_expected_revenue(dice, player.players()),
            cards: player.hand().establishments(),
            victories: player.hand().victories(),
            bought,
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:>5} {:>4} {:>8.2} {:>8.3} {:>5} {:>7}  {}",
            self.round,
            self.turn.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string()),
            self.coins,
            self.expected,
            self.cards,
            self.victories,
            self.bought.map(|c| c.to_string()).unwrap_or_default(),
        )
    }
}
