use super::turn::Turn;
use crate::Coins;
use crate::TOLERANCE;
use crate::cards::Card;
use crate::cards::Hand;
use crate::dice::Dice;

impl Card {
    /// Fewest rolls, counted from the roll after the owner buys the card,
    /// before it has paid for itself if it fires on every roll it listens to.
    ///
    /// Every `players`-th roll is the owner's. Cards that only pay on the
    /// owner's turn wait a full cycle between payouts, while Blue cards can
    /// pay on the very next roll. None if the card never earns anything.
    pub fn fastest_payoff(&self, hand: &Hand, players: usize) -> Option<usize> {
        let players = players.max(1);
        let revenue = self.revenue(hand, players);
        if revenue <= 0. || self.activation().is_empty() {
            return None;
        }
        let payouts = (self.cost() as Coins / revenue).ceil() as usize;
        let mut paid = 0;
        for roll in 1..=payouts * players {
            let turn = match roll % players {
                0 => Turn::Mine,
                _ => Turn::Theirs,
            };
            if turn.triggers(*self) {
                paid += 1;
            }
            if paid >= payouts {
                return Some(roll);
            }
        }
        None
    }

    /// Rolls until the card is expected to have paid for itself, at its
    /// gross expected value. None if that value is zero.
    pub fn expected_payoff(&self, hand: &Hand, dice: Dice, players: usize) -> Option<usize> {
        let value = self.gross_expected_value(hand, dice, players);
        if value > 0. {
            Some((self.cost() as Coins / value - TOLERANCE).ceil() as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blue_pays_on_the_next_roll() {
        let hand = Hand::starting();
        assert_eq!(Card::WheatField.fastest_payoff(&hand, 4), Some(1));
        assert_eq!(Card::Forest.fastest_payoff(&hand, 4), Some(3));
    }

    #[test]
    fn green_waits_for_a_full_round() {
        let hand = Hand::starting();
        assert_eq!(Card::Bakery.fastest_payoff(&hand, 4), Some(4));
        assert_eq!(Card::Bakery.fastest_payoff(&hand, 2), Some(2));
        // 2 coins at 3 per activation is still one activation
        assert_eq!(Card::ConvenienceStore.fastest_payoff(&hand, 3), Some(3));
    }

    #[test]
    fn red_skips_the_owners_roll() {
        let hand = Hand::starting();
        // 2 payouts of 1 coin, on rolls 1 and 3 when heads up
        assert_eq!(Card::Cafe.fastest_payoff(&hand, 2), Some(3));
        assert_eq!(Card::Cafe.fastest_payoff(&hand, 4), Some(2));
    }

    #[test]
    fn worthless_cards_never_pay_off() {
        let hand = Hand::starting();
        assert_eq!(Card::BusinessCenter.fastest_payoff(&hand, 4), None);
        assert_eq!(Card::CheeseFactory.fastest_payoff(&hand, 4), None);
        assert_eq!(Card::RadioTower.fastest_payoff(&hand, 4), None);
        assert_eq!(Card::RadioTower.expected_payoff(&hand, Dice::One, 4), None);
        assert_eq!(Card::Mine.expected_payoff(&hand, Dice::One, 4), None);
    }

    #[test]
    fn expected_payoff_rounds_up() {
        let hand = Hand::starting();
        // 1/6 on every roll, mine or theirs
        assert_eq!(Card::WheatField.expected_payoff(&hand, Dice::One, 4), Some(6));
        // 1 coin at 2/6, only on one roll in four
        assert_eq!(Card::Bakery.expected_payoff(&hand, Dice::One, 4), Some(12));
    }
}
