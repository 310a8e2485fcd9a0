use super::turn::Turn;
use crate::Coins;
use crate::cards::Card;
use crate::cards::Hand;
use crate::dice::Dice;

/// Opponents are not modeled as players with strategies of their own.
/// Whenever someone else rolls, they are assumed to throw a single die.
pub const OPPONENT_DICE: Dice = Dice::One;

impl Card {
    /// Average coins per roll, ignoring whose roll it is.
    pub fn expected_value(&self, hand: &Hand, dice: Dice, players: usize) -> Coins {
        self.activation().probability(dice) * self.revenue(hand, players)
    }
    /// Average coins per roll on the given turn. Zero when the card's
    /// color does not listen to that turn.
    pub fn expected_value_on(&self, turn: Turn, hand: &Hand, dice: Dice, players: usize) -> Coins {
        if turn.triggers(*self) {
            self.expected_value(hand, dice, players)
        } else {
            0.
        }
    }
    pub fn expected_value_my_turn(&self, hand: &Hand, dice: Dice, players: usize) -> Coins {
        self.expected_value_on(Turn::Mine, hand, dice, players)
    }
    pub fn expected_value_other_turn(&self, hand: &Hand, dice: Dice, players: usize) -> Coins {
        self.expected_value_on(Turn::Theirs, hand, dice, players)
    }
    /// Average coins per roll over a whole round, where the owner rolls
    /// `dice` once and each opponent rolls a single die once.
    pub fn gross_expected_value(&self, hand: &Hand, dice: Dice, players: usize) -> Coins {
        let mine = self.expected_value_my_turn(hand, dice, players);
        let them = self.expected_value_other_turn(hand, OPPONENT_DICE, players);
        blend(mine, them, players)
    }
}

impl Hand {
    /// Sum of every held card's expected value on the given turn,
    /// duplicates counted once per copy.
    pub fn expected_revenue_on(&self, turn: Turn, dice: Dice, players: usize) -> Coins {
        self.iter()
            .map(|card| card.expected_value_on(turn, self, dice, players))
            .sum()
    }
    pub fn expected_revenue_my_turn(&self, dice: Dice, players: usize) -> Coins {
        self.expected_revenue_on(Turn::Mine, dice, players)
    }
    pub fn expected_revenue_other_turn(&self, dice: Dice, players: usize) -> Coins {
        self.expected_revenue_on(Turn::Theirs, dice, players)
    }
    pub fn gross_expected_revenue(&self, dice: Dice, players: usize) -> Coins {
        let mine = self.expected_revenue_my_turn(dice, players);
        let them = self.expected_revenue_other_turn(OPPONENT_DICE, players);
        blend(mine, them, players)
    }
}

/// one of every `players` rolls is the owner's
fn blend(mine: Coins, them: Coins, players: usize) -> Coins {
    let n = players.max(1) as Coins;
    (mine + (n - 1.) * them) / n
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: Coins = 1e-5;

    #[test]
    fn starting_hand_on_my_turn() {
        let hand = Hand::starting();
        let coins = hand.expected_revenue_my_turn(Dice::One, 4);
        assert!((coins - 0.5).abs() < EPS);
    }

    #[test]
    fn starting_hand_on_their_turn() {
        let hand = Hand::starting();
        let coins = hand.expected_revenue_other_turn(Dice::One, 4);
        assert!((coins - 1. / 6.).abs() < EPS);
    }

    #[test]
    fn wheat_field_is_dead_on_two_dice() {
        let hand = Hand::starting();
        assert_eq!(Card::WheatField.expected_value(&hand, Dice::Two, 4), 0.);
    }

    #[test]
    fn ineligible_colors_are_zero() {
        let hand = Hand::starting();
        assert!(Card::Cafe.expected_value(&hand, Dice::One, 4) > 0.);
        assert_eq!(Card::Cafe.expected_value_my_turn(&hand, Dice::One, 4), 0.);
        assert_eq!(Card::Bakery.expected_value_other_turn(&hand, Dice::One, 4), 0.);
        assert_eq!(Card::ShoppingMall.expected_value(&hand, Dice::One, 4), 0.);
    }

    #[test]
    fn factory_counts_matching_cards() {
        let hand = Hand::try_from("Ranch, Ranch, Cheese Factory").unwrap();
        let ev = Card::CheeseFactory.expected_value_my_turn(&hand, Dice::Two, 4);
        assert!((ev - 6. / 36. * 6.).abs() < EPS);
    }

    #[test]
    fn gross_weights_other_turns_by_opponents() {
        let hand = Hand::starting();
        let mine = hand.expected_revenue_my_turn(Dice::One, 2);
        let them = hand.expected_revenue_other_turn(Dice::One, 2);
        for players in 2..=4 {
            let n = players as Coins;
            let gross = hand.gross_expected_revenue(Dice::One, players);
            assert!((gross * n - mine - (n - 1.) * them).abs() < EPS);
        }
        assert!((hand.gross_expected_revenue(Dice::One, 4) - 0.25).abs() < EPS);
    }

    #[test]
    fn gross_assumes_opponents_roll_one_die() {
        let hand = Hand::starting();
        let gross = Card::WheatField.gross_expected_value(&hand, Dice::Two, 4);
        assert!((gross - 3. / 4. * 1. / 6.).abs() < EPS);
    }

    #[test]
    fn hand_sums_copies() {
        let one = Hand::try_from("Ranch").unwrap();
        let two = Hand::try_from("Ranch, Ranch").unwrap();
        let a = one.expected_revenue_other_turn(Dice::One, 3);
        let b = two.expected_revenue_other_turn(Dice::One, 3);
        assert!((b - 2. * a).abs() < EPS);
    }
}
