use crate::Coins;
use crate::cards::Card;
use crate::cards::Color;
use crate::cards::Hand;
use crate::dice::Activation;
use crate::dice::Dice;
use crate::economy::OPPONENT_DICE;
use crate::simulation::Error;
use crate::simulation::Player;

/// What one catalog card would be worth added to a given hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub card: Card,
    pub cost: u8,
    pub color: Color,
    pub activation: Activation,
    pub revenue: Coins,
    pub mine: Coins,
    pub theirs: Coins,
    pub gross: Coins,
    pub fastest: Option<usize>,
    pub expected: Option<usize>,
}

/// CardTable evaluates the whole catalog against one hand, dice choice
/// and table size. Rows come out in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct CardTable {
    hand: Hand,
    dice: Dice,
    players: usize,
    rows: Vec<Row>,
}

impl CardTable {
    pub fn new(hand: Hand, dice: Dice, players: usize) -> Result<Self, Error> {
        let players = Player::seats(players)?;
        let rows = Card::all()
            .iter()
            .map(|card| Row {
                card: *card,
                cost: card.cost(),
                color: card.color(),
                activation: card.activation(),
                revenue: card.revenue(&hand, players),
                mine: card.expected_value_my_turn(&hand, dice, players),
                theirs: card.expected_value_other_turn(&hand, OPPONENT_DICE, players),
                gross: card.gross_expected_value(&hand, dice, players),
                fastest: card.fastest_payoff(&hand, players),
                expected: card.expected_payoff(&hand, dice, players),
            })
            .collect();
        Ok(Self {
            hand,
            dice,
            players,
            rows,
        })
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn dice(&self) -> Dice {
        self.dice
    }
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
    pub fn row(&self, card: Card) -> &Row {
        &self.rows[u8::from(card) as usize]
    }
    pub fn header() -> String {
        format!(
            "{:<26} {:>4} {:<6} {:<8} {:>7} {:>7} {:>7} {:>7} {:>7} {:>8}",
            "card", "cost", "color", "rolls", "revenue", "mine", "theirs", "gross", "fastest", "expected"
        )
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rolls = |n: Option<usize>| n.map(|n| n.to_string()).unwrap_or_else(|| "-".into());
        write!(
            f,
            "{:<26} {:>4} {:<6} {:<8} {:>7.2} {:>7.3} {:>7.3} {:>7.3} {:>7} {:>8}",
            self.card,
            self.cost,
            self.color.to_string(),
            self.activation.to_string(),
            self.revenue,
            self.mine,
            self.theirs,
            self.gross,
            rolls(self.fastest),
            rolls(self.expected),
        )
    }
}

impl std::fmt::Display for CardTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} with {} at {} players", self.hand, self.dice, self.players)?;
        writeln!(f, "{}", Self::header())?;
        for row in self.rows.iter() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: Coins = 1e-5;

    #[test]
    fn one_row_per_catalog_card() {
        let table = CardTable::new(Hand::starting(), Dice::One, 4).unwrap();
        assert_eq!(table.rows().len(), Card::COUNT);
        for (row, card) in table.rows().iter().zip(Card::all()) {
            assert_eq!(row.card, *card);
            assert_eq!(table.row(*card), row);
        }
    }

    #[test]
    fn table_size_is_validated() {
        assert!(matches!(
            CardTable::new(Hand::starting(), Dice::One, 5),
            Err(Error::InvalidConfiguration { players: 5, .. })
        ));
    }

    #[test]
    fn wheat_field_at_four() {
        let table = CardTable::new(Hand::starting(), Dice::One, 4).unwrap();
        let row = table.row(Card::WheatField);
        assert_eq!(row.cost, 1);
        assert!((row.mine - 1. / 6.).abs() < EPS);
        assert!((row.theirs - 1. / 6.).abs() < EPS);
        assert!((row.gross - 1. / 6.).abs() < EPS);
        assert_eq!(row.fastest, Some(1));
        assert_eq!(row.expected, Some(6));
    }

    #[test]
    fn landmarks_never_pay_off() {
        let table = CardTable::new(Hand::starting(), Dice::Two, 3).unwrap();
        for card in Card::victories() {
            let row = table.row(*card);
            assert_eq!(row.gross, 0.);
            assert_eq!(row.fastest, None);
            assert_eq!(row.expected, None);
        }
    }

    #[test]
    fn factories_need_two_dice() {
        let one = CardTable::new(Hand::starting(), Dice::One, 2).unwrap();
        let two = CardTable::new(Hand::starting(), Dice::Two, 2).unwrap();
        let mut hand = Hand::starting();
        hand.add(Card::Ranch);
        let ranched = CardTable::new(hand, Dice::Two, 2).unwrap();
        assert_eq!(one.row(Card::CheeseFactory).mine, 0.);
        assert_eq!(two.row(Card::CheeseFactory).mine, 0.);
        assert!(ranched.row(Card::CheeseFactory).mine > 0.);
    }
}
