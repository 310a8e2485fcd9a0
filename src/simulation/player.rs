use super::error::Error;
use super::error::Violation;
use crate::Coins;
use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use crate::STARTING_COINS;
use crate::TOLERANCE;
use crate::cards::Card;
use crate::cards::Hand;
use crate::dice::Dice;
use crate::economy::OPPONENT_DICE;
use crate::economy::Turn;

/// Player is the one seat the simulation tracks.
///
/// It starts with the standard hand and purse, and changes only by
/// collecting expected revenue and buying cards. Hands only grow.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    hand: Hand,
    coins: Coins,
    players: usize,
}

impl Player {
    /// Fails before anything is built if the table size is unsupported.
    pub fn new(players: usize) -> Result<Self, Error> {
        Ok(Self {
            hand: Hand::starting(),
            coins: STARTING_COINS,
            players: Self::seats(players)?,
        })
    }
    /// table sizes the game supports
    pub fn seats(players: usize) -> Result<usize, Error> {
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            Ok(players)
        } else {
            Err(Error::InvalidConfiguration {
                players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            })
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn coins(&self) -> Coins {
        self.coins
    }
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn can_afford(&self, card: Card) -> bool {
        self.coins + TOLERANCE >= card.cost() as Coins
    }
    pub fn is_winner(&self) -> bool {
        self.hand.is_victorious()
    }

    /// Expected income from someone's roll. On the owner's turn `dice` is
    /// what they chose to throw; opponents always throw one die.
    pub fn earn(&mut self, turn: Turn, dice: Dice) -> Coins {
        let dice = match turn {
            Turn::Mine => dice,
            Turn::Theirs => OPPONENT_DICE,
        };
        let income = self.hand.expected_revenue_on(turn, dice, self.players);
        self.coins += income;
        income
    }

    /// Pays for and takes the card. The purse is checked first, so a
    /// failed purchase leaves the player untouched. A balance within
    /// tolerance of the price pays it off exactly.
    pub fn buy(&mut self, card: Card, round: usize) -> Result<(), Violation> {
        if !self.can_afford(card) {
            return Err(Violation::Overspend {
                card,
                cost: card.cost(),
                round,
                coins: self.coins,
            });
        }
        self.coins = (self.coins - card.cost() as Coins).max(0.);
        self.hand.add(card);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn with_coins(mut self, coins: Coins) -> Self {
        self.coins = coins;
        self
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>7.2} coins {}", self.coins, self.hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_size_is_validated() {
        assert!(Player::new(1).is_err());
        assert!(Player::new(5).is_err());
        assert_eq!(
            Player::new(0),
            Err(Error::InvalidConfiguration {
                players: 0,
                min: 2,
                max: 4
            })
        );
        for players in 2..=4 {
            assert!(Player::new(players).is_ok());
        }
    }

    #[test]
    fn starts_with_three_coins_and_two_cards() {
        let player = Player::new(3).unwrap();
        assert_eq!(player.coins(), 3.);
        assert_eq!(player.hand(), &Hand::starting());
        assert!(!player.is_winner());
    }

    #[test]
    fn earning_on_my_turn() {
        let mut player = Player::new(4).unwrap();
        let income = player.earn(Turn::Mine, Dice::One);
        assert!((income - 0.5).abs() < 1e-6);
        assert!((player.coins() - 3.5).abs() < 1e-6);
    }

    #[test]
    fn opponents_always_roll_one_die() {
        let mut player = Player::new(4).unwrap();
        let income = player.earn(Turn::Theirs, Dice::Two);
        assert!((income - 1. / 6.).abs() < 1e-6);
    }

    #[test]
    fn buying_deducts_and_adds() {
        let mut player = Player::new(2).unwrap();
        player.buy(Card::Cafe, 1).unwrap();
        assert_eq!(player.coins(), 1.);
        assert!(player.hand().contains(Card::Cafe));
    }

    #[test]
    fn overspending_is_rejected_untouched() {
        let mut player = Player::new(2).unwrap();
        let before = player.clone();
        let err = player.buy(Card::Mine, 7).unwrap_err();
        assert_eq!(
            err,
            Violation::Overspend {
                card: Card::Mine,
                cost: 6,
                round: 7,
                coins: 3.,
            }
        );
        assert_eq!(player, before);
    }

    #[test]
    fn exact_change_is_fine() {
        let mut player = Player::new(2).unwrap();
        assert!(player.buy(Card::Forest, 1).is_ok());
        assert_eq!(player.coins(), 0.);
    }
}
