use crate::cards::Card;
use crate::dice::Dice;
use crate::simulation::Player;

/// Trait for purchase policies driven by the simulation.
///
/// A strategy sees the tracked player's state and nothing else. Apart from
/// whatever cursor it keeps for itself, it must be deterministic in that
/// state: the engine never retries a turn.
pub trait Strategy {
    /// How many dice to throw this turn. Asked before revenue is paid.
    fn dice(&self, player: &Player) -> Dice;
    /// Card to buy this turn, if any. Asked after revenue is paid, so the
    /// player's coins already include this turn's income.
    ///
    /// Asking for a card the player cannot afford is a contract violation
    /// and ends the run.
    fn buy(&mut self, player: &Player, round: usize) -> Option<Card>;
}

impl<S> Strategy for Box<S>
where
    S: Strategy + ?Sized,
{
    fn dice(&self, player: &Player) -> Dice {
        self.as_ref().dice(player)
    }
    fn buy(&mut self, player: &Player, round: usize) -> Option<Card> {
        self.as_mut().buy(player, round)
    }
}

impl<S> Strategy for &mut S
where
    S: Strategy + ?Sized,
{
    fn dice(&self, player: &Player) -> Dice {
        (**self).dice(player)
    }
    fn buy(&mut self, player: &Player, round: usize) -> Option<Card> {
        (**self).buy(player, round)
    }
}
