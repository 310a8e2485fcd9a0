use super::roll::Roll;
use super::strategy::Strategy;
use crate::cards::Card;
use crate::dice::Dice;
use crate::simulation::Player;
use std::sync::Arc;

/// BuildOrder buys a fixed list of cards, strictly in order.
///
/// Each turn it looks at the first target it has not bought yet. If the
/// player can afford it, it is bought and the cursor moves on; otherwise
/// the turn passes and the same target is tried again next turn. Once the
/// list is exhausted it stops buying.
///
/// The targets are shared and immutable. Only the cursor is state, so a
/// fresh clone of a fresh order can be run again from the top.
#[derive(Debug, Clone)]
pub struct BuildOrder {
    targets: Arc<[Card]>,
    cursor: usize,
    roll: Roll,
}

impl BuildOrder {
    pub fn new(targets: &[Card], roll: Roll) -> Self {
        Self {
            targets: Arc::from(targets),
            cursor: 0,
            roll,
        }
    }
    pub fn targets(&self) -> &[Card] {
        &self.targets
    }
    /// the target being saved for, if any remain
    pub fn next(&self) -> Option<Card> {
        self.targets.get(self.cursor).copied()
    }
    pub fn is_done(&self) -> bool {
        self.cursor >= self.targets.len()
    }
    /// does the order, carried out in full, own every landmark
    pub fn is_complete(&self) -> bool {
        Card::victories()
            .iter()
            .all(|v| self.targets.contains(v))
    }

    fn advance(&mut self) -> Option<Card> {
        let card = self.next()?;
        self.cursor += 1;
        Some(card)
    }
}

impl Strategy for BuildOrder {
    fn dice(&self, player: &Player) -> Dice {
        self.roll.dice(player.hand())
    }
    fn buy(&mut self, player: &Player, _: usize) -> Option<Card> {
        match self.next() {
            Some(card) if player.can_afford(card) => self.advance(),
            _ => None,
        }
    }
}

impl std::fmt::Display for BuildOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let targets = self
            .targets
            .iter()
            .enumerate()
            .map(|(i, c)| match i == self.cursor {
                true => format!("*{}", c),
                false => format!("{}", c),
            })
            .collect::<Vec<String>>()
            .join(" > ");
        write!(f, "{} ({})", targets, self.roll)
    }
}
