use super::error::Error;
use super::error::Violation;
use super::phase::Phase;
use super::player::Player;
use super::record::Record;
use super::trace::Trace;
use crate::MAX_ROUNDS;
use crate::cards::Card;
use crate::dice::Dice;
use crate::economy::Turn;
use crate::strategy::Strategy;

/// Simulation plays one strategy against a table of unmodeled opponents.
///
/// Each round has one turn per player and the tracked player always goes
/// first. On their turn the strategy picks the dice, the hand pays out its
/// expected own-turn revenue, and the strategy may buy one card. On every
/// other turn the hand only collects what Red and Blue cards skim from a
/// single die. The run is won the turn the hand holds every landmark, and
/// fails if that has not happened by the end of `MAX_ROUNDS`.
///
/// Nothing is random. The same strategy at the same table size always
/// produces the same trace.
#[derive(Debug)]
pub struct Simulation<S> {
    strategy: S,
    player: Player,
    trace: Trace,
    phase: Phase,
}

impl<S> Simulation<S>
where
    S: Strategy,
{
    pub fn new(strategy: S, players: usize) -> Result<Self, Error> {
        let player = Player::new(players)?;
        let mut trace = Trace::default();
        trace.push(Record::seed(&player, strategy.dice(&player)));
        Ok(Self {
            strategy,
            player,
            trace,
            phase: Phase::start(),
        })
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }
    pub fn player(&self) -> &Player {
        &self.player
    }
    pub fn trace(&self) -> &Trace {
        &self.trace
    }
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Plays the next turn. Terminal phases are sticky: stepping a won run
    /// does nothing, and stepping a failed run reports the failure again.
    pub fn step(&mut self) -> Result<&Phase, Error> {
        let (round, turn) = match &self.phase {
            Phase::Running { round, turn } => self.next(*round, *turn),
            Phase::Won { .. } => return Ok(&self.phase),
            Phase::Failed(violation) => return Err(violation.clone().into()),
        };
        if round > MAX_ROUNDS {
            return Err(self.fail(Violation::Timeout {
                rounds: MAX_ROUNDS,
                victories: self.player.hand().victories(),
            }));
        }
        let bought = match turn {
            1 => self.mine(round).map_err(|v| self.fail(v))?,
            _ => self.theirs(),
        };
        let dice = self.strategy.dice(&self.player);
        self.trace
            .push(Record::from((&self.player, dice, round, Some(turn), bought)));
        log::trace!("{:>3}.{} {}", round, turn, self.player);
        self.phase = if self.player.is_winner() {
            log::info!("won in round {} turn {}", round, turn);
            Phase::Won { round, turn }
        } else {
            Phase::Running { round, turn }
        };
        Ok(&self.phase)
    }

    /// Plays until the run is won, returning the full trace.
    pub fn run(mut self) -> Result<Trace, Error> {
        while !self.step()?.is_won() {}
        Ok(self.trace)
    }

    /// the tracked player's turn
    fn mine(&mut self, round: usize) -> Result<Option<Card>, Violation> {
        let dice: Dice = self.strategy.dice(&self.player);
        self.player.earn(Turn::Mine, dice);
        match self.strategy.buy(&self.player, round) {
            None => Ok(None),
            Some(card) => {
                self.player.buy(card, round)?;
                log::debug!("round {:>3} bought {} ({:.2} left)", round, card, self.player.coins());
                Ok(Some(card))
            }
        }
    }
    /// someone else's turn
    fn theirs(&mut self) -> Option<Card> {
        self.player.earn(Turn::Theirs, Dice::One);
        None
    }
    fn next(&self, round: usize, turn: usize) -> (usize, usize) {
        if turn == 0 || turn >= self.player.players() {
            (round + 1, 1)
        } else {
            (round, turn + 1)
        }
    }
    fn fail(&mut self, violation: Violation) -> Error {
        log::warn!("{}", violation);
        self.phase = Phase::Failed(violation.clone());
        Error::from(violation)
    }
}

/// Runs a strategy to completion at a table of `players`.
pub fn simulate<S>(strategy: S, players: usize) -> Result<Trace, Error>
where
    S: Strategy,
{
    Simulation::new(strategy, players)?.run()
}
