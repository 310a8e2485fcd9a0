use super::record::Record;
use crate::cards::Card;
use crate::cards::Hand;
use crate::dice::Activation;
use serde::Deserialize;
use serde::Serialize;

/// Append-only log of a run, one row per turn after the round 0 seed.
/// Diagnostic output only; the engine never reads it back.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace(Vec<Record>);

impl Trace {
    pub fn push(&mut self, record: Record) {
        self.0.push(record);
    }
    pub fn rows(&self) -> &[Record] {
        &self.0
    }
    pub fn last(&self) -> Option<&Record> {
        self.0.last()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// rounds entered, counting the last partial one
    pub fn rounds(&self) -> usize {
        self.last().map(|r| r.round).unwrap_or_default()
    }
    /// turns played, excluding the seed row
    pub fn turns(&self) -> usize {
        self.0.iter().filter(|r| r.turn.is_some()).count()
    }
    /// cards bought, in purchase order
    pub fn purchases(&self) -> impl Iterator<Item = Card> + '_ {
        self.0.iter().filter_map(|r| r.bought)
    }
    /// every roll total the final build scores on: the starting hand plus
    /// whatever was bought along the way
    pub fn scores_on(&self) -> Activation {
        Hand::starting()
            .kinds()
            .chain(self.purchases())
            .map(|c| c.activation())
            .collect()
    }
}

impl From<Trace> for Vec<Record> {
    fn from(trace: Trace) -> Self {
        trace.0
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", Record::header())?;
        for record in self.0.iter() {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
