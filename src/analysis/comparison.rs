use super::summary::Summary;
use crate::simulation::Error;
use crate::simulation::simulate;
use crate::strategy::Preset;
use rayon::prelude::*;

/// Outcome of one preset at one table size.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub preset: Preset,
    pub players: usize,
    pub outcome: Result<Summary, Error>,
}

/// Comparison runs every (preset, table size) pair independently.
///
/// Runs share nothing, so they fan out across the rayon pool; results come
/// back in input order, presets outermost.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison(Vec<Entry>);

impl Comparison {
    pub fn run(presets: &[Preset], players: &[usize]) -> Self {
        let pairs = presets
            .iter()
            .flat_map(|p| players.iter().map(move |n| (*p, *n)))
            .collect::<Vec<(Preset, usize)>>();
        log::info!("comparing {} runs", pairs.len());
        Self(
            pairs
                .into_par_iter()
                .map(|(preset, players)| Entry {
                    preset,
                    players,
                    outcome: simulate(preset.strategy(), players).map(|t| Summary::from(&t)),
                })
                .collect(),
        )
    }
    pub fn entries(&self) -> &[Entry] {
        &self.0
    }
    /// fewest rounds to win at the given table size
    pub fn best(&self, players: usize) -> Option<&Entry> {
        self.0
            .iter()
            .filter(|e| e.players == players)
            .filter_map(|e| e.outcome.as_ref().ok().map(|s| (e, s.rounds)))
            .min_by_key(|(_, rounds)| *rounds)
            .map(|(e, _)| e)
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "{:<26} {:>7} {:>6} {:>6} {:>8} {:>6}  {}",
            "strategy", "players", "rounds", "turns", "coins", "cards", "scores on"
        )?;
        for entry in self.0.iter() {
            match &entry.outcome {
                Ok(summary) => writeln!(f, "{:<26} {:>7} {}", entry.preset, entry.players, summary)?,
                Err(e) => writeln!(f, "{:<26} {:>7} {}", entry.preset, entry.players, e)?,
            }
        }
        Ok(())
    }
}
