use crate::Coins;
use crate::simulation::Trace;
use serde::Deserialize;
use serde::Serialize;

/// Headline numbers of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub rounds: usize,
    pub turns: usize,
    pub coins: Coins,
    pub cards: usize,
    pub victories: usize,
    /// roll totals the final build pays out on
    pub scores_on: Vec<u8>,
}

impl From<&Trace> for Summary {
    fn from(trace: &Trace) -> Self {
        let last = trace.last();
        Self {
            rounds: trace.rounds(),
            turns: trace.turns(),
            coins: last.map(|r| r.coins).unwrap_or_default(),
            cards: last.map(|r| r.cards).unwrap_or_default(),
            victories: last.map(|r| r.victories).unwrap_or_default(),
            scores_on: trace.scores_on().collect(),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:>6} {:>6} {:>8.2} {:>6}  {}",
            self.rounds,
            self.turns,
            self.coins,
            self.cards,
            self.scores_on
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<String>>()
                .join(",")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::simulate;
    use crate::strategy::Preset;

    #[test]
    fn landmarks_only_scores_on_starting_rolls() {
        let trace = simulate(Preset::BuyNothing.strategy(), 4).unwrap();
        let summary = Summary::from(&trace);
        assert_eq!(summary.scores_on, vec![1, 2, 3]);
        assert_eq!(summary.rounds, 40);
        assert_eq!(summary.turns, 39 * 4 + 1);
        assert_eq!(summary.victories, 4);
    }

    #[test]
    fn purchases_widen_the_scoring_rolls() {
        let trace = simulate(Preset::FastTrainToBigCheese.strategy(), 4).unwrap();
        let summary = Summary::from(&trace);
        assert_eq!(summary.scores_on, vec![1, 2, 3, 7]);
        assert_eq!(summary.cards, 2 + 4 + 3);
    }
}
