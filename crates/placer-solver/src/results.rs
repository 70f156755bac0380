//! Outcome of a solve.

use std::collections::BTreeMap;
use std::fmt;

use placer_core::{Assignment, Dataset, Disappointment};
use serde::{Deserialize, Serialize};

use crate::accumulator::{by_score, RankedPlacement};

/// The best placements of a solve, best first.
///
/// Empty when no valid combination exists; that is an answer, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacementResults {
    placements: Vec<RankedPlacement>,
}

impl PlacementResults {
    /// Wraps placements, sorting them by `(score, sequence)`.
    pub fn new(mut placements: Vec<RankedPlacement>) -> Self {
        placements.sort();
        Self { placements }
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn best(&self) -> Option<&RankedPlacement> {
        self.placements.first()
    }

    pub fn best_score(&self) -> Option<Disappointment> {
        self.best().map(RankedPlacement::score)
    }

    pub fn placements(&self) -> &[RankedPlacement] {
        &self.placements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedPlacement> {
        self.placements.iter()
    }

    /// One assignment per distinct score, the earliest found.
    pub fn by_score(&self) -> BTreeMap<Disappointment, Assignment> {
        by_score(self.placements.iter())
    }

    /// Formats the placements against their dataset, one block per entry.
    pub fn display<'a>(&'a self, dataset: &'a Dataset) -> ResultsDisplay<'a> {
        ResultsDisplay {
            results: self,
            dataset,
        }
    }

    pub fn into_placements(self) -> Vec<RankedPlacement> {
        self.placements
    }
}

impl<'a> IntoIterator for &'a PlacementResults {
    type Item = &'a RankedPlacement;
    type IntoIter = std::slice::Iter<'a, RankedPlacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

/// Listing of results resolved through a dataset.
pub struct ResultsDisplay<'a> {
    results: &'a PlacementResults,
    dataset: &'a Dataset,
}

impl fmt::Display for ResultsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.results.is_empty() {
            return writeln!(f, "no solution");
        }
        for (rank, placement) in self.results.iter().enumerate() {
            writeln!(f, "option {}: disappointment {}", rank + 1, placement.score())?;
            write!(f, "{}", placement.resolve(self.dataset))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placer_core::CandidateId;
    use placer_test::{load, two_teams};

    fn placement(score: f64, sequence: u64, slots: Vec<Option<usize>>) -> RankedPlacement {
        RankedPlacement::new(
            Disappointment::of(score),
            sequence,
            Assignment::from_combination(slots.into_iter().map(|s| s.map(CandidateId::new)).collect()),
        )
    }

    #[test]
    fn test_new_sorts() {
        let results = PlacementResults::new(vec![
            placement(990.0, 2, vec![Some(0), None]),
            placement(99.0, 4, vec![Some(1), Some(0)]),
            placement(990.0, 1, vec![None, Some(0)]),
        ]);

        let order: Vec<u64> = results.iter().map(RankedPlacement::sequence).collect();
        assert_eq!(order, vec![4, 1, 2]);
        assert_eq!(results.best_score(), Some(Disappointment::of(99.0)));
    }

    #[test]
    fn test_display_lists_placements() {
        let dataset = load(&two_teams());
        let results = PlacementResults::new(vec![placement(99.0, 4, vec![Some(1), Some(0)])]);

        assert_eq!(
            results.display(&dataset).to_string(),
            "option 1: disappointment 99.0\ntA -> Bob(#01)\ntB -> Alice(#00)\n"
        );
    }

    #[test]
    fn test_empty_displays_no_solution() {
        let dataset = load(&two_teams());
        let results = PlacementResults::default();
        assert!(results.best().is_none());
        assert_eq!(results.display(&dataset).to_string(), "no solution\n");
    }
}
