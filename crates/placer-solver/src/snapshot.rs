//! Dataset and result snapshots.
//!
//! A snapshot stores the linked dataset together with the kept placements so
//! a solve can be listed again later without reloading declarations.

use std::path::Path;

use placer_core::{Dataset, DocumentFormat, PlacerError, Result};
use serde::{Deserialize, Serialize};

use crate::accumulator::RankedPlacement;
use crate::results::PlacementResults;

/// A dataset with the placements found for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub dataset: Dataset,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<RankedPlacement>,
}

impl Snapshot {
    pub fn new(dataset: Dataset, results: &PlacementResults) -> Self {
        Self {
            dataset,
            results: results.placements().to_vec(),
        }
    }

    /// Checks every reference and hands back the dataset and results.
    ///
    /// # Errors
    ///
    /// Returns [`PlacerError::CorruptSnapshot`] if the dataset does not
    /// validate, or a placement breaks a placement rule: it must cover every
    /// team, name only known candidates, give no candidate to two teams and
    /// keep every decided team on its decision.
    pub fn restore(self) -> Result<(Dataset, PlacementResults)> {
        self.dataset.validate()?;
        let team_count = self.dataset.team_count();
        let candidate_count = self.dataset.candidate_count();
        let mut taken = vec![false; candidate_count];

        for placement in &self.results {
            let assignment = placement.assignment();
            if assignment.len() != team_count {
                return Err(PlacerError::CorruptSnapshot(format!(
                    "placement #{} covers {} of {} teams",
                    placement.sequence(),
                    assignment.len(),
                    team_count
                )));
            }
            let unknown = assignment.iter().find_map(|(team, candidate)| {
                candidate
                    .filter(|c| c.index() >= candidate_count)
                    .map(|c| (team, c))
            });
            if let Some((team, candidate)) = unknown {
                return Err(PlacerError::CorruptSnapshot(format!(
                    "placement #{} gives team {} unknown candidate {}",
                    placement.sequence(),
                    team,
                    candidate
                )));
            }

            taken.iter_mut().for_each(|t| *t = false);
            for (team, candidate) in assignment.iter() {
                if let Some(decided) = self.dataset.decided_candidate(team) {
                    if candidate != Some(decided) {
                        return Err(PlacerError::CorruptSnapshot(format!(
                            "placement #{} moves decided team {} off candidate {}",
                            placement.sequence(),
                            team,
                            decided
                        )));
                    }
                }
                if let Some(candidate) = candidate {
                    if std::mem::replace(&mut taken[candidate.index()], true) {
                        return Err(PlacerError::CorruptSnapshot(format!(
                            "placement #{} gives candidate {} to two teams",
                            placement.sequence(),
                            candidate
                        )));
                    }
                }
            }
        }

        Ok((self.dataset, PlacementResults::new(self.results)))
    }

    pub fn render(&self, format: DocumentFormat) -> Result<String> {
        format.render(self)
    }

    pub fn parse(s: &str, format: DocumentFormat) -> Result<Self> {
        format.parse(s)
    }

    /// Writes the snapshot; `.toml` files get TOML, anything else YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        DocumentFormat::write_file(path, self)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        DocumentFormat::read_file(path)
    }
}
