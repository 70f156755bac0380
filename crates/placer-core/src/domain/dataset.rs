//! The linked placement problem.

use serde::{Deserialize, Serialize};

use super::assignment::{Assignment, ResolvedPlacement};
use super::entities::{Candidate, Decision, Requirement, Team};
use super::ids::{CandidateId, DecisionId, RequirementId, TeamId};
use super::listing::{DatasetListing, Listed};
use super::loading::check_unique;
use crate::error::{EntityKind, PlacerError, Result};

/// Owns every entity of a placement problem.
///
/// A `Dataset` is produced by [`Dataset::load`] or by restoring a
/// snapshot. Ids index straight into the arenas, so the
/// accessors below panic only on ids from a different dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub(crate) teams: Vec<Team>,
    #[serde(default)]
    pub(crate) candidates: Vec<Candidate>,
    #[serde(default)]
    pub(crate) requirements: Vec<Requirement>,
    #[serde(default)]
    pub(crate) decisions: Vec<Decision>,
}

impl Dataset {
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.index()]
    }

    pub fn candidate(&self, id: CandidateId) -> &Candidate {
        &self.candidates[id.index()]
    }

    pub fn requirement(&self, id: RequirementId) -> &Requirement {
        &self.requirements[id.index()]
    }

    pub fn decision(&self, id: DecisionId) -> &Decision {
        &self.decisions[id.index()]
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Iterates a team's requirements in declaration order.
    pub fn team_requirements(&self, team: TeamId) -> impl Iterator<Item = &Requirement> + '_ {
        self.team(team)
            .requirements()
            .iter()
            .map(move |&id| self.requirement(id))
    }

    /// Returns the candidate a team is bound to, if it has a decision.
    pub fn decided_candidate(&self, team: TeamId) -> Option<CandidateId> {
        self.team(team)
            .decision()
            .map(|id| self.decision(id).candidate())
    }

    /// Finds a team by name or alias; first match in declaration order.
    pub fn find_team(&self, text: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.is_called(text))
    }

    /// Finds a candidate by name or alias; first match in declaration order.
    pub fn find_candidate(&self, text: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.is_called(text))
    }

    /// Pairs each team with its assigned candidate's name.
    pub fn resolve<'a>(&'a self, assignment: &'a Assignment) -> ResolvedPlacement<'a> {
        ResolvedPlacement::new(self, assignment)
    }

    /// Views one entity with its references resolved to names.
    pub fn listed<'a, T>(&'a self, item: &'a T) -> Listed<'a, T> {
        Listed::new(self, item)
    }

    /// Lists every team, candidate, requirement and decision by name.
    pub fn listing(&self) -> DatasetListing<'_> {
        DatasetListing::new(self)
    }

    /// Checks that every id and back-reference lines up, and that names and
    /// priorities obey the same rules `load` enforces.
    ///
    /// `load` builds consistent datasets by construction; this is for
    /// datasets that come back from a snapshot.
    pub fn validate(&self) -> Result<()> {
        fn corrupt(message: String) -> PlacerError {
            PlacerError::CorruptSnapshot(message)
        }

        check_unique(EntityKind::Team, self.teams.iter().map(Team::name))
            .map_err(|err| corrupt(err.to_string()))?;
        check_unique(EntityKind::Candidate, self.candidates.iter().map(Candidate::name))
            .map_err(|err| corrupt(err.to_string()))?;

        for (index, team) in self.teams.iter().enumerate() {
            if team.id().index() != index {
                return Err(corrupt(format!("team at {} has id {}", index, team.id())));
            }
            for &rid in team.requirements() {
                let owner = self.requirements.get(rid.index()).map(|r| r.team());
                if owner != Some(team.id()) {
                    return Err(corrupt(format!(
                        "team {} lists missing or foreign requirement {}",
                        team.id(),
                        rid
                    )));
                }
            }
            if let Some(did) = team.decision() {
                let owner = self.decisions.get(did.index()).map(|d| d.team());
                if owner != Some(team.id()) {
                    return Err(corrupt(format!(
                        "team {} has missing or foreign decision {}",
                        team.id(),
                        did
                    )));
                }
            }
        }

        for (index, candidate) in self.candidates.iter().enumerate() {
            if candidate.id().index() != index {
                return Err(corrupt(format!(
                    "candidate at {} has id {}",
                    index,
                    candidate.id()
                )));
            }
            let own = Some(candidate.id());
            let listed = candidate
                .requirements()
                .iter()
                .all(|rid| self.requirements.get(rid.index()).map(|r| r.candidate()) == own)
                && candidate
                    .decisions()
                    .iter()
                    .all(|did| self.decisions.get(did.index()).map(|d| d.candidate()) == own);
            if !listed {
                return Err(corrupt(format!(
                    "candidate {} has inconsistent back-references",
                    candidate.id()
                )));
            }
        }

        for (index, requirement) in self.requirements.iter().enumerate() {
            if requirement.id().index() != index
                || requirement.team().index() >= self.teams.len()
                || requirement.candidate().index() >= self.candidates.len()
            {
                return Err(corrupt(format!("requirement at {} is dangling", index)));
            }
            if requirement.priority() == 0 {
                return Err(corrupt(format!(
                    "requirement {} has priority 0",
                    requirement.id()
                )));
            }
            if !self.team(requirement.team()).requirements().contains(&requirement.id()) {
                return Err(corrupt(format!(
                    "requirement {} is not linked to its team",
                    requirement.id()
                )));
            }
        }

        for (index, decision) in self.decisions.iter().enumerate() {
            if decision.id().index() != index
                || decision.team().index() >= self.teams.len()
                || decision.candidate().index() >= self.candidates.len()
            {
                return Err(corrupt(format!("decision at {} is dangling", index)));
            }
            if self.team(decision.team()).decision() != Some(decision.id()) {
                return Err(corrupt(format!(
                    "decision {} is not linked to its team",
                    decision.id()
                )));
            }
        }

        Ok(())
    }
}
