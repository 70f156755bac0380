//! Assignment snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::dataset::Dataset;
use super::entities::{Candidate, Team};
use super::ids::{CandidateId, TeamId};

/// One choice per team, in team id order. `None` leaves the team unassigned.
pub type Combination = Vec<Option<CandidateId>>;

/// Which candidate each team holds for one combination.
///
/// This is the scorer's whole view of the world: the dataset stays
/// immutable and every evaluated combination gets a fresh snapshot.
///
/// Serialized as a list of `{ team, candidate }` tables in team order, with
/// `candidate` omitted for unassigned teams, so it fits TOML as well as YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<AssignmentSlot>", into = "Vec<AssignmentSlot>")]
pub struct Assignment {
    slots: Combination,
}

/// Serialized form of one assignment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentSlot {
    pub team: TeamId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<CandidateId>,
}

impl TryFrom<Vec<AssignmentSlot>> for Assignment {
    type Error = String;

    fn try_from(slots: Vec<AssignmentSlot>) -> Result<Self, Self::Error> {
        slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                if slot.team.index() == i {
                    Ok(slot.candidate)
                } else {
                    Err(format!("slot {} is for team {}", i, slot.team))
                }
            })
            .collect::<Result<Combination, String>>()
            .map(Assignment::from_combination)
    }
}

impl From<Assignment> for Vec<AssignmentSlot> {
    fn from(assignment: Assignment) -> Self {
        assignment
            .iter()
            .map(|(team, candidate)| AssignmentSlot { team, candidate })
            .collect()
    }
}

impl Assignment {
    /// Creates an assignment with every team unassigned.
    pub fn unassigned(team_count: usize) -> Self {
        Self {
            slots: vec![None; team_count],
        }
    }

    pub fn from_combination(slots: Combination) -> Self {
        Self { slots }
    }

    /// Returns the candidate assigned to `team`.
    ///
    /// Teams outside the snapshot count as unassigned.
    pub fn get(&self, team: TeamId) -> Option<CandidateId> {
        self.slots.get(team.index()).copied().flatten()
    }

    pub fn set(&mut self, team: TeamId, candidate: Option<CandidateId>) {
        if team.index() >= self.slots.len() {
            self.slots.resize(team.index() + 1, None);
        }
        self.slots[team.index()] = candidate;
    }

    /// Overwrites every slot with one combination.
    pub fn assign_all(&mut self, combination: &[Option<CandidateId>]) {
        self.slots.clear();
        self.slots.extend_from_slice(combination);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TeamId, Option<CandidateId>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, &c)| (TeamId::new(i), c))
    }

    pub fn as_slice(&self) -> &[Option<CandidateId>] {
        &self.slots
    }

    pub fn into_combination(self) -> Combination {
        self.slots
    }
}

impl From<Combination> for Assignment {
    fn from(slots: Combination) -> Self {
        Assignment::from_combination(slots)
    }
}

/// An assignment viewed through its dataset, for listings.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedPlacement<'a> {
    dataset: &'a Dataset,
    assignment: &'a Assignment,
}

impl<'a> ResolvedPlacement<'a> {
    pub(crate) fn new(dataset: &'a Dataset, assignment: &'a Assignment) -> Self {
        Self {
            dataset,
            assignment,
        }
    }

    /// Pairs every team with its assigned candidate.
    pub fn pairs(&self) -> impl Iterator<Item = (&'a Team, Option<&'a Candidate>)> + 'a {
        let dataset = self.dataset;
        let assignment = self.assignment;
        dataset.teams().iter().map(move |team| {
            let candidate = assignment
                .get(team.id())
                .map(|id| dataset.candidate(id));
            (team, candidate)
        })
    }

    /// Pairs every team name with its candidate's name.
    pub fn names(&self) -> Vec<(&'a str, Option<&'a str>)> {
        self.pairs()
            .map(|(team, candidate)| (team.name(), candidate.map(Candidate::name)))
            .collect()
    }
}

impl fmt::Display for ResolvedPlacement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (team, candidate) in self.pairs() {
            write!(f, "{} -> ", team.name())?;
            match candidate {
                Some(c) => write!(f, "{}({})", c.name(), c.id())?,
                None => write!(f, "<none>")?,
            }
            if team.is_decided() {
                write!(f, " [decided]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
