//! Raw declarations and the load/link step.
//!
//! Declarations refer to each other by name (or alias). Loading assigns
//! sequential ids per kind, then links decisions and requirements to
//! their team and candidate exactly once.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::dataset::Dataset;
use super::entities::{Candidate, Decision, Requirement, Team};
use super::ids::{CandidateId, DecisionId, RequirementId, TeamId};
use crate::document::DocumentFormat;
use crate::error::{EntityKind, MissingReference, PlacerError, RecordKind, Result};

/// A team record: name, priority, optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDecl {
    pub name: String,
    pub priority: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl TeamDecl {
    pub fn new(name: impl Into<String>, priority: u32) -> Self {
        Self {
            name: name.into(),
            priority,
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// A candidate record: name, optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl CandidateDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// A requirement record: team name, candidate name, priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementDecl {
    pub team: String,
    pub candidate: String,
    pub priority: u32,
}

/// A decision record: team name, candidate name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionDecl {
    pub team: String,
    pub candidate: String,
}

/// Everything needed to build a [`Dataset`].
///
/// # Examples
///
/// ```
/// use placer_core::{Dataset, Declarations};
///
/// let declarations = Declarations::new()
///     .with_team("tA", 1)
///     .with_team("tB", 1)
///     .with_candidate("Alice")
///     .with_candidate("Bob")
///     .with_requirement("tA", "Alice", 1)
///     .with_requirement("tA", "Bob", 2)
///     .with_requirement("tB", "Alice", 1);
///
/// let dataset = Dataset::load(&declarations).unwrap();
/// assert_eq!(dataset.team_count(), 2);
/// assert_eq!(dataset.requirements().len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declarations {
    #[serde(default)]
    pub teams: Vec<TeamDecl>,
    #[serde(default)]
    pub candidates: Vec<CandidateDecl>,
    #[serde(default)]
    pub requirements: Vec<RequirementDecl>,
    #[serde(default)]
    pub decisions: Vec<DecisionDecl>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_team(self, name: impl Into<String>, priority: u32) -> Self {
        self.with_team_decl(TeamDecl::new(name, priority))
    }

    pub fn with_team_decl(mut self, team: TeamDecl) -> Self {
        self.teams.push(team);
        self
    }

    pub fn with_candidate(self, name: impl Into<String>) -> Self {
        self.with_candidate_decl(CandidateDecl::new(name))
    }

    pub fn with_candidate_decl(mut self, candidate: CandidateDecl) -> Self {
        self.candidates.push(candidate);
        self
    }

    pub fn with_requirement(
        mut self,
        team: impl Into<String>,
        candidate: impl Into<String>,
        priority: u32,
    ) -> Self {
        self.requirements.push(RequirementDecl {
            team: team.into(),
            candidate: candidate.into(),
            priority,
        });
        self
    }

    pub fn with_decision(mut self, team: impl Into<String>, candidate: impl Into<String>) -> Self {
        self.decisions.push(DecisionDecl {
            team: team.into(),
            candidate: candidate.into(),
        });
        self
    }

    /// Parses declarations from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        DocumentFormat::Yaml.parse(s)
    }

    /// Parses declarations from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        DocumentFormat::Toml.parse(s)
    }

    /// Reads declarations from a `.toml` or YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        DocumentFormat::read_file(path)
    }
}

pub(super) fn check_unique<'a>(
    kind: EntityKind,
    names: impl Iterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(PlacerError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

impl Dataset {
    /// Builds and links a dataset from raw declarations.
    ///
    /// Decisions are linked before requirements, each in declaration order.
    ///
    /// # Errors
    ///
    /// - [`PlacerError::Reference`] when a record names an unknown team or candidate
    /// - [`PlacerError::Conflict`] when a team receives a second decision
    /// - [`PlacerError::DuplicateName`] when two teams or two candidates share a name
    /// - [`PlacerError::InvalidPriority`] when a requirement priority is 0
    pub fn load(declarations: &Declarations) -> Result<Dataset> {
        check_unique(
            EntityKind::Team,
            declarations.teams.iter().map(|t| t.name.as_str()),
        )?;
        check_unique(
            EntityKind::Candidate,
            declarations.candidates.iter().map(|c| c.name.as_str()),
        )?;

        let mut dataset = Dataset {
            teams: declarations
                .teams
                .iter()
                .enumerate()
                .map(|(i, t)| Team::new(TeamId::new(i), t.name.clone(), t.priority, t.alias.clone()))
                .collect(),
            candidates: declarations
                .candidates
                .iter()
                .enumerate()
                .map(|(i, c)| Candidate::new(CandidateId::new(i), c.name.clone(), c.alias.clone()))
                .collect(),
            requirements: Vec::with_capacity(declarations.requirements.len()),
            decisions: Vec::with_capacity(declarations.decisions.len()),
        };

        for (index, decl) in declarations.decisions.iter().enumerate() {
            let (team, candidate) =
                dataset.lookup(RecordKind::Decision, index, &decl.team, &decl.candidate)?;

            if let Some(existing) = dataset.decided_candidate(team) {
                return Err(PlacerError::Conflict {
                    team: dataset.team(team).name().to_string(),
                    existing: dataset.candidate(existing).name().to_string(),
                    rejected: dataset.candidate(candidate).name().to_string(),
                });
            }

            let id = DecisionId::new(dataset.decisions.len());
            dataset.decisions.push(Decision::new(id, team, candidate));
            dataset.teams[team.index()].set_decision(id);
            dataset.candidates[candidate.index()].push_decision(id);
        }

        for (index, decl) in declarations.requirements.iter().enumerate() {
            if decl.priority == 0 {
                return Err(PlacerError::InvalidPriority {
                    index,
                    team: decl.team.clone(),
                    candidate: decl.candidate.clone(),
                    priority: decl.priority,
                });
            }

            let (team, candidate) =
                dataset.lookup(RecordKind::Requirement, index, &decl.team, &decl.candidate)?;

            let id = RequirementId::new(dataset.requirements.len());
            dataset
                .requirements
                .push(Requirement::new(id, team, candidate, decl.priority));
            dataset.teams[team.index()].push_requirement(id);
            dataset.candidates[candidate.index()].push_requirement(id);
        }

        Ok(dataset)
    }

    fn lookup(
        &self,
        record: RecordKind,
        index: usize,
        team: &str,
        candidate: &str,
    ) -> Result<(TeamId, CandidateId)> {
        let team_id = self.find_team(team).map(Team::id);
        let candidate_id = self.find_candidate(candidate).map(Candidate::id);

        match (team_id, candidate_id) {
            (Some(t), Some(c)) => Ok((t, c)),
            (t, c) => Err(PlacerError::Reference {
                record,
                index,
                team: team.to_string(),
                candidate: candidate.to_string(),
                missing: MissingReference::from_lookup(t.is_some(), c.is_some())
                    .unwrap_or(MissingReference::TeamAndCandidate),
            }),
        }
    }
}
