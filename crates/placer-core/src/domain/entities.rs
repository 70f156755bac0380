//! Candidates, teams, requirements and decisions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::{CandidateId, DecisionId, RequirementId, TeamId};

fn write_ids<I: fmt::Display>(f: &mut fmt::Formatter<'_>, ids: &[I]) -> fmt::Result {
    write!(f, "[")?;
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", id)?;
    }
    write!(f, "]")
}

/// Somebody who can be placed into at most one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    id: CandidateId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alias: Option<String>,
    #[serde(default)]
    requirements: Vec<RequirementId>,
    #[serde(default)]
    decisions: Vec<DecisionId>,
}

impl Candidate {
    pub(crate) fn new(id: CandidateId, name: String, alias: Option<String>) -> Self {
        Self {
            id,
            name,
            alias,
            requirements: Vec::new(),
            decisions: Vec::new(),
        }
    }

    pub fn id(&self) -> CandidateId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Requirements naming this candidate, in link order.
    pub fn requirements(&self) -> &[RequirementId] {
        &self.requirements
    }

    /// Decisions placing this candidate. More than one makes the dataset unsolvable.
    pub fn decisions(&self) -> &[DecisionId] {
        &self.decisions
    }

    /// Returns true if `text` is this candidate's name or alias.
    pub fn is_called(&self, text: &str) -> bool {
        self.name == text || self.alias.as_deref() == Some(text)
    }

    pub(crate) fn push_requirement(&mut self, id: RequirementId) {
        self.requirements.push(id);
    }

    pub(crate) fn push_decision(&mut self, id: DecisionId) {
        self.decisions.push(id);
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C {}, name:{}, alias:{}, requirements:",
            self.id,
            self.name,
            self.alias.as_deref().unwrap_or("?")
        )?;
        write_ids(f, &self.requirements)?;
        write!(f, ", decisions:")?;
        write_ids(f, &self.decisions)
    }
}

/// A slot that wants one candidate.
///
/// `priority` follows the organisational convention that lower numbers
/// matter more; the team's weight in the disappointment sum is
/// `100 - priority`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    priority: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alias: Option<String>,
    #[serde(default)]
    requirements: Vec<RequirementId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    decision: Option<DecisionId>,
}

impl Team {
    pub(crate) fn new(id: TeamId, name: String, priority: u32, alias: Option<String>) -> Self {
        Self {
            id,
            name,
            priority,
            alias,
            requirements: Vec::new(),
            decision: None,
        }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Weight of this team's disappointment.
    pub fn weight(&self) -> f64 {
        100.0 - f64::from(self.priority)
    }

    /// Requirements in declaration (link) order, which is not necessarily
    /// preference order.
    pub fn requirements(&self) -> &[RequirementId] {
        &self.requirements
    }

    pub fn decision(&self) -> Option<DecisionId> {
        self.decision
    }

    /// Returns true if a decision removes this team from branching.
    pub fn is_decided(&self) -> bool {
        self.decision.is_some()
    }

    /// Returns true if `text` is this team's name or alias.
    pub fn is_called(&self, text: &str) -> bool {
        self.name == text || self.alias.as_deref() == Some(text)
    }

    pub(crate) fn push_requirement(&mut self, id: RequirementId) {
        self.requirements.push(id);
    }

    pub(crate) fn set_decision(&mut self, id: DecisionId) {
        self.decision = Some(id);
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T {}, name:{}, priority:{}", self.id, self.name, self.priority)?;
        if let Some(alias) = &self.alias {
            write!(f, ", alias:{}", alias)?;
        }
        write!(f, ", requirements:")?;
        write_ids(f, &self.requirements)?;
        if let Some(decision) = self.decision {
            write!(f, ", decision:{}", decision)?;
        }
        Ok(())
    }
}

/// A team's ranked wish for a candidate. Priority 1 is the top choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    id: RequirementId,
    team: TeamId,
    candidate: CandidateId,
    priority: u32,
}

impl Requirement {
    pub(crate) fn new(
        id: RequirementId,
        team: TeamId,
        candidate: CandidateId,
        priority: u32,
    ) -> Self {
        Self {
            id,
            team,
            candidate,
            priority,
        }
    }

    pub fn id(&self) -> RequirementId {
        self.id
    }

    pub fn team(&self) -> TeamId {
        self.team
    }

    pub fn candidate(&self) -> CandidateId {
        self.candidate
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R {}, team:{}, candidate:{}, priority:{}",
            self.id, self.team, self.candidate, self.priority
        )
    }
}

/// A binding pre-assignment of a candidate to a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    id: DecisionId,
    team: TeamId,
    candidate: CandidateId,
}

impl Decision {
    pub(crate) fn new(id: DecisionId, team: TeamId, candidate: CandidateId) -> Self {
        Self {
            id,
            team,
            candidate,
        }
    }

    pub fn id(&self) -> DecisionId {
        self.id
    }

    pub fn team(&self) -> TeamId {
        self.team
    }

    pub fn candidate(&self) -> CandidateId {
        self.candidate
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "D {}, team:{}, candidate:{}",
            self.id, self.team, self.candidate
        )
    }
}
