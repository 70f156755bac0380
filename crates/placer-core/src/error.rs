//! Error types for the placer

use std::fmt;

use thiserror::Error;

/// Kind of raw record that can carry a name reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Requirement,
    Decision,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Requirement => write!(f, "requirement"),
            RecordKind::Decision => write!(f, "decision"),
        }
    }
}

/// Kind of named entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Team,
    Candidate,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Team => write!(f, "team"),
            EntityKind::Candidate => write!(f, "candidate"),
        }
    }
}

/// Which side of a record failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingReference {
    Team,
    Candidate,
    TeamAndCandidate,
}

impl MissingReference {
    pub(crate) fn from_lookup(team_found: bool, candidate_found: bool) -> Option<Self> {
        match (team_found, candidate_found) {
            (true, true) => None,
            (false, true) => Some(MissingReference::Team),
            (true, false) => Some(MissingReference::Candidate),
            (false, false) => Some(MissingReference::TeamAndCandidate),
        }
    }
}

impl fmt::Display for MissingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingReference::Team => write!(f, "team"),
            MissingReference::Candidate => write!(f, "candidate"),
            MissingReference::TeamAndCandidate => write!(f, "team and candidate"),
        }
    }
}

/// Main error type for placer operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacerError {
    /// A requirement or decision names a team or candidate that does not exist.
    #[error("{record} #{index} ({team} -> {candidate}) references unknown {missing}")]
    Reference {
        record: RecordKind,
        index: usize,
        team: String,
        candidate: String,
        missing: MissingReference,
    },

    /// A second decision was set on a team that already has one.
    #[error("team '{team}' is already decided for '{existing}', cannot also decide '{rejected}'")]
    Conflict {
        team: String,
        existing: String,
        rejected: String,
    },

    /// Two teams or two candidates share the same name.
    #[error("duplicate {kind} name '{name}'")]
    DuplicateName { kind: EntityKind, name: String },

    /// A requirement priority outside `1..`.
    #[error("requirement #{index} ({team} -> {candidate}) has priority {priority}, expected 1 or more")]
    InvalidPriority {
        index: usize,
        team: String,
        candidate: String,
        priority: u32,
    },

    /// A restored dataset whose ids or back-references do not line up.
    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    /// A declarations or snapshot document could not be read or written.
    #[error("document error: {0}")]
    Document(String),

    /// Solver settings that fail validation.
    #[error("{0}")]
    Config(String),
}

/// Result type alias for placer operations
pub type Result<T> = std::result::Result<T, PlacerError>;
