//! Placer Core - Domain model and score types for candidate placement
//!
//! This crate provides the fundamental abstractions for the placer:
//! - Typed declarations and the load/link step producing a [`Dataset`]
//! - Candidates, teams, requirements and decisions addressed by typed ids
//! - Assignment snapshots mapping each team to a candidate (or nobody)
//! - The [`Disappointment`] score, where lower is better

pub mod document;
pub mod domain;
pub mod error;
pub mod score;

pub use document::DocumentFormat;
pub use domain::{
    Assignment, AssignmentSlot, Candidate, CandidateDecl, CandidateId, Combination, Dataset,
    DatasetListing, Decision, DecisionDecl, DecisionId, Declarations, Listed, Requirement,
    RequirementDecl, RequirementId, ResolvedPlacement, Team, TeamDecl, TeamId,
};
pub use error::{EntityKind, MissingReference, PlacerError, RecordKind, Result};
pub use score::{Disappointment, ScoreParseError};
