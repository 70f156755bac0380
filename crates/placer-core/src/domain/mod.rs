//! Domain model for candidate placement
//!
//! The model is built once from raw [`Declarations`] and never mutated by
//! the solver:
//! - `Candidate`: somebody who can be placed
//! - `Team`: a slot that wants one candidate, with a priority
//! - `Requirement`: a team's ranked wish for a candidate
//! - `Decision`: a binding pre-assignment of a candidate to a team
//!
//! Cross references are typed ids into the [`Dataset`] arenas.

mod assignment;
mod dataset;
mod entities;
mod ids;
mod listing;
mod loading;


pub use assignment::{Assignment, AssignmentSlot, Combination, ResolvedPlacement};
pub use dataset::Dataset;
pub use entities::{Candidate, Decision, Requirement, Team};
pub use ids::{CandidateId, DecisionId, RequirementId, TeamId};
pub use listing::{DatasetListing, Listed};
pub use loading::{CandidateDecl, DecisionDecl, Declarations, RequirementDecl, TeamDecl};
