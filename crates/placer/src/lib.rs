//! Placer - exhaustive team placement with ranked preferences.
//!
//! Teams list the candidates they want, ranked by priority. Placer walks
//! every way of giving each team at most one candidate, with no candidate on
//! two teams, and ranks the placements by weighted disappointment.
//!
//! # Example
//!
//! ```rust
//! use placer::prelude::*;
//!
//! let declarations = Declarations::new()
//!     .with_team("tA", 1)
//!     .with_team("tB", 1)
//!     .with_candidate("Alice")
//!     .with_candidate("Bob")
//!     .with_requirement("tA", "Alice", 1)
//!     .with_requirement("tA", "Bob", 2)
//!     .with_requirement("tB", "Alice", 1);
//! let dataset = Dataset::load(&declarations).unwrap();
//!
//! let results = run_placer(&dataset, PlacerConfig::default()).unwrap();
//! let best = results.best().unwrap();
//! assert_eq!(best.score(), Disappointment::of(99.0));
//! assert_eq!(
//!     best.resolve(&dataset).names(),
//!     vec![("tA", Some("Bob")), ("tB", Some("Alice"))]
//! );
//! ```

// Domain model
pub use placer_core::{
    Assignment, Candidate, CandidateDecl, CandidateId, Combination, Dataset, DatasetListing,
    Decision, DecisionDecl, DecisionId, Declarations, DocumentFormat, Listed, Requirement,
    RequirementDecl, RequirementId, ResolvedPlacement, Team, TeamDecl, TeamId,
};

// Scores and errors
pub use placer_core::{Disappointment, PlacerError, Result};

pub use placer_config::{ConfigError, PlacerConfig};

pub use placer_solver::{
    PlacementResults, PlacementSolver, RankedPlacement, Snapshot, SolverStats,
};

#[cfg(feature = "console")]
pub mod console;

mod run;
pub use run::{run_placer, run_placer_from_file};

pub mod prelude {
    pub use super::{
        run_placer, Dataset, Declarations, Disappointment, PlacementResults, PlacerConfig,
        RankedPlacement,
    };
}
