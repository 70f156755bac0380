//! Exhaustive search over team/candidate placements.
//!
//! The solver builds one option list per team, walks the cartesian product
//! of those lists with a mixed-radix counter, skips combinations that give
//! one candidate to two teams, scores the rest and keeps the best K.
//!
//! # Example
//!
//! ```
//! use placer_config::PlacerConfig;
//! use placer_core::{Dataset, Declarations, Disappointment};
//! use placer_solver::PlacementSolver;
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
//! let mut solver = PlacementSolver::new(&dataset, PlacerConfig::default()).unwrap();
//! assert_eq!(solver.count_combinations(), 5);
//!
//! let results = solver.solve();
//! assert_eq!(results.best().unwrap().score(), Disappointment::of(99.0));
//! ```

pub mod accumulator;
pub mod enumerator;
pub mod options;
pub mod results;
pub mod scorer;
pub mod snapshot;
pub mod solver;
pub mod stats;

pub use accumulator::{RankedPlacement, TopK};
pub use enumerator::Combinations;
pub use options::{build_option_lists, team_options, OptionLists, TeamOptions};
pub use results::{PlacementResults, ResultsDisplay};
pub use scorer::{team_disappointment, DisappointmentScorer, UNASSIGNED_FACTOR, UNLISTED_FACTOR};
pub use snapshot::Snapshot;
pub use solver::PlacementSolver;
pub use stats::SolverStats;
