//! Entry points that hide the solver wiring.

use std::path::Path;

use placer_config::PlacerConfig;
use placer_core::{Dataset, Declarations, Result};
use placer_solver::{PlacementResults, PlacementSolver};
use tracing::info;

/// Counts (if configured) and solves one dataset, returning the best
/// placements.
///
/// An empty result means no valid placement exists.
///
/// # Errors
///
/// Returns [`PlacerError::Config`](placer_core::PlacerError::Config) if
/// `config` does not validate.
pub fn run_placer(dataset: &Dataset, config: PlacerConfig) -> Result<PlacementResults> {
    #[cfg(feature = "console")]
    crate::console::init();

    let count_first = config.count_before_solve;
    let mut solver = PlacementSolver::new(dataset, config)?;
    if count_first {
        solver.count_combinations();
    }
    solver.solve();

    let stats = solver.stats();
    info!(
        event = "run_end",
        evaluated = stats.combinations_evaluated,
        kept = stats.placements_kept,
        improvements = stats.improvements,
        speed = stats.combinations_per_second() as u64,
    );
    Ok(solver.into_results())
}

/// Loads declarations from a YAML or TOML file and solves them.
///
/// Settings come from `placer.toml` in the working directory when present.
pub fn run_placer_from_file(path: impl AsRef<Path>) -> Result<(Dataset, PlacementResults)> {
    let declarations = Declarations::from_file(path)?;
    let dataset = Dataset::load(&declarations)?;

    let config = PlacerConfig::load("placer.toml").unwrap_or_default();
    let results = run_placer(&dataset, config)?;
    Ok((dataset, results))
}
