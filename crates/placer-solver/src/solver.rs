//! The placement solver.

use std::fmt;

use placer_config::PlacerConfig;
use placer_core::{Assignment, Dataset, Disappointment, PlacerError, Result};
use tracing::{debug, info, trace};

use crate::accumulator::TopK;
use crate::enumerator::Combinations;
use crate::options::OptionLists;
use crate::results::PlacementResults;
use crate::scorer::DisappointmentScorer;
use crate::stats::SolverStats;

/// Exhaustive solver over one immutable dataset.
///
/// Three ways to drive it:
///
/// - [`count_combinations`](Self::count_combinations) walks the space
///   without scoring.
/// - [`solve`](Self::solve) walks it from the start and keeps the best K.
/// - [`start`](Self::start), [`step`](Self::step) and
///   [`finish`](Self::finish) do the same one combination at a time, so a
///   caller can stop between combinations.
pub struct PlacementSolver<'a> {
    dataset: &'a Dataset,
    config: PlacerConfig,
    combinations: Combinations,
    scorer: DisappointmentScorer<'a>,
    best: TopK,
    last: Assignment,
    results: PlacementResults,
    stats: SolverStats,
}

impl<'a> PlacementSolver<'a> {
    /// Builds the option lists for `dataset`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacerError::Config`] if `config` does not validate, e.g. a
    /// `best_option_count` of zero.
    pub fn new(dataset: &'a Dataset, config: PlacerConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|err| PlacerError::Config(err.to_string()))?;
        let options = OptionLists::build(dataset);
        Ok(Self {
            dataset,
            combinations: Combinations::new(options),
            scorer: DisappointmentScorer::new(dataset),
            best: TopK::new(config.best_option_count),
            last: Assignment::unassigned(dataset.team_count()),
            results: PlacementResults::default(),
            stats: SolverStats::default(),
            config,
        })
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn config(&self) -> &PlacerConfig {
        &self.config
    }

    pub fn options(&self) -> &OptionLists {
        self.combinations.options()
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    /// Results of the last finished solve.
    pub fn results(&self) -> &PlacementResults {
        &self.results
    }

    pub fn into_results(self) -> PlacementResults {
        self.results
    }

    /// The last evaluated combination. All unassigned before the first step.
    pub fn last_assignment(&self) -> &Assignment {
        &self.last
    }

    /// Counts valid combinations without scoring them.
    ///
    /// Walks a separate copy of the option lists, so a solve in progress
    /// continues where it stopped.
    pub fn count_combinations(&mut self) -> u64 {
        let mut walk = Combinations::new(self.combinations.options().clone());
        let count = walk.count_remaining();
        let raw = walk.raw_visited();
        self.stats.combinations_counted = Some(count);

        info!(
            event = "count_end",
            combinations = count,
            raw_tuples = raw,
            search_space = self.search_space(),
        );
        count
    }

    // Raw tuple count, saturating at u64::MAX.
    fn search_space(&self) -> u64 {
        self.combinations
            .options()
            .search_space_size()
            .unwrap_or(u64::MAX)
    }

    /// Solves from the start and returns the best placements.
    pub fn solve(&mut self) -> &PlacementResults {
        self.start();
        while self.step() {}
        self.finish()
    }

    /// Rewinds the walk and clears kept placements.
    pub fn start(&mut self) {
        self.combinations.reset();
        self.best.clear();
        self.last = Assignment::unassigned(self.dataset.team_count());
        self.results = PlacementResults::default();
        self.stats.start();

        info!(
            event = "solve_start",
            team_count = self.dataset.team_count(),
            candidate_count = self.dataset.candidate_count(),
            search_space = self.search_space(),
            best_option_count = self.best.capacity(),
        );
    }

    /// Evaluates exactly one combination. Returns false once the walk is
    /// exhausted.
    pub fn step(&mut self) -> bool {
        let Some(combination) = self.combinations.advance() else {
            return false;
        };
        self.last.assign_all(combination);

        let score = self.scorer.score(&self.last);
        let previous_best = self.best.best();
        let kept = self.best.offer(score, self.last.as_slice());
        self.stats.record_combination(kept);

        trace!(
            event = "combination",
            sequence = self.best.offered() - 1,
            score = %score,
            kept,
        );

        if improves(previous_best, score) {
            self.stats.record_new_best();
            debug!(
                event = "new_best",
                score = %score,
                evaluated = self.stats.combinations_evaluated,
            );
        }

        let interval = self.config.progress_interval;
        if interval > 0 && self.stats.combinations_evaluated % interval == 0 {
            debug!(
                event = "progress",
                evaluated = self.stats.combinations_evaluated,
                total = self.stats.combinations_counted.unwrap_or(0),
                best = %self.best.best().unwrap_or(Disappointment::ZERO),
                speed = self.stats.combinations_per_second() as u64,
            );
        }
        true
    }

    /// Collects the kept placements into results.
    pub fn finish(&mut self) -> &PlacementResults {
        self.stats.raw_tuples_visited = self.combinations.raw_visited();
        self.results = PlacementResults::new(self.best.sorted());

        match self.results.best_score() {
            Some(best) => info!(
                event = "solve_end",
                best = %best,
                kept = self.results.len(),
                evaluated = self.stats.combinations_evaluated,
                raw_tuples = self.stats.raw_tuples_visited,
                duration_ms = self.stats.elapsed().as_millis() as u64,
            ),
            None => info!(
                event = "no_solution",
                raw_tuples = self.stats.raw_tuples_visited,
                duration_ms = self.stats.elapsed().as_millis() as u64,
            ),
        }
        &self.results
    }
}

fn improves(previous: Option<Disappointment>, score: Disappointment) -> bool {
    previous.map_or(true, |best| score < best)
}

impl fmt::Debug for PlacementSolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacementSolver")
            .field("team_count", &self.dataset.team_count())
            .field("combinations", &self.combinations)
            .field("best", &self.best)
            .finish()
    }
}

#[cfg(test)]
mod tests;
