//! Solver statistics.

use std::time::{Duration, Instant};

/// Counters for one counting or solving pass.
///
/// # Example
///
/// ```
/// use placer_solver::stats::SolverStats;
///
/// let mut stats = SolverStats::default();
/// stats.start();
/// stats.record_combination(true);
/// stats.record_combination(false);
/// stats.record_new_best();
///
/// assert_eq!(stats.combinations_evaluated, 2);
/// assert_eq!(stats.placements_kept, 1);
/// assert_eq!(stats.improvements, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverStats {
    start_time: Option<Instant>,
    /// Valid combinations counted by the last counting pass.
    pub combinations_counted: Option<u64>,
    /// Valid combinations scored.
    pub combinations_evaluated: u64,
    /// Raw tuples visited, including those rejected for reusing a candidate.
    pub raw_tuples_visited: u64,
    /// Combinations the accumulator kept when offered.
    pub placements_kept: u64,
    /// Times the best score improved.
    pub improvements: u64,
}

impl SolverStats {
    /// Marks the start of solving and clears the solve counters.
    ///
    /// The count from an earlier counting pass is kept.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.combinations_evaluated = 0;
        self.raw_tuples_visited = 0;
        self.placements_kept = 0;
        self.improvements = 0;
    }

    /// Returns the elapsed time since solving started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records one scored combination and whether it was kept.
    pub fn record_combination(&mut self, kept: bool) {
        self.combinations_evaluated += 1;
        if kept {
            self.placements_kept += 1;
        }
    }

    pub fn record_new_best(&mut self) {
        self.improvements += 1;
    }

    /// Returns the combinations-per-second rate.
    pub fn combinations_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.combinations_evaluated as f64 / secs
        } else {
            0.0
        }
    }

    /// Share of raw tuples that were valid combinations.
    pub fn validity_rate(&self) -> f64 {
        if self.raw_tuples_visited == 0 {
            0.0
        } else {
            self.combinations_evaluated as f64 / self.raw_tuples_visited as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_keeps_count() {
        let mut stats = SolverStats {
            combinations_counted: Some(5),
            combinations_evaluated: 3,
            ..Default::default()
        };
        stats.start();

        assert_eq!(stats.combinations_counted, Some(5));
        assert_eq!(stats.combinations_evaluated, 0);
    }

    #[test]
    fn test_rates_without_work() {
        let stats = SolverStats::default();
        assert_eq!(stats.elapsed(), Duration::ZERO);
        assert_eq!(stats.combinations_per_second(), 0.0);
        assert_eq!(stats.validity_rate(), 0.0);
    }

    #[test]
    fn test_validity_rate() {
        let stats = SolverStats {
            combinations_evaluated: 5,
            raw_tuples_visited: 6,
            ..Default::default()
        };
        assert!((stats.validity_rate() - 5.0 / 6.0).abs() < 1e-12);
    }
}
