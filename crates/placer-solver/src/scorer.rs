//! Disappointment scoring.
//!
//! A team's disappointment is its weight (`100 - priority`) times a factor:
//!
//! | team holds                          | factor         |
//! |-------------------------------------|----------------|
//! | nobody                              | 10.0           |
//! | a candidate it listed at priority p | p - 1          |
//! | a candidate it did not list         | 9.0            |
//!
//! When a candidate is listed more than once the first listing counts.

use placer_core::{Assignment, CandidateId, Dataset, Disappointment, Team};

/// Factor for a team left without a candidate.
pub const UNASSIGNED_FACTOR: f64 = 10.0;

/// Factor for a team holding a candidate it never asked for.
pub const UNLISTED_FACTOR: f64 = 9.0;

/// Disappointment of one team holding `assigned`.
pub fn team_disappointment(
    dataset: &Dataset,
    team: &Team,
    assigned: Option<CandidateId>,
) -> Disappointment {
    let factor = match assigned {
        None => UNASSIGNED_FACTOR,
        Some(candidate) => dataset
            .team_requirements(team.id())
            .find(|r| r.candidate() == candidate)
            .map(|r| f64::from(r.priority()) - 1.0)
            .unwrap_or(UNLISTED_FACTOR),
    };
    Disappointment::of(team.weight()) * factor
}

/// Scores whole assignments against one dataset.
///
/// Scoring reads the dataset and the assignment only, so scoring the same
/// assignment twice gives the same value.
#[derive(Debug, Clone, Copy)]
pub struct DisappointmentScorer<'a> {
    dataset: &'a Dataset,
}

impl<'a> DisappointmentScorer<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Disappointment of one team under `assignment`.
    pub fn team_score(&self, team: &Team, assignment: &Assignment) -> Disappointment {
        team_disappointment(self.dataset, team, assignment.get(team.id()))
    }

    /// Sum of all team disappointments. Lower is better.
    pub fn score(&self, assignment: &Assignment) -> Disappointment {
        self.dataset
            .teams()
            .iter()
            .map(|team| self.team_score(team, assignment))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placer_core::{Declarations, TeamId};
    use placer_test::{four_teams_with_decision, load, two_teams};

    fn assignment(slots: &[Option<usize>]) -> Assignment {
        Assignment::from_combination(slots.iter().map(|s| s.map(CandidateId::new)).collect())
    }

    #[test]
    fn test_factors() {
        let dataset = load(&two_teams());
        let ta = dataset.team(TeamId::new(0));
        let alice = CandidateId::new(0);
        let bob = CandidateId::new(1);

        assert_eq!(team_disappointment(&dataset, ta, None).value(), 990.0);
        assert_eq!(team_disappointment(&dataset, ta, Some(alice)).value(), 0.0);
        assert_eq!(team_disappointment(&dataset, ta, Some(bob)).value(), 99.0);

        let tb = dataset.team(TeamId::new(1));
        assert_eq!(team_disappointment(&dataset, tb, Some(bob)).value(), 891.0);
    }

    #[test]
    fn test_combination_scores() {
        let dataset = load(&two_teams());
        let scorer = DisappointmentScorer::new(&dataset);

        assert_eq!(scorer.score(&assignment(&[None, None])).value(), 1980.0);
        assert_eq!(scorer.score(&assignment(&[None, Some(0)])).value(), 990.0);
        assert_eq!(scorer.score(&assignment(&[Some(1), Some(0)])).value(), 99.0);
    }

    #[test]
    fn test_scoring_is_repeatable() {
        let dataset = load(&four_teams_with_decision());
        let scorer = DisappointmentScorer::new(&dataset);
        let a = assignment(&[Some(2), Some(0), Some(1), Some(4)]);

        let first = scorer.score(&a);
        assert_eq!(first, scorer.score(&a));
        // tA Eve p2, tB Alice p1, tC Bob p2, tD Frank p3 (weight 98)
        assert_eq!(first.value(), 99.0 + 0.0 + 99.0 + 196.0);
    }

    #[test]
    fn test_first_duplicate_requirement_wins() {
        let dataset = load(
            &Declarations::new()
                .with_team("tA", 0)
                .with_candidate("Alice")
                .with_requirement("tA", "Alice", 3)
                .with_requirement("tA", "Alice", 1),
        );
        let scorer = DisappointmentScorer::new(&dataset);

        assert_eq!(scorer.score(&assignment(&[Some(0)])).value(), 200.0);
    }

    #[test]
    fn test_low_priority_team_weighs_less() {
        let dataset = load(
            &Declarations::new()
                .with_team("tA", 50)
                .with_team("tB", 120),
        );
        let scorer = DisappointmentScorer::new(&dataset);

        // weight goes negative past priority 100
        assert_eq!(scorer.score(&assignment(&[None, None])).value(), 500.0 - 200.0);
    }
}
