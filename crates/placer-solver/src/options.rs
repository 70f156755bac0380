//! Per-team option lists.
//!
//! A decided team has exactly one option, its decided candidate. Every other
//! team may stay unassigned or take any candidate it listed, in the order the
//! requirements were declared.

use std::fmt;

use placer_core::{CandidateId, Dataset, Team, TeamId};
use smallvec::SmallVec;

/// Options of a single team. Most teams list only a handful of candidates.
pub type TeamOptions = SmallVec<[Option<CandidateId>; 8]>;

/// Builds the option list of one team.
///
/// # Examples
///
/// ```
/// use placer_core::{CandidateId, Dataset, Declarations, TeamId};
/// use placer_solver::team_options;
///
/// let dataset = Dataset::load(
///     &Declarations::new()
///         .with_team("tA", 1)
///         .with_candidate("Alice")
///         .with_candidate("Bob")
///         .with_requirement("tA", "Bob", 2)
///         .with_requirement("tA", "Alice", 1),
/// )
/// .unwrap();
///
/// let options = team_options(&dataset, dataset.team(TeamId::new(0)));
/// assert_eq!(
///     options.as_slice(),
///     &[None, Some(CandidateId::new(1)), Some(CandidateId::new(0))]
/// );
/// ```
pub fn team_options(dataset: &Dataset, team: &Team) -> TeamOptions {
    let mut options = TeamOptions::new();
    match dataset.decided_candidate(team.id()) {
        Some(candidate) => options.push(Some(candidate)),
        None => {
            options.push(None);
            options.extend(
                dataset
                    .team_requirements(team.id())
                    .map(|requirement| Some(requirement.candidate())),
            );
        }
    }
    options
}

/// Builds the option lists of every team, in team id order.
pub fn build_option_lists(dataset: &Dataset) -> OptionLists {
    OptionLists::build(dataset)
}

/// Option lists of every team, stored back to back in one arena.
#[derive(Clone, PartialEq, Eq)]
pub struct OptionLists {
    values: Vec<Option<CandidateId>>,
    // offsets[i]..offsets[i + 1] is team i's list
    offsets: Vec<usize>,
}

impl OptionLists {
    /// Builds the option lists of all teams in team id order.
    pub fn build(dataset: &Dataset) -> Self {
        let mut values = Vec::new();
        let mut offsets = Vec::with_capacity(dataset.team_count() + 1);
        offsets.push(0);
        for team in dataset.teams() {
            values.extend(team_options(dataset, team));
            offsets.push(values.len());
        }
        Self { values, offsets }
    }

    /// Number of teams.
    pub fn team_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Options of one team.
    pub fn team(&self, team: TeamId) -> &[Option<CandidateId>] {
        let i = team.index();
        &self.values[self.offsets[i]..self.offsets[i + 1]]
    }

    /// Length of one team's list, the radix of its digit.
    pub fn radix(&self, team: TeamId) -> usize {
        let i = team.index();
        self.offsets[i + 1] - self.offsets[i]
    }

    /// The option at `index` in a team's list.
    #[inline]
    pub fn get(&self, team: usize, index: usize) -> Option<CandidateId> {
        self.values[self.offsets[team] + index]
    }

    /// Returns true if some team has no option at all.
    ///
    /// Cannot happen for lists built from a dataset, since every team has at
    /// least the unassigned or decided option.
    pub fn has_empty_list(&self) -> bool {
        self.offsets.windows(2).any(|w| w[0] == w[1])
    }

    /// Product of all list lengths, or `None` if it overflows `u64`.
    ///
    /// This counts raw tuples, including those the uniqueness rule rejects.
    pub fn search_space_size(&self) -> Option<u64> {
        self.offsets
            .windows(2)
            .try_fold(1u64, |acc, w| acc.checked_mul((w[1] - w[0]) as u64))
    }

    /// Largest candidate index in any list, plus one.
    pub(crate) fn candidate_bound(&self) -> usize {
        self.values
            .iter()
            .flatten()
            .map(|c| c.index() + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Option<CandidateId>]> + '_ {
        self.offsets
            .windows(2)
            .map(move |w| &self.values[w[0]..w[1]])
    }
}

impl From<Vec<Vec<Option<CandidateId>>>> for OptionLists {
    fn from(lists: Vec<Vec<Option<CandidateId>>>) -> Self {
        let mut values = Vec::new();
        let mut offsets = vec![0];
        for list in lists {
            values.extend(list);
            offsets.push(values.len());
        }
        Self { values, offsets }
    }
}

impl fmt::Debug for OptionLists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionLists")
            .field("team_count", &self.team_count())
            .field("search_space_size", &self.search_space_size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placer_test::{four_teams_with_decision, load, no_teams, two_teams};

    fn c(i: usize) -> Option<CandidateId> {
        Some(CandidateId::new(i))
    }

    #[test]
    fn test_undecided_team_lists_none_first() {
        let dataset = load(&two_teams());
        let lists = build_option_lists(&dataset);

        assert_eq!(lists.team(TeamId::new(0)), &[None, c(0), c(1)]);
        assert_eq!(lists.team(TeamId::new(1)), &[None, c(0)]);
        assert_eq!(lists.search_space_size(), Some(6));
    }

    #[test]
    fn test_decided_team_has_single_option() {
        let dataset = load(&four_teams_with_decision());
        let lists = OptionLists::build(&dataset);
        let frank = dataset.find_candidate("Frank").unwrap().id();

        assert_eq!(lists.team(TeamId::new(3)), &[Some(frank)]);
        assert_eq!(lists.radix(TeamId::new(3)), 1);
        // 4 * 3 * 4 * 1
        assert_eq!(lists.search_space_size(), Some(48));
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let dataset = load(&four_teams_with_decision());
        let lists = OptionLists::build(&dataset);
        let names: Vec<Option<&str>> = lists
            .team(TeamId::new(0))
            .iter()
            .map(|o| o.map(|id| dataset.candidate(id).name()))
            .collect();

        assert_eq!(names, vec![None, Some("Alice"), Some("Bob"), Some("Eve")]);
    }

    #[test]
    fn test_no_teams() {
        let lists = OptionLists::build(&load(&no_teams()));
        assert_eq!(lists.team_count(), 0);
        assert_eq!(lists.search_space_size(), Some(1));
        assert!(!lists.has_empty_list());
    }

    #[test]
    fn test_overflowing_space_size() {
        let lists = OptionLists::from(vec![vec![None; 1 << 16]; 4]);
        assert_eq!(lists.search_space_size(), None);
    }

    #[test]
    fn test_empty_list_detected() {
        let lists = OptionLists::from(vec![vec![None, c(0)], vec![]]);
        assert!(lists.has_empty_list());
        assert_eq!(lists.search_space_size(), Some(0));
    }
}
