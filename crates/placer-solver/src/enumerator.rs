//! Mixed-radix walk over the option lists.
//!
//! The counter holds one digit per team; digit `i` indexes team `i`'s option
//! list and has that list's length as its radix. The rightmost digit turns
//! fastest. The all-zero tuple comes first and the walk ends when the
//! counter wraps back to all zeros.

use std::fmt;

use placer_core::{CandidateId, Combination};

use crate::options::OptionLists;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    Fresh,
    Running,
    Done,
}

/// Restartable enumerator of valid combinations.
///
/// Only combinations in which no candidate appears twice are yielded.
/// Unassigned slots never collide. If some team has an empty option list
/// nothing is yielded; with zero teams exactly one empty combination is.
///
/// # Examples
///
/// ```
/// use placer_core::CandidateId;
/// use placer_solver::{Combinations, OptionLists};
///
/// let alice = Some(CandidateId::new(0));
/// let bob = Some(CandidateId::new(1));
/// let lists = OptionLists::from(vec![vec![None, alice, bob], vec![None, alice]]);
///
/// let all: Vec<_> = Combinations::new(lists).collect();
/// assert_eq!(all.len(), 5);
/// assert_eq!(all[0], vec![None, None]);
/// assert_eq!(all[4], vec![bob, alice]);
/// ```
pub struct Combinations {
    options: OptionLists,
    digits: Vec<usize>,
    current: Combination,
    seen: Vec<bool>,
    walk: Walk,
    raw_visited: u64,
}

impl Combinations {
    pub fn new(options: OptionLists) -> Self {
        let team_count = options.team_count();
        let seen = vec![false; options.candidate_bound()];
        Self {
            options,
            digits: vec![0; team_count],
            current: vec![None; team_count],
            seen,
            walk: Walk::Fresh,
            raw_visited: 0,
        }
    }

    /// Rewinds to the all-zero tuple.
    pub fn reset(&mut self) {
        self.digits.iter_mut().for_each(|d| *d = 0);
        self.walk = Walk::Fresh;
        self.raw_visited = 0;
    }

    pub fn options(&self) -> &OptionLists {
        &self.options
    }

    /// Raw tuples visited since the last reset, valid or not.
    pub fn raw_visited(&self) -> u64 {
        self.raw_visited
    }

    /// Returns true once the counter has wrapped.
    pub fn is_exhausted(&self) -> bool {
        self.walk == Walk::Done
    }

    /// Moves to the next valid combination and returns it.
    ///
    /// The returned slice is overwritten by the next call.
    pub fn advance(&mut self) -> Option<&[Option<CandidateId>]> {
        while self.turn() {
            self.raw_visited += 1;
            for (team, &digit) in self.digits.iter().enumerate() {
                self.current[team] = self.options.get(team, digit);
            }
            if self.current_is_unique() {
                return Some(self.current.as_slice());
            }
        }
        None
    }

    /// Walks the rest of the space without scoring and counts the valid
    /// combinations.
    pub fn count_remaining(&mut self) -> u64 {
        let mut count = 0;
        while self.advance().is_some() {
            count += 1;
        }
        count
    }

    // Steps the counter to the next raw tuple. Returns false once exhausted.
    fn turn(&mut self) -> bool {
        match self.walk {
            Walk::Done => false,
            Walk::Fresh => {
                if self.options.has_empty_list() {
                    self.walk = Walk::Done;
                    return false;
                }
                self.walk = Walk::Running;
                true
            }
            Walk::Running => {
                for team in (0..self.digits.len()).rev() {
                    let radix = self.options.radix(team.into());
                    self.digits[team] += 1;
                    if self.digits[team] < radix {
                        return true;
                    }
                    self.digits[team] = 0;
                }
                // carried out of the leftmost digit
                self.walk = Walk::Done;
                false
            }
        }
    }

    fn current_is_unique(&mut self) -> bool {
        let mut unique = true;
        for candidate in self.current.iter().flatten() {
            let seen = &mut self.seen[candidate.index()];
            if *seen {
                unique = false;
                break;
            }
            *seen = true;
        }
        for candidate in self.current.iter().flatten() {
            self.seen[candidate.index()] = false;
        }
        unique
    }
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[Option<CandidateId>]>::to_vec)
    }
}

impl fmt::Debug for Combinations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combinations")
            .field("options", &self.options)
            .field("digits", &self.digits)
            .field("raw_visited", &self.raw_visited)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placer_test::{conflicting_decisions, four_teams_with_decision, load, no_teams, two_teams};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn c(i: usize) -> Option<CandidateId> {
        Some(CandidateId::new(i))
    }

    fn combinations(declarations: &placer_core::Declarations) -> Combinations {
        Combinations::new(OptionLists::build(&load(declarations)))
    }

    #[test]
    fn test_order_is_rightmost_fastest() {
        let all: Vec<Combination> = combinations(&two_teams()).collect();
        assert_eq!(
            all,
            vec![
                vec![None, None],
                vec![None, c(0)],
                vec![c(0), None],
                vec![c(1), None],
                vec![c(1), c(0)],
            ]
        );
    }

    #[test]
    fn test_raw_tuples_counted() {
        let mut walk = combinations(&two_teams());
        assert_eq!(walk.count_remaining(), 5);
        assert_eq!(walk.raw_visited(), 6);
        assert!(walk.is_exhausted());
        assert_eq!(walk.next(), None);
    }

    #[test]
    fn test_reset_restarts_identically() {
        let mut walk = combinations(&four_teams_with_decision());
        let first: Vec<Combination> = walk.by_ref().collect();
        walk.reset();
        let second: Vec<Combination> = walk.collect();

        assert_eq!(first.len(), 25);
        assert_eq!(first, second);
    }

    #[test]
    fn test_decided_slot_is_fixed() {
        let dataset = load(&four_teams_with_decision());
        let frank = Some(dataset.find_candidate("Frank").unwrap().id());

        for combination in Combinations::new(OptionLists::build(&dataset)) {
            assert_eq!(combination[3], frank);
            assert_ne!(combination[2], frank);
        }
    }

    #[test]
    fn test_zero_teams_yield_one_empty_combination() {
        let all: Vec<Combination> = combinations(&no_teams()).collect();
        assert_eq!(all, vec![Vec::<Option<CandidateId>>::new()]);
    }

    #[test]
    fn test_empty_list_yields_nothing() {
        let lists = OptionLists::from(vec![vec![None, c(0)], vec![]]);
        let mut walk = Combinations::new(lists);
        assert_eq!(walk.next(), None);
        assert_eq!(walk.raw_visited(), 0);
    }

    #[test]
    fn test_double_decision_yields_nothing() {
        assert_eq!(combinations(&conflicting_decisions()).count(), 0);
    }

    #[test]
    fn test_all_zero_tuple_rejected_when_colliding() {
        // Two single-option lists holding the same candidate.
        let lists = OptionLists::from(vec![vec![c(0)], vec![c(0)]]);
        let mut walk = Combinations::new(lists);
        assert_eq!(walk.next(), None);
        assert_eq!(walk.raw_visited(), 1);
    }

    fn option_lists() -> impl Strategy<Value = Vec<Vec<Option<CandidateId>>>> {
        let option = prop_oneof![
            1 => Just(None),
            3 => (0usize..5).prop_map(|i| Some(CandidateId::new(i))),
        ];
        prop::collection::vec(prop::collection::vec(option, 1..4), 0..5)
    }

    proptest! {
        #[test]
        fn prop_yields_unique_and_distinct(lists in option_lists()) {
            let raw = OptionLists::from(lists.clone()).search_space_size().unwrap();
            let mut walk = Combinations::new(OptionLists::from(lists.clone()));
            let mut yielded = Vec::new();
            while let Some(combination) = walk.advance() {
                yielded.push(combination.to_vec());
            }
            prop_assert_eq!(walk.raw_visited(), raw);

            for combination in &yielded {
                let taken: Vec<_> = combination.iter().flatten().collect();
                let distinct: HashSet<_> = taken.iter().collect();
                prop_assert_eq!(taken.len(), distinct.len());
                for (team, option) in combination.iter().enumerate() {
                    prop_assert!(lists[team].contains(option));
                }
            }
        }
    }
}
