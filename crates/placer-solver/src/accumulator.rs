//! Bounded best-K accumulator.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};
use std::fmt;

use placer_core::{Assignment, CandidateId, Dataset, Disappointment, ResolvedPlacement};
use serde::{Deserialize, Serialize};

/// A kept combination with its score.
///
/// `sequence` is the combination's position in enumeration order. Entries
/// order by `(score, sequence)`, so equal scores keep the earlier find first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPlacement {
    score: Disappointment,
    sequence: u64,
    assignment: Assignment,
}

impl RankedPlacement {
    pub fn new(score: Disappointment, sequence: u64, assignment: Assignment) -> Self {
        Self {
            score,
            sequence,
            assignment,
        }
    }

    pub fn score(&self) -> Disappointment {
        self.score
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Views this placement through the dataset it was found in.
    pub fn resolve<'a>(&'a self, dataset: &'a Dataset) -> ResolvedPlacement<'a> {
        dataset.resolve(&self.assignment)
    }
}

impl Ord for RankedPlacement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for RankedPlacement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RankedPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.score, self.sequence)
    }
}

/// Keeps the K lowest-scoring combinations seen so far.
///
/// A max-heap on `(score, sequence)` holds at most `capacity` entries. A new
/// combination is taken while the heap is not full, or when it scores
/// strictly below the current worst; the worst entry is then evicted.
/// Ties with the worst entry are dropped, ties elsewhere are all kept.
///
/// # Examples
///
/// ```
/// use placer_core::Disappointment;
/// use placer_solver::TopK;
///
/// let mut top = TopK::new(2);
/// assert!(top.offer(Disappointment::of(30.0), &[]));
/// assert!(top.offer(Disappointment::of(10.0), &[]));
/// assert!(!top.offer(Disappointment::of(30.0), &[]));
/// assert!(top.offer(Disappointment::of(20.0), &[]));
///
/// let scores: Vec<f64> = top.sorted().iter().map(|p| p.score().value()).collect();
/// assert_eq!(scores, vec![10.0, 20.0]);
/// ```
#[derive(Clone)]
pub struct TopK {
    capacity: usize,
    heap: BinaryHeap<RankedPlacement>,
    // lowest score kept so far; never evicted, since only the worst is popped
    best: Option<Disappointment>,
    offered: u64,
}

impl TopK {
    /// Creates an empty accumulator.
    ///
    /// A zero capacity keeps nothing. The solver rejects such a setting
    /// before it gets here.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::new(),
            best: None,
            offered: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Combinations offered since the last clear.
    pub fn offered(&self) -> u64 {
        self.offered
    }

    /// Score of the worst kept entry.
    pub fn worst(&self) -> Option<Disappointment> {
        self.heap.peek().map(RankedPlacement::score)
    }

    /// Score of the best kept entry.
    pub fn best(&self) -> Option<Disappointment> {
        self.best
    }

    /// Returns true if a combination scoring `score` would be kept.
    pub fn accepts(&self, score: Disappointment) -> bool {
        self.heap.len() < self.capacity || self.worst().is_some_and(|worst| score < worst)
    }

    /// Offers one combination. Returns true if it was kept.
    ///
    /// Every offer consumes a sequence number, kept or not.
    pub fn offer(&mut self, score: Disappointment, combination: &[Option<CandidateId>]) -> bool {
        let sequence = self.offered;
        self.offered += 1;
        if !self.accepts(score) {
            return false;
        }
        let assignment = Assignment::from_combination(combination.to_vec());
        self.heap
            .push(RankedPlacement::new(score, sequence, assignment));
        if self.heap.len() > self.capacity {
            self.heap.pop();
        }
        if self.best.map_or(true, |best| score < best) {
            self.best = Some(score);
        }
        true
    }

    /// Kept entries, best first.
    pub fn sorted(&self) -> Vec<RankedPlacement> {
        self.heap.clone().into_sorted_vec()
    }

    pub fn into_sorted(self) -> Vec<RankedPlacement> {
        self.heap.into_sorted_vec()
    }

    /// One entry per distinct score, the earliest found.
    pub fn by_score(&self) -> BTreeMap<Disappointment, Assignment> {
        by_score(self.heap.iter())
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.best = None;
        self.offered = 0;
    }
}

pub(crate) fn by_score<'a>(
    placements: impl Iterator<Item = &'a RankedPlacement>,
) -> BTreeMap<Disappointment, Assignment> {
    let mut map: BTreeMap<Disappointment, &RankedPlacement> = BTreeMap::new();
    for placement in placements {
        map.entry(placement.score)
            .and_modify(|kept| {
                if placement.sequence < kept.sequence {
                    *kept = placement;
                }
            })
            .or_insert(placement);
    }
    map.into_iter()
        .map(|(score, placement)| (score, placement.assignment.clone()))
        .collect()
}

impl fmt::Debug for TopK {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopK")
            .field("capacity", &self.capacity)
            .field("len", &self.heap.len())
            .field("best", &self.best)
            .field("worst", &self.worst())
            .field("offered", &self.offered)
            .finish()
    }
}
