//! Solver tests against hand-checked problems.

use std::collections::HashSet;

use super::*;
use placer_core::{CandidateId, Combination, Declarations, TeamId};
use placer_test::{conflicting_decisions, four_teams_with_decision, load, no_teams, two_teams};

fn config(k: usize) -> PlacerConfig {
    PlacerConfig::default().with_best_option_count(k)
}

fn names(dataset: &Dataset, assignment: &Assignment) -> Vec<Option<String>> {
    dataset
        .resolve(assignment)
        .names()
        .into_iter()
        .map(|(_, candidate)| candidate.map(str::to_string))
        .collect()
}

fn some(name: &str) -> Option<String> {
    Some(name.to_string())
}

#[test]
fn test_count_two_teams() {
    let dataset = load(&two_teams());
    let mut solver = PlacementSolver::new(&dataset, config(1)).unwrap();

    assert_eq!(solver.count_combinations(), 5);
    assert_eq!(solver.stats().combinations_counted, Some(5));
    assert!(solver.results().is_empty());
}

#[test]
fn test_solve_two_teams_single_best() {
    let dataset = load(&two_teams());
    let mut solver = PlacementSolver::new(&dataset, config(1)).unwrap();
    let results = solver.solve();

    assert_eq!(results.len(), 1);
    let best = results.best().unwrap();
    assert_eq!(best.score(), Disappointment::of(99.0));
    assert_eq!(names(&dataset, best.assignment()), vec![some("Bob"), some("Alice")]);

    let map = results.by_score();
    assert_eq!(map.len(), 1);
    assert_eq!(
        map[&Disappointment::of(99.0)].as_slice(),
        &[Some(CandidateId::new(1)), Some(CandidateId::new(0))]
    );
}

#[test]
fn test_k_at_least_count_keeps_everything() {
    let dataset = load(&two_teams());
    let mut solver = PlacementSolver::new(&dataset, config(10)).unwrap();
    let count = solver.count_combinations();
    let results = solver.solve();

    assert_eq!(results.len() as u64, count);
    let scores: Vec<f64> = results.iter().map(|p| p.score().value()).collect();
    assert_eq!(scores, vec![99.0, 990.0, 990.0, 1089.0, 1980.0]);
}

#[test]
fn test_solve_is_repeatable() {
    let dataset = load(&four_teams_with_decision());
    let mut solver = PlacementSolver::new(&dataset, config(3)).unwrap();

    let first = solver.solve().clone();
    let second = solver.solve().clone();
    assert_eq!(first, second);
}

#[test]
fn test_four_teams_with_decision() {
    let dataset = load(&four_teams_with_decision());
    let mut solver = PlacementSolver::new(&dataset, config(3)).unwrap();

    assert_eq!(solver.count_combinations(), 25);
    let results = solver.solve();

    let scores: Vec<f64> = results.iter().map(|p| p.score().value()).collect();
    assert_eq!(scores, vec![394.0, 493.0, 493.0]);

    let best = results.best().unwrap();
    assert_eq!(
        names(&dataset, best.assignment()),
        vec![some("Eve"), some("Alice"), some("Bob"), some("Frank")]
    );
    // equal scores in enumeration order
    assert_eq!(
        names(&dataset, results.placements()[1].assignment()),
        vec![some("Alice"), some("Bob"), some("Ann"), some("Frank")]
    );
    assert_eq!(
        names(&dataset, results.placements()[2].assignment()),
        vec![some("Eve"), some("Alice"), some("Ann"), some("Frank")]
    );
}

#[test]
fn test_decided_team_always_gets_decision() {
    let dataset = load(&four_teams_with_decision());
    let td = dataset.find_team("tD").unwrap().id();
    let frank = dataset.find_candidate("Frank").unwrap().id();
    let mut solver = PlacementSolver::new(&dataset, config(100)).unwrap();

    for placement in solver.solve() {
        assert_eq!(placement.assignment().get(td), Some(frank));
    }
}

#[test]
fn test_step_evaluates_one_combination() {
    let dataset = load(&two_teams());
    let mut solver = PlacementSolver::new(&dataset, config(2)).unwrap();
    solver.start();

    assert!(solver.step());
    assert_eq!(solver.last_assignment().as_slice(), &[None, None]);
    assert!(solver.step());
    assert_eq!(
        solver.last_assignment().get(TeamId::new(1)),
        Some(CandidateId::new(0))
    );
    assert_eq!(solver.stats().combinations_evaluated, 2);

    let results = solver.finish();
    let scores: Vec<f64> = results.iter().map(|p| p.score().value()).collect();
    assert_eq!(scores, vec![990.0, 1980.0]);
}

#[test]
fn test_step_after_exhaustion() {
    let dataset = load(&two_teams());
    let mut solver = PlacementSolver::new(&dataset, config(1)).unwrap();
    solver.start();

    let mut steps = 0;
    while solver.step() {
        steps += 1;
    }
    assert_eq!(steps, 5);
    assert!(!solver.step());

    let last: Combination = solver.last_assignment().clone().into_combination();
    assert_eq!(last, vec![Some(CandidateId::new(1)), Some(CandidateId::new(0))]);
    assert_eq!(solver.stats().raw_tuples_visited, 0);
    solver.finish();
    assert_eq!(solver.stats().raw_tuples_visited, 6);
}

#[test]
fn test_double_decision_has_no_solution() {
    let dataset = load(&conflicting_decisions());
    let mut solver = PlacementSolver::new(&dataset, config(1)).unwrap();

    assert_eq!(solver.count_combinations(), 0);
    assert!(solver.solve().is_empty());
    assert_eq!(solver.stats().combinations_evaluated, 0);
}

#[test]
fn test_no_teams_gives_one_empty_placement() {
    let dataset = load(&no_teams());
    let mut solver = PlacementSolver::new(&dataset, config(1)).unwrap();

    let results = solver.solve();
    assert_eq!(results.len(), 1);
    assert!(results.best().unwrap().score().is_zero());
    assert!(results.best().unwrap().assignment().is_empty());
}

#[test]
fn test_count_does_not_touch_results() {
    let dataset = load(&two_teams());
    let mut solver = PlacementSolver::new(&dataset, config(1)).unwrap();
    solver.solve();
    let before = solver.results().clone();

    solver.count_combinations();
    assert_eq!(solver.results(), &before);
}

#[test]
fn test_unlisted_candidate_never_enumerated() {
    // Bob is only on tB's list, so tA never holds him.
    let dataset = load(
        &Declarations::new()
            .with_team("tA", 1)
            .with_team("tB", 1)
            .with_candidate("Alice")
            .with_candidate("Bob")
            .with_requirement("tA", "Alice", 1)
            .with_requirement("tB", "Bob", 1),
    );
    let bob = dataset.find_candidate("Bob").unwrap().id();
    let mut solver = PlacementSolver::new(&dataset, config(10)).unwrap();

    for placement in solver.solve() {
        assert_ne!(placement.assignment().get(TeamId::new(0)), Some(bob));
    }
    assert_eq!(solver.results().best_score(), Some(Disappointment::ZERO));
}

#[test]
fn test_improvements_recorded() {
    let dataset = load(&two_teams());
    let mut solver = PlacementSolver::new(&dataset, config(1)).unwrap();
    solver.solve();

    // 1980, then 990, then 99
    assert_eq!(solver.stats().improvements, 3);
    assert_eq!(solver.stats().placements_kept, 3);
}

#[test]
fn test_count_between_steps_keeps_walk_position() {
    let dataset = load(&two_teams());
    let mut solver = PlacementSolver::new(&dataset, config(10)).unwrap();
    solver.start();
    assert!(solver.step());
    assert!(solver.step());

    assert_eq!(solver.count_combinations(), 5);
    let resumed = solver.step();
    assert!(resumed);
    // third combination in enumeration order: tA holds Alice, tB empty
    assert_eq!(
        solver.last_assignment().as_slice(),
        &[Some(CandidateId::new(0)), None]
    );
    while solver.step() {}
    let results = solver.finish();

    assert_eq!(results.len(), 5);
    let distinct: HashSet<Combination> = results
        .iter()
        .map(|p| p.assignment().clone().into_combination())
        .collect();
    assert_eq!(distinct.len(), 5);
    assert_eq!(solver.stats().combinations_evaluated, 5);
    assert_eq!(solver.stats().raw_tuples_visited, 6);
}

#[test]
fn test_zero_best_option_count_rejected() {
    let dataset = load(&two_teams());
    let err = PlacementSolver::new(&dataset, config(0)).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid configuration: best_option_count must be at least 1"
    );
    assert!(matches!(err, PlacerError::Config(_)));
}

#[test]
fn test_large_capacity_tracks_best() {
    // 3 teams with 4 disjoint candidates each: 5^3 combinations
    let mut declarations = Declarations::new();
    for team in 0..3 {
        declarations = declarations.with_team(format!("t{}", team), 1);
        for slot in 0..4 {
            let name = format!("c{}{}", team, slot);
            declarations = declarations
                .with_candidate(name.clone())
                .with_requirement(format!("t{}", team), name, slot + 1);
        }
    }
    let dataset = load(&declarations);
    let mut solver = PlacementSolver::new(&dataset, config(1000)).unwrap();
    let results = solver.solve();

    assert_eq!(results.len(), 125);
    assert_eq!(results.best_score(), Some(Disappointment::ZERO));
    assert_eq!(solver.stats().improvements, 4);
}
