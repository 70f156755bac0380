//! Hand-checked placement problems.

use placer_core::{Dataset, Declarations, TeamDecl};

/// Loads declarations that are known to be valid.
///
/// # Panics
///
/// Panics if the declarations fail to load; fixtures are expected to be valid.
pub fn load(declarations: &Declarations) -> Dataset {
    Dataset::load(declarations).expect("fixture declarations must load")
}

/// Two priority-1 teams competing for Alice.
///
/// - tA: Alice (p1), Bob (p2)
/// - tB: Alice (p1)
///
/// Raw option space is 3 x 2 = 6; both taking Alice is invalid, leaving 5.
/// The best placement is tA = Bob, tB = Alice with disappointment 99.
pub fn two_teams() -> Declarations {
    Declarations::new()
        .with_team("tA", 1)
        .with_team("tB", 1)
        .with_candidate("Alice")
        .with_candidate("Bob")
        .with_requirement("tA", "Alice", 1)
        .with_requirement("tA", "Bob", 2)
        .with_requirement("tB", "Alice", 1)
}

/// Five candidates, four teams, Frank fixed to tD.
///
/// - tA: Alice (p1), Eve (p2), Bob (p3)
/// - tB: Alice (p1), Bob (p2), alias "Nicks team"
/// - tC: Frank (p1), Bob (p2), Ann (p3)
/// - tD: Eve (p1), Alice (p2), Frank (p3), priority 2, decided Frank
///
/// Requirements are declared out of preference order on purpose.
pub fn four_teams_with_decision() -> Declarations {
    Declarations::new()
        .with_candidate("Alice")
        .with_candidate("Bob")
        .with_candidate("Eve")
        .with_candidate("Ann")
        .with_candidate("Frank")
        .with_team("tA", 1)
        .with_team_decl(TeamDecl::new("tB", 1).with_alias("Nicks team"))
        .with_team("tC", 1)
        .with_team("tD", 2)
        .with_decision("tD", "Frank")
        .with_requirement("tA", "Alice", 1)
        .with_requirement("tA", "Bob", 3)
        .with_requirement("tB", "Bob", 2)
        .with_requirement("tB", "Alice", 1)
        .with_requirement("tC", "Ann", 3)
        .with_requirement("tC", "Bob", 2)
        .with_requirement("tD", "Eve", 1)
        .with_requirement("tA", "Eve", 2)
        .with_requirement("tD", "Alice", 2)
        .with_requirement("tD", "Frank", 3)
        .with_requirement("tC", "Frank", 1)
}

/// Two teams both decided for Alice: every combination is invalid.
pub fn conflicting_decisions() -> Declarations {
    two_teams()
        .with_decision("tA", "Alice")
        .with_decision("tB", "Alice")
}

/// Candidates but no teams.
pub fn no_teams() -> Declarations {
    Declarations::new()
        .with_candidate("Alice")
        .with_candidate("Bob")
}
