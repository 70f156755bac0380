//! Listings that print names instead of ids.
//!
//! The plain `Display` impls on the entities only know their own fields.
//! A [`Listed`] view borrows the dataset as well, so cross references come
//! out as team and candidate names.

use std::fmt;

use super::dataset::Dataset;
use super::entities::{Candidate, Decision, Requirement, Team};

/// An entity viewed through the dataset that owns it.
///
/// # Examples
///
/// ```
/// use placer_core::{Dataset, Declarations};
///
/// let dataset = Dataset::load(
///     &Declarations::new()
///         .with_team("tA", 1)
///         .with_candidate("Alice")
///         .with_requirement("tA", "Alice", 1),
/// )
/// .unwrap();
///
/// let requirement = &dataset.requirements()[0];
/// assert_eq!(
///     dataset.listed(requirement).to_string(),
///     "R #00, team:tA, candidate:Alice, priority:1"
/// );
/// ```
pub struct Listed<'a, T> {
    dataset: &'a Dataset,
    item: &'a T,
}

impl<'a, T> Listed<'a, T> {
    pub(crate) fn new(dataset: &'a Dataset, item: &'a T) -> Self {
        Self { dataset, item }
    }

    pub fn item(&self) -> &'a T {
        self.item
    }
}

fn write_list<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    write!(f, "[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

impl fmt::Display for Listed<'_, Team> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let team = self.item;
        write!(f, "T {}, name:{}, priority:{}", team.id(), team.name(), team.priority())?;
        if let Some(alias) = team.alias() {
            write!(f, ", alias:{}", alias)?;
        }
        write!(f, ", requirements:")?;
        write_list(
            f,
            self.dataset.team_requirements(team.id()).map(|r| {
                format!("{}({})", self.dataset.candidate(r.candidate()).name(), r.priority())
            }),
        )?;
        if let Some(candidate) = self.dataset.decided_candidate(team.id()) {
            write!(f, ", decision:{}", self.dataset.candidate(candidate).name())?;
        }
        Ok(())
    }
}

impl fmt::Display for Listed<'_, Candidate> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let candidate = self.item;
        write!(
            f,
            "C {}, name:{}, alias:{}, requirements:",
            candidate.id(),
            candidate.name(),
            candidate.alias().unwrap_or("?")
        )?;
        write_list(
            f,
            candidate.requirements().iter().map(|&id| {
                let requirement = self.dataset.requirement(id);
                format!(
                    "{}({})",
                    self.dataset.team(requirement.team()).name(),
                    requirement.priority()
                )
            }),
        )?;
        write!(f, ", decisions:")?;
        write_list(
            f,
            candidate
                .decisions()
                .iter()
                .map(|&id| self.dataset.team(self.dataset.decision(id).team()).name()),
        )
    }
}

impl fmt::Display for Listed<'_, Requirement> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let requirement = self.item;
        write!(
            f,
            "R {}, team:{}, candidate:{}, priority:{}",
            requirement.id(),
            self.dataset.team(requirement.team()).name(),
            self.dataset.candidate(requirement.candidate()).name(),
            requirement.priority()
        )
    }
}

impl fmt::Display for Listed<'_, Decision> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decision = self.item;
        write!(
            f,
            "D {}, team:{}, candidate:{}",
            decision.id(),
            self.dataset.team(decision.team()).name(),
            self.dataset.candidate(decision.candidate()).name()
        )
    }
}

/// Every entity of a dataset, one per line, grouped by kind.
pub struct DatasetListing<'a> {
    dataset: &'a Dataset,
}

impl<'a> DatasetListing<'a> {
    pub(crate) fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }
}

impl fmt::Display for DatasetListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dataset = self.dataset;
        for team in dataset.teams() {
            writeln!(f, "{}", dataset.listed(team))?;
        }
        for candidate in dataset.candidates() {
            writeln!(f, "{}", dataset.listed(candidate))?;
        }
        for requirement in dataset.requirements() {
            writeln!(f, "{}", dataset.listed(requirement))?;
        }
        for decision in dataset.decisions() {
            writeln!(f, "{}", dataset.listed(decision))?;
        }
        Ok(())
    }
}
