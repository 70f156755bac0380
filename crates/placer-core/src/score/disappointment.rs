//! Disappointment - Single-level cost of a placement

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error when parsing a score from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ScoreParseError {
    pub message: String,
}

/// Aggregate disappointment of a team or a whole combination.
///
/// Unlike a fitness value, **lower is better**: `0.0` means every team got
/// its first choice (or had no say in the matter). Ordering is total, using
/// IEEE 754 `totalOrder`, so the type can key heaps and sorted collections.
///
/// # Examples
///
/// ```
/// use placer_core::Disappointment;
///
/// let close = Disappointment::of(99.0);
/// let far = Disappointment::of(1980.0);
///
/// assert!(close < far);  // less disappointment is better
/// assert_eq!(close + far, Disappointment::of(2079.0));
/// ```
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Disappointment {
    value: f64,
}

impl Disappointment {
    /// No disappointment at all.
    pub const ZERO: Disappointment = Disappointment { value: 0.0 };

    /// Creates a new Disappointment with the given value.
    #[inline]
    pub const fn of(value: f64) -> Self {
        Disappointment { value }
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns true if nobody is disappointed.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    pub fn parse(s: &str) -> Result<Self, ScoreParseError> {
        let s = s.trim();
        s.parse::<f64>()
            .map(Disappointment::of)
            .map_err(|e| ScoreParseError {
                message: format!("Invalid Disappointment '{}': {}", s, e),
            })
    }
}

impl PartialEq for Disappointment {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Disappointment {}

impl Ord for Disappointment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl PartialOrd for Disappointment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Disappointment {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Disappointment::of(self.value + other.value)
    }
}

impl AddAssign for Disappointment {
    fn add_assign(&mut self, other: Self) {
        self.value += other.value;
    }
}

impl Mul<f64> for Disappointment {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Disappointment::of(self.value * factor)
    }
}

impl Sum for Disappointment {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Disappointment::ZERO, Add::add)
    }
}

impl fmt::Debug for Disappointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Disappointment({})", self.value)
    }
}

impl fmt::Display for Disappointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value)
    }
}

impl From<f64> for Disappointment {
    fn from(value: f64) -> Self {
        Disappointment::of(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let score = Disappointment::of(990.0);
        assert_eq!(score.value(), 990.0);
        assert!(Disappointment::ZERO.is_zero());
    }

    #[test]
    fn test_comparison() {
        let s1 = Disappointment::of(99.0);
        let s2 = Disappointment::of(990.0);
        let s3 = Disappointment::of(1980.0);

        assert!(s1 < s2);
        assert!(s2 < s3);
        assert_eq!(s1.max(s3), s3);
    }

    #[test]
    fn test_arithmetic() {
        let mut total = Disappointment::of(99.0) + Disappointment::of(990.0);
        assert_eq!(total, Disappointment::of(1089.0));

        total += Disappointment::of(1.0);
        assert_eq!(total, Disappointment::of(1090.0));
        assert_eq!(Disappointment::of(99.0) * 10.0, Disappointment::of(990.0));
    }

    #[test]
    fn test_sum() {
        let total: Disappointment = [99.0, 0.0, 990.0]
            .into_iter()
            .map(Disappointment::of)
            .sum();
        assert_eq!(total, Disappointment::of(1089.0));
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Disappointment::of(99.0).to_string(), "99.0");
        assert_eq!(
            Disappointment::parse(" 1089.0 ").unwrap(),
            Disappointment::of(1089.0)
        );
        assert!(Disappointment::parse("lots").is_err());
    }
}
