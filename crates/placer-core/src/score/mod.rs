//! Score types for representing placement quality
//!
//! A placement is judged by how disappointed the teams are with it.
//! Scores are immutable values; lower is better.

mod disappointment;

pub use disappointment::{Disappointment, ScoreParseError};
