//! Shared test fixtures for placer crates.
//!
//! This crate provides ready-made declarations for testing.
//! It depends only on `placer-core` so every other crate can use it as a
//! dev-dependency without cycles.
//!
//! - [`scenarios`] - Small hand-checked placement problems
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! placer-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use placer_test::scenarios::{two_teams, four_teams_with_decision};
//! ```

pub mod scenarios;

pub use scenarios::{
    conflicting_decisions, four_teams_with_decision, load, no_teams, two_teams,
};
