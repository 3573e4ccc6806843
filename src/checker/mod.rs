//! Checker module - rule evaluation and scoring

pub mod engine;
pub mod scoring;

pub use engine::{run_checks, Checker, UncheckedDocument};
pub use scoring::AggregateStats;
