//! Rubric: HTML conformance checker
//!
//! This library grades a hand-authored HTML document against a rubric of
//! named structural rules and reports a verdict per rule plus a score.

pub mod checker;
pub mod config;
pub mod document;
pub mod error;
pub mod reporter;
pub mod rubric;
pub mod rules;

pub use checker::{run_checks, Checker};
pub use document::{Document, ElementHandle};
pub use error::{CheckError, RuleFailure, RuleResult};
pub use rubric::Rubric;
pub use rules::RubricRule;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The outcome of applying one rule to one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Name of the rule
    pub rule: String,
    pub passed: bool,
    /// What the rule requires when passed, why it failed otherwise
    pub message: String,
    /// The rule could not be evaluated (as opposed to evaluating to false)
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub errored: bool,
}

impl Verdict {
    pub fn pass(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            passed: true,
            message: message.into(),
            errored: false,
        }
    }

    pub fn fail(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            passed: false,
            message: message.into(),
            errored: false,
        }
    }

    pub fn error(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errored: true,
            ..Self::fail(rule, message)
        }
    }
}

/// Verdicts of one run in rule order, with the pass ratio
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// Rubric the document was graded against
    pub rubric: String,
    /// Graded file, when the document came from disk
    pub document: Option<PathBuf>,
    pub verdicts: Vec<Verdict>,
    pub passed: usize,
    /// Number of rules run; always > 0
    pub total: usize,
}

/// Letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=100 => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::F => write!(f, "F"),
        }
    }
}

/// Check a single file against a built-in rubric
pub fn check_file(path: &std::path::Path, rubric: &str) -> Result<ScoreReport, CheckError> {
    let rubric = rubric::builtin_rubric(rubric)?;
    Checker::new(rubric).check_file(path)
}
