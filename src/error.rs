//! Error types for document loading, rubric construction and rule evaluation

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors: any of these aborts a check run before a report exists
#[derive(Debug, Error)]
pub enum CheckError {
    /// The document to check does not exist
    #[error("Document not found: {}", path.display())]
    DocumentNotFound { path: PathBuf },

    /// The document exists but could not be read
    #[error("Failed to read document: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rubric must contain at least one rule
    #[error("Rubric has no rules to run")]
    EmptyRubric,

    #[error("Unknown rubric: {0} (available: mips-homework, mips-fixture)")]
    UnknownRubric(String),

    #[error("Invalid CSS selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Why a single rule did not pass. Never fatal to the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleFailure {
    /// The rule's expected condition is false
    Assertion(String),
    /// The document did not have the shape the rule needs to evaluate
    Execution(String),
}

impl RuleFailure {
    pub fn message(&self) -> &str {
        match self {
            RuleFailure::Assertion(msg) | RuleFailure::Execution(msg) => msg,
        }
    }

    pub fn is_execution(&self) -> bool {
        matches!(self, RuleFailure::Execution(_))
    }
}

impl std::fmt::Display for RuleFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleFailure::Assertion(msg) => write!(f, "{}", msg),
            RuleFailure::Execution(msg) => write!(f, "rule error: {}", msg),
        }
    }
}

/// Outcome of applying one rule
pub type RuleResult = Result<(), RuleFailure>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_not_found_mentions_path() {
        let err = CheckError::DocumentNotFound {
            path: PathBuf::from("missing/index.html"),
        };
        assert!(err.to_string().contains("missing/index.html"));
    }

    #[test]
    fn execution_failure_is_labelled() {
        let f = RuleFailure::Execution("no <html> element".to_string());
        assert!(f.is_execution());
        assert_eq!(f.message(), "no <html> element");
        assert_eq!(f.to_string(), "rule error: no <html> element");
    }
}
