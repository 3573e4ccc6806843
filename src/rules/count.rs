//! Element cardinality

use super::RubricRule;
use crate::document::Document;
use crate::error::{RuleFailure, RuleResult};
use serde::{Deserialize, Serialize};

/// How the actual count is compared to the expected one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountMode {
    #[default]
    Exactly,
    AtLeast,
}

/// Rule requiring a number of `tag` elements
pub struct ElementCountRule {
    name: String,
    tag: String,
    expected: usize,
    mode: CountMode,
}

impl ElementCountRule {
    pub fn exactly(name: impl Into<String>, tag: impl Into<String>, expected: usize) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            expected,
            mode: CountMode::Exactly,
        }
    }

    pub fn at_least(name: impl Into<String>, tag: impl Into<String>, expected: usize) -> Self {
        Self {
            mode: CountMode::AtLeast,
            ..Self::exactly(name, tag, expected)
        }
    }

    fn expectation(&self) -> String {
        match self.mode {
            CountMode::Exactly => format!("exactly {}", self.expected),
            CountMode::AtLeast => format!("at least {}", self.expected),
        }
    }
}

impl RubricRule for ElementCountRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        format!("{} <{}> element(s)", self.expectation(), self.tag)
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let actual = doc.find_all(&self.tag).len();
        let ok = match self.mode {
            CountMode::Exactly => actual == self.expected,
            CountMode::AtLeast => actual >= self.expected,
        };
        if ok {
            Ok(())
        } else {
            Err(RuleFailure::Assertion(format!(
                "found {} <{}> element(s), expected {}",
                actual,
                self.tag,
                self.expectation()
            )))
        }
    }
}
