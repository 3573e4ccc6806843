//! Document title

use super::RubricRule;
use crate::document::Document;
use crate::error::{RuleFailure, RuleResult};

/// Rule requiring a `<title>`: non-empty, or equal to an expected text
pub struct TitleRule {
    name: String,
    expected: Option<String>,
}

impl TitleRule {
    pub fn present(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expected: None,
        }
    }

    pub fn equals(name: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expected: Some(expected.into()),
        }
    }
}

impl RubricRule for TitleRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        match &self.expected {
            Some(expected) => format!("<title> is \"{}\"", expected),
            None => "<title> is present and not empty".to_string(),
        }
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let title = doc
            .find_first("title")
            .ok_or_else(|| RuleFailure::Assertion("document has no <title>".to_string()))?;
        let text = title.text();
        let text = text.trim();

        match &self.expected {
            Some(expected) if text != expected => Err(RuleFailure::Assertion(format!(
                "<title> is \"{}\", expected \"{}\"",
                text, expected
            ))),
            None if text.is_empty() => {
                Err(RuleFailure::Assertion("<title> is empty".to_string()))
            }
            _ => Ok(()),
        }
    }
}
