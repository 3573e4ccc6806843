//! Attribute value on an element, e.g. `<html lang="hu">` or `<meta charset="utf-8">`

use super::RubricRule;
use crate::document::Document;
use crate::error::{RuleFailure, RuleResult};

/// Rule requiring the first `tag` element to carry `attribute` with an expected value
pub struct AttributeRule {
    name: String,
    tag: String,
    attribute: String,
    expected: String,
    case_insensitive: bool,
}

impl AttributeRule {
    pub fn new(
        name: impl Into<String>,
        tag: impl Into<String>,
        attribute: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            attribute: attribute.into(),
            expected: expected.into(),
            case_insensitive: false,
        }
    }

    /// Compare values ignoring ASCII case (charset names, language tags)
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    fn matches(&self, actual: &str) -> bool {
        let actual = actual.trim();
        if self.case_insensitive {
            actual.eq_ignore_ascii_case(&self.expected)
        } else {
            actual == self.expected
        }
    }
}

impl RubricRule for AttributeRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        format!(
            "<{}> has {}=\"{}\"",
            self.tag, self.attribute, self.expected
        )
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let element = doc.find_first(&self.tag).ok_or_else(|| {
            RuleFailure::Execution(format!("document has no <{}> element", self.tag))
        })?;

        match element.attribute(&self.attribute) {
            Some(actual) if self.matches(actual) => Ok(()),
            Some(actual) => Err(RuleFailure::Assertion(format!(
                "<{}> {} is \"{}\", expected \"{}\"",
                self.tag, self.attribute, actual, self.expected
            ))),
            None => Err(RuleFailure::Assertion(format!(
                "<{}> is missing the {} attribute (expected \"{}\")",
                self.tag, self.attribute, self.expected
            ))),
        }
    }
}
