//! Inline emphasis: given phrases must be wrapped in an emphasis tag

use super::{quoted_list, RubricRule};
use crate::document::{normalize_whitespace, Document};
use crate::error::{RuleFailure, RuleResult};

const DEFAULT_TAGS: [&str; 2] = ["b", "strong"];

pub struct EmphasisRule {
    name: String,
    phrases: Vec<String>,
    tags: Vec<String>,
}

impl EmphasisRule {
    /// Phrases must appear inside `<b>` or `<strong>`
    pub fn new<I, S>(name: impl Into<String>, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            phrases: phrases.into_iter().map(Into::into).collect(),
            tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Accept these tags as emphasis instead of the bold defaults
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    fn emphasized_texts(&self, doc: &Document) -> Vec<String> {
        self.tags
            .iter()
            .flat_map(|tag| doc.find_all(tag))
            .map(|el| normalize_whitespace(&el.text()))
            .collect()
    }
}

impl RubricRule for EmphasisRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        let tags: Vec<String> = self.tags.iter().map(|t| format!("<{}>", t)).collect();
        format!("{} wrapped in {}", quoted_list(&self.phrases), tags.join(" or "))
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let emphasized = self.emphasized_texts(doc);
        let missing: Vec<String> = self
            .phrases
            .iter()
            .filter(|phrase| {
                let phrase = normalize_whitespace(phrase);
                !emphasized.iter().any(|text| text.contains(&phrase))
            })
            .cloned()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RuleFailure::Assertion(format!(
                "{} not emphasized with {}",
                quoted_list(&missing),
                self.tags.join("/")
            )))
        }
    }
}
