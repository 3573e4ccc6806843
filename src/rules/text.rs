//! Text content rules: required phrases and forbidden literals

use super::{quoted_list, RubricRule};
use crate::document::{normalize_whitespace, Document};
use crate::error::{RuleFailure, RuleResult};

const DEFAULT_SCOPE: &str = "body";
const SNIPPET_LEN: usize = 40;

/// Rule requiring every phrase to appear in the text of a scope element
pub struct TextContainsRule {
    name: String,
    scope: String,
    phrases: Vec<String>,
}

impl TextContainsRule {
    pub fn new<I, S>(name: impl Into<String>, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            scope: DEFAULT_SCOPE.to_string(),
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    /// Search inside the first `tag` element instead of `<body>`
    pub fn within(mut self, tag: impl Into<String>) -> Self {
        self.scope = tag.into();
        self
    }
}

impl RubricRule for TextContainsRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        format!("<{}> mentions {}", self.scope, quoted_list(&self.phrases))
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let scope = doc.find_first(&self.scope).ok_or_else(|| {
            RuleFailure::Execution(format!("document has no <{}> element", self.scope))
        })?;
        let text = normalize_whitespace(&scope.text());

        let missing: Vec<String> = self
            .phrases
            .iter()
            .filter(|phrase| !text.contains(normalize_whitespace(phrase).as_str()))
            .cloned()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RuleFailure::Assertion(format!(
                "<{}> does not mention {}",
                self.scope,
                quoted_list(&missing)
            )))
        }
    }
}

/// Rule forbidding a literal inside the text of certain elements,
/// e.g. no hand-typed `*` bullets inside lists
pub struct TextAbsentRule {
    name: String,
    literal: String,
    tags: Vec<String>,
}

impl TextAbsentRule {
    pub fn new<I, S>(name: impl Into<String>, literal: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            literal: literal.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl RubricRule for TextAbsentRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        let tags: Vec<String> = self.tags.iter().map(|t| format!("<{}>", t)).collect();
        format!("no \"{}\" inside {}", self.literal, tags.join(", "))
    }

    fn check(&self, doc: &Document) -> RuleResult {
        for tag in &self.tags {
            for element in doc.find_all(tag) {
                let text = normalize_whitespace(&element.text());
                if let Some(pos) = text.find(self.literal.as_str()) {
                    let snippet: String = text[pos..].chars().take(SNIPPET_LEN).collect();
                    return Err(RuleFailure::Assertion(format!(
                        "<{}> contains \"{}\": \"{}\"",
                        tag, self.literal, snippet
                    )));
                }
            }
        }
        Ok(())
    }
}
