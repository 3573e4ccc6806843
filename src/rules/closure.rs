//! Ad-hoc rules from closures

use super::RubricRule;
use crate::document::Document;
use crate::error::RuleResult;

/// A named closure used as a rule
pub struct FnRule<F> {
    name: String,
    description: String,
    check: F,
}

impl<F> FnRule<F>
where
    F: Fn(&Document) -> RuleResult,
{
    pub fn new(name: impl Into<String>, description: impl Into<String>, check: F) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            check,
        }
    }
}

impl<F> RubricRule for FnRule<F>
where
    F: Fn(&Document) -> RuleResult,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn check(&self, doc: &Document) -> RuleResult {
        (self.check)(doc)
    }
}
