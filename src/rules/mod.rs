//! Rubric rules: named predicates over a parsed document

pub mod attribute;
pub mod closure;
pub mod comment;
pub mod count;
pub mod definition;
pub mod emphasis;
pub mod pairing;
pub mod text;
pub mod title;

pub use attribute::AttributeRule;
pub use closure::FnRule;
pub use comment::CommentRule;
pub use count::{CountMode, ElementCountRule};
pub use definition::RuleDefinition;
pub use emphasis::EmphasisRule;
pub use pairing::PairingRule;
pub use text::{TextAbsentRule, TextContainsRule};
pub use title::TitleRule;

use crate::document::Document;
use crate::error::RuleResult;

/// Trait for rubric rules
pub trait RubricRule {
    /// Rule name, kebab-case, unique within a rubric
    fn name(&self) -> &str;

    /// What the rule requires, phrased for the person being graded
    fn description(&self) -> String;

    /// Evaluate the rule. Must not depend on anything but the document.
    fn check(&self, doc: &Document) -> RuleResult;
}

impl std::fmt::Debug for dyn RubricRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RubricRule")
            .field("name", &self.name())
            .finish()
    }
}

/// Quote a list of strings for messages: `"a", "b"`
pub(crate) fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|s| format!("\"{}\"", s))
        .collect::<Vec<_>>()
        .join(", ")
}
