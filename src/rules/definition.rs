//! Declarative rule definitions, as written in `.rubricrc.json` `customRules`

use super::{
    AttributeRule, CommentRule, CountMode, ElementCountRule, EmphasisRule, PairingRule,
    RubricRule, TextAbsentRule, TextContainsRule, TitleRule,
};
use super::comment::{DEFAULT_AUTHOR_PATTERN, DEFAULT_YEAR_PATTERN};
use crate::error::CheckError;
use serde::{Deserialize, Serialize};

/// One rule of a rubric, described as data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RuleDefinition {
    #[serde(rename_all = "camelCase")]
    Attribute {
        name: String,
        tag: String,
        attribute: String,
        equals: String,
        #[serde(default)]
        ignore_case: bool,
    },
    Count {
        name: String,
        tag: String,
        expected: usize,
        #[serde(default)]
        mode: CountMode,
    },
    TextContains {
        name: String,
        phrases: Vec<String>,
        #[serde(default)]
        within: Option<String>,
    },
    TextAbsent {
        name: String,
        literal: String,
        tags: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Pairing {
        name: String,
        tag: String,
        preceded_by: String,
    },
    Emphasis {
        name: String,
        phrases: Vec<String>,
        #[serde(default)]
        tags: Vec<String>,
    },
    Comment {
        name: String,
        #[serde(default)]
        author: Option<String>,
        #[serde(default)]
        year: Option<String>,
    },
    Title {
        name: String,
        #[serde(default)]
        equals: Option<String>,
    },
}

impl RuleDefinition {
    pub fn name(&self) -> &str {
        match self {
            RuleDefinition::Attribute { name, .. }
            | RuleDefinition::Count { name, .. }
            | RuleDefinition::TextContains { name, .. }
            | RuleDefinition::TextAbsent { name, .. }
            | RuleDefinition::Pairing { name, .. }
            | RuleDefinition::Emphasis { name, .. }
            | RuleDefinition::Comment { name, .. }
            | RuleDefinition::Title { name, .. } => name,
        }
    }

    /// Build the rule this definition describes
    pub fn build(&self) -> Result<Box<dyn RubricRule>, CheckError> {
        let rule: Box<dyn RubricRule> = match self.clone() {
            RuleDefinition::Attribute {
                name,
                tag,
                attribute,
                equals,
                ignore_case,
            } => {
                let rule = AttributeRule::new(name, tag, attribute, equals);
                if ignore_case {
                    Box::new(rule.case_insensitive())
                } else {
                    Box::new(rule)
                }
            }
            RuleDefinition::Count {
                name,
                tag,
                expected,
                mode,
            } => match mode {
                CountMode::Exactly => Box::new(ElementCountRule::exactly(name, tag, expected)),
                CountMode::AtLeast => Box::new(ElementCountRule::at_least(name, tag, expected)),
            },
            RuleDefinition::TextContains {
                name,
                phrases,
                within,
            } => {
                let rule = TextContainsRule::new(name, phrases);
                match within {
                    Some(scope) => Box::new(rule.within(scope)),
                    None => Box::new(rule),
                }
            }
            RuleDefinition::TextAbsent {
                name,
                literal,
                tags,
            } => Box::new(TextAbsentRule::new(name, literal, tags)),
            RuleDefinition::Pairing {
                name,
                tag,
                preceded_by,
            } => Box::new(PairingRule::new(name, tag, preceded_by)),
            RuleDefinition::Emphasis { name, phrases, tags } => {
                let rule = EmphasisRule::new(name, phrases);
                if tags.is_empty() {
                    Box::new(rule)
                } else {
                    Box::new(rule.with_tags(tags))
                }
            }
            RuleDefinition::Comment { name, author, year } => Box::new(CommentRule::new(
                name,
                author.as_deref().unwrap_or(DEFAULT_AUTHOR_PATTERN),
                year.as_deref().unwrap_or(DEFAULT_YEAR_PATTERN),
            )?),
            RuleDefinition::Title { name, equals } => match equals {
                Some(expected) => Box::new(TitleRule::equals(name, expected)),
                None => Box::new(TitleRule::present(name)),
            },
        };
        Ok(rule)
    }
}
