//! Rubrics: ordered, named sets of rules

pub mod builtin;
pub mod fixture;

pub use builtin::{builtin_rubric, BUILTIN_RUBRICS, DEFAULT_RUBRIC};

use crate::error::CheckError;
use crate::rules::{RubricRule, RuleDefinition};

/// The grading criteria for a document. Rule order is reporting order.
#[derive(Debug)]
pub struct Rubric {
    name: String,
    rules: Vec<Box<dyn RubricRule>>,
}

impl Rubric {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule
    pub fn rule(mut self, rule: impl RubricRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn push(&mut self, rule: Box<dyn RubricRule>) {
        self.rules.push(rule);
    }

    /// Append rules built from declarative definitions
    pub fn extend_from_definitions(&mut self, defs: &[RuleDefinition]) -> Result<(), CheckError> {
        for def in defs {
            self.rules.push(def.build()?);
        }
        Ok(())
    }

    /// Drop every rule whose name the predicate rejects
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.rules.retain(|rule| keep(rule.name()));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Box<dyn RubricRule>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
