//! Comment content: at least one comment must carry both an author and a year

use super::RubricRule;
use crate::document::Document;
use crate::error::{CheckError, RuleFailure, RuleResult};
use regex::Regex;

pub const DEFAULT_AUTHOR_PATTERN: &str =
    r"(?i)\b(author|szerző|készítette|név|name)\s*:\s*\S+";
pub const DEFAULT_YEAR_PATTERN: &str = r"\b(19|20)\d{2}\b";

#[derive(Debug)]
pub struct CommentRule {
    name: String,
    author: Regex,
    year: Regex,
}

impl CommentRule {
    pub fn new(
        name: impl Into<String>,
        author_pattern: &str,
        year_pattern: &str,
    ) -> Result<Self, CheckError> {
        Ok(Self {
            name: name.into(),
            author: compile(author_pattern)?,
            year: compile(year_pattern)?,
        })
    }

    /// Author label (`Author:`, `Szerző:`, ...) followed by a name, plus a four-digit year
    pub fn author_and_year(name: impl Into<String>) -> Result<Self, CheckError> {
        Self::new(name, DEFAULT_AUTHOR_PATTERN, DEFAULT_YEAR_PATTERN)
    }

    fn matches(&self, comment: &str) -> bool {
        self.author.is_match(comment) && self.year.is_match(comment)
    }
}

fn compile(pattern: &str) -> Result<Regex, CheckError> {
    Regex::new(pattern).map_err(|source| CheckError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

impl RubricRule for CommentRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        "a comment names the author and the year".to_string()
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let comments = doc.comments();
        if comments.is_empty() {
            return Err(RuleFailure::Assertion(
                "document has no comments".to_string(),
            ));
        }
        if comments.iter().any(|c| self.matches(c)) {
            return Ok(());
        }

        let has_author = comments.iter().any(|c| self.author.is_match(c));
        let has_year = comments.iter().any(|c| self.year.is_match(c));
        let msg = match (has_author, has_year) {
            (true, true) => "author and year appear in different comments",
            (true, false) => "no comment contains a year",
            (false, true) => "no comment names the author",
            (false, false) => "no comment names the author or the year",
        };
        Err(RuleFailure::Assertion(msg.to_string()))
    }
}
