//! Structural pairing: every element of one kind introduced by another,
//! e.g. each `<ul>` directly after the `<p>` that introduces it

use super::RubricRule;
use crate::document::Document;
use crate::error::{RuleFailure, RuleResult};

pub struct PairingRule {
    name: String,
    /// Element that must be introduced
    tag: String,
    /// Element that must immediately precede it
    preceded_by: String,
}

impl PairingRule {
    pub fn new(
        name: impl Into<String>,
        tag: impl Into<String>,
        preceded_by: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            preceded_by: preceded_by.into(),
        }
    }
}

impl RubricRule for PairingRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        format!(
            "every <{}> directly follows a <{}>",
            self.tag, self.preceded_by
        )
    }

    fn check(&self, doc: &Document) -> RuleResult {
        let elements = doc.find_all(&self.tag);
        if elements.is_empty() {
            return Err(RuleFailure::Assertion(format!(
                "document has no <{}> elements",
                self.tag
            )));
        }

        let paired = elements
            .iter()
            .filter(|el| {
                el.previous_element_sibling()
                    .is_some_and(|prev| prev.is(&self.preceded_by))
            })
            .count();

        if paired == elements.len() {
            Ok(())
        } else {
            Err(RuleFailure::Assertion(format!(
                "{} of {} <{}> element(s) are not directly preceded by a <{}>",
                elements.len() - paired,
                elements.len(),
                self.tag,
                self.preceded_by
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> PairingRule {
        PairingRule::new("lists-introduced", "ul", "p")
    }

    #[test]
    fn all_lists_introduced() {
        let doc = Document::parse(
            "<body><p>Ilyen például:</p><ul><li>a</li></ul>\
             <h2>x</h2><p>Akik még alkalmazták:</p>\n<ul><li>b</li></ul></body>",
        );
        assert!(rule().check(&doc).is_ok());
    }

    #[test]
    fn list_after_heading_fails() {
        let doc = Document::parse(
            "<body><p>intro</p><ul><li>a</li></ul><h2>x</h2><ul><li>b</li></ul></body>",
        );
        let err = rule().check(&doc).unwrap_err();
        assert_eq!(
            err.message(),
            "1 of 2 <ul> element(s) are not directly preceded by a <p>"
        );
    }

    #[test]
    fn no_lists_fails() {
        let doc = Document::parse("<body><p>* a</p></body>");
        assert!(rule().check(&doc).is_err());
    }

    #[test]
    fn first_child_has_no_predecessor() {
        let doc = Document::parse("<body><ul><li>a</li></ul></body>");
        assert!(rule().check(&doc).is_err());
    }
}
