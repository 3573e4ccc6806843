//! Built-in rubrics for the MIPS homework

use super::Rubric;
use crate::error::CheckError;
use crate::rules::{
    AttributeRule, CommentRule, ElementCountRule, EmphasisRule, PairingRule, TextAbsentRule,
    TextContainsRule, TitleRule,
};

pub const DEFAULT_RUBRIC: &str = "mips-homework";

/// Names accepted by [`builtin_rubric`], with a one-line summary each
pub const BUILTIN_RUBRICS: [(&str, &str); 2] = [
    (
        "mips-homework",
        "Structured MIPS page: Hungarian, UTF-8, headings, lists, emphasis, author comment",
    ),
    (
        "mips-fixture",
        "Unstructured MIPS draft: language, charset, title and section text",
    ),
];

const EXPANSION: &str = "Microprocessor without Interlocked Pipeline Stages";

pub fn builtin_rubric(name: &str) -> Result<Rubric, CheckError> {
    match name {
        "mips-homework" => mips_homework(),
        "mips-fixture" => Ok(mips_fixture()),
        other => Err(CheckError::UnknownRubric(other.to_string())),
    }
}

/// What a finished submission must look like
pub fn mips_homework() -> Result<Rubric, CheckError> {
    let mut rubric = Rubric::new("mips-homework")
        .rule(AttributeRule::new("lang-attribute", "html", "lang", "hu").case_insensitive())
        .rule(AttributeRule::new("charset", "meta", "charset", "utf-8").case_insensitive())
        .rule(TitleRule::present("title"))
        .rule(ElementCountRule::exactly("main-heading", "h1", 1))
        .rule(ElementCountRule::exactly("section-headings", "h2", 4))
        .rule(PairingRule::new("lists-introduced", "ul", "p"))
        .rule(TextAbsentRule::new("no-asterisk-bullets", "*", ["body"]))
        .rule(EmphasisRule::new("expansion-emphasized", [EXPANSION]));
    for section in section_text_rules() {
        rubric = rubric.rule(section.into_rule());
    }
    Ok(rubric.rule(CommentRule::author_and_year("author-comment")?))
}

/// The checks the unstructured draft was generated to satisfy
pub fn mips_fixture() -> Rubric {
    let mut rubric = Rubric::new("mips-fixture")
        .rule(AttributeRule::new("language", "html", "lang", "en"))
        .rule(AttributeRule::new("charset", "meta", "charset", "utf-48"))
        .rule(TitleRule::equals("title", "névtelen"));
    for section in section_text_rules() {
        rubric = rubric.rule(section.into_rule());
    }
    rubric
}

/// Phrases each of the four sections must mention
struct SectionText {
    name: &'static str,
    phrases: &'static [&'static str],
}

impl SectionText {
    fn into_rule(self) -> TextContainsRule {
        TextContainsRule::new(self.name, self.phrases.iter().copied())
    }
}

fn section_text_rules() -> [SectionText; 4] {
    [
        SectionText {
            name: "mips-section",
            phrases: &[EXPANSION],
        },
        SectionText {
            name: "extensions",
            phrases: &["MIPS-3D", "MDMX SIMD"],
        },
        SectionText {
            name: "built-in-systems",
            phrases: &["Sony PlayStation 2", "Sony PlayStation Portable"],
        },
        SectionText {
            name: "computers-section",
            phrases: &["Digital Equipment Corporation (DEC)", "Siemens Nixdorf"],
        },
    ]
}
