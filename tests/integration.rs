//! Integration tests: full check pipeline against test-fixtures/

use rubric::checker::{AggregateStats, Checker};
use rubric::rubric::builtin_rubric;
use rubric::rules::{AttributeRule, TextAbsentRule};
use rubric::{run_checks, CheckError, Document, Rubric, RubricRule};
use std::path::{Path, PathBuf};

const GOOD: &str = "test-fixtures/submissions/abc123/index.html";
const PARTIAL: &str = "test-fixtures/submissions/xyz789/index.html";
const DRAFT: &str = "test-fixtures/mips.html";

fn check(path: &str, rubric: &str) -> rubric::ScoreReport {
    Checker::new(builtin_rubric(rubric).unwrap())
        .check_file(Path::new(path))
        .unwrap_or_else(|e| panic!("check({}) failed: {}", path, e))
}

#[test]
fn good_submission_scores_full_marks() {
    let r = check(GOOD, "mips-homework");
    assert!(r.all_passed(), "failed: {:?}", r.failed().collect::<Vec<_>>());
    assert_eq!(r.percentage(), "100.00%");
}

#[test]
fn partial_submission_fails_exactly_three_rules() {
    let r = check(PARTIAL, "mips-homework");
    let failed: Vec<&str> = r.failed().map(|v| v.rule.as_str()).collect();
    assert_eq!(
        failed,
        vec!["lang-attribute", "no-asterisk-bullets", "author-comment"]
    );
    assert_eq!(r.summary(), "10/13 (76.92%)");
}

#[test]
fn draft_passes_its_own_rubric() {
    let r = check(DRAFT, "mips-fixture");
    assert_eq!(r.summary(), "7/7 (100.00%)");
}

#[test]
fn verdict_messages_explain_failures() {
    let r = check(PARTIAL, "mips-homework");
    let lang = r.verdicts.iter().find(|v| v.rule == "lang-attribute").unwrap();
    assert_eq!(lang.message, "<html> lang is \"en\", expected \"hu\"");
    let stars = r
        .verdicts
        .iter()
        .find(|v| v.rule == "no-asterisk-bullets")
        .unwrap();
    assert!(stars.message.contains("* NEC"), "{}", stars.message);
}

#[test]
fn lang_rule_flips_with_attribute() {
    let rules: Vec<Box<dyn RubricRule>> =
        vec![Box::new(AttributeRule::new("lang", "html", "lang", "hu"))];
    let en = Document::parse(r#"<html lang="en"><body></body></html>"#);
    let hu = Document::parse(r#"<html lang="hu"><body></body></html>"#);
    assert_eq!(run_checks(&en, &rules).unwrap().passed, 0);
    assert_eq!(run_checks(&hu, &rules).unwrap().passed, 1);
}

#[test]
fn asterisk_rule_passes_once_list_is_structured() {
    let rules: Vec<Box<dyn RubricRule>> =
        vec![Box::new(TextAbsentRule::new("no-asterisk", "*", ["ul", "li"]))];
    let before = Document::parse("<body><ul><li>* Sony PlayStation 2</li></ul></body>");
    let after = Document::parse("<body><ul><li>Sony PlayStation 2</li></ul></body>");
    assert!(!run_checks(&before, &rules).unwrap().all_passed());
    assert!(run_checks(&after, &rules).unwrap().all_passed());
}

#[test]
fn missing_document_produces_no_verdicts() {
    let checker = Checker::new(builtin_rubric("mips-homework").unwrap());
    let result = checker.check_file(Path::new("test-fixtures/submissions/nobody/index.html"));
    assert!(matches!(result, Err(CheckError::DocumentNotFound { .. })));
}

#[test]
fn aggregate_over_all_submissions() {
    let checker = Checker::new(builtin_rubric("mips-homework").unwrap());
    let results = checker.check_many(&[PathBuf::from(GOOD), PathBuf::from(PARTIAL)]);
    let reports: Vec<_> = results.into_iter().map(|(_, r)| r.unwrap()).collect();
    let stats = AggregateStats::from_reports(&reports);
    assert_eq!(stats.documents_checked, 2);
    assert_eq!(stats.fully_passing, 1);
    assert_eq!(stats.total_failures, 3);
}

#[test]
fn custom_rubric_from_closures_and_rules() {
    let rubric = Rubric::new("footer-check")
        .rule(AttributeRule::new("lang", "html", "lang", "hu"))
        .rule(rubric::rules::FnRule::new(
            "two-lists",
            "two <ul> lists",
            |doc: &Document| {
                let n = doc.find_all("ul").len();
                if n == 2 {
                    Ok(())
                } else {
                    Err(rubric::RuleFailure::Assertion(format!("{} lists", n)))
                }
            },
        ));
    let report = Checker::new(rubric)
        .check_file(Path::new(GOOD))
        .unwrap();
    assert_eq!(report.rubric, "footer-check");
    assert!(report.all_passed());
}
