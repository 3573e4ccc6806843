//! Edge case tests: degenerate documents must grade, not panic.

use rubric::checker::Checker;
use rubric::rubric::builtin_rubric;
use rubric::{CheckError, ScoreReport};
use std::io::Write;
use tempfile::NamedTempFile;

fn check_bytes(bytes: &[u8]) -> Result<ScoreReport, CheckError> {
    let mut file = NamedTempFile::with_suffix(".html").unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    Checker::new(builtin_rubric("mips-homework").unwrap()).check_file(file.path())
}

#[test]
fn empty_file_grades_every_rule() {
    let r = check_bytes(b"").unwrap();
    assert_eq!(r.total, 13);
    assert_eq!(r.verdicts.len(), 13);
    // Only the asterisk rule holds on an empty page
    assert_eq!(r.passed, 1);
}

#[test]
fn plain_text_is_parsed_as_body() {
    let r = check_bytes(b"Microprocessor without Interlocked Pipeline Stages").unwrap();
    assert!(r
        .verdicts
        .iter()
        .any(|v| v.rule == "mips-section" && v.passed));
}

#[test]
fn missing_meta_is_an_errored_verdict_not_a_crash() {
    let r = check_bytes(b"<html lang=\"hu\"><head><title>x</title></head><body></body></html>")
        .unwrap();
    let charset = r.verdicts.iter().find(|v| v.rule == "charset").unwrap();
    assert!(!charset.passed);
    assert!(charset.errored);
}

#[test]
fn unclosed_tags_are_recovered() {
    let r = check_bytes(b"<html lang=hu><body><h1>MIPS<h2>A<p>intro<ul><li>a").unwrap();
    let lang = r.verdicts.iter().find(|v| v.rule == "lang-attribute").unwrap();
    assert!(lang.passed);
}

#[test]
fn invalid_utf8_is_a_read_error() {
    let err = check_bytes(&[0x3c, 0x68, 0xff, 0xfe, 0x3e]).unwrap_err();
    assert!(matches!(err, CheckError::Read { .. }));
}

#[test]
fn deeply_nested_markup() {
    let mut content = String::from("<html lang=\"hu\"><body>");
    for _ in 0..200 {
        content.push_str("<div>");
    }
    content.push_str("<ul><li>* x</li></ul>");
    for _ in 0..200 {
        content.push_str("</div>");
    }
    content.push_str("</body></html>");
    let r = check_bytes(content.as_bytes()).unwrap();
    let stars = r
        .verdicts
        .iter()
        .find(|v| v.rule == "no-asterisk-bullets")
        .unwrap();
    assert!(!stars.passed);
}
