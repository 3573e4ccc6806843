//! Check engine - runs a rubric's rules against a document

use crate::config::Config;
use crate::document::Document;
use crate::error::{CheckError, RuleFailure};
use crate::rubric::{builtin_rubric, Rubric};
use crate::rules::RubricRule;
use crate::{ScoreReport, Verdict};
use serde::Serialize;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Run every rule once against `doc`, in order.
///
/// Per-rule problems (a false condition, a document shape the rule cannot
/// handle, even a panic) become failing verdicts; the run always completes.
pub fn run_checks(
    doc: &Document,
    rules: &[Box<dyn RubricRule>],
) -> Result<ScoreReport, CheckError> {
    if rules.is_empty() {
        return Err(CheckError::EmptyRubric);
    }

    let verdicts = rules.iter().map(|rule| evaluate(rule.as_ref(), doc)).collect();
    Ok(ScoreReport::from_verdicts(
        "",
        doc.source().map(Path::to_path_buf),
        verdicts,
    ))
}

fn evaluate(rule: &dyn RubricRule, doc: &Document) -> Verdict {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| rule.check(doc)));
    let verdict = match outcome {
        Ok(Ok(())) => Verdict::pass(rule.name(), rule.description()),
        Ok(Err(RuleFailure::Assertion(msg))) => Verdict::fail(rule.name(), msg),
        Ok(Err(RuleFailure::Execution(msg))) => Verdict::error(rule.name(), msg),
        Err(payload) => Verdict::error(rule.name(), panic_message(payload.as_ref())),
    };
    debug!(
        rule = %verdict.rule,
        passed = verdict.passed,
        message = %verdict.message,
        "verdict"
    );
    verdict
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("rule panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("rule panicked: {}", s)
    } else {
        "rule panicked".to_string()
    }
}

/// A document that produced no report, with the reason
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UncheckedDocument {
    pub document: PathBuf,
    pub error: String,
}

/// Checks documents against one rubric
#[derive(Debug)]
pub struct Checker {
    rubric: Rubric,
}

impl Checker {
    pub fn new(rubric: Rubric) -> Self {
        Self { rubric }
    }

    /// Build the rubric a config describes: the named built-in rubric, plus
    /// custom rules, minus rules switched off.
    pub fn from_config(config: &Config) -> Result<Self, CheckError> {
        let mut rubric = builtin_rubric(config.rubric_name())?;
        rubric.extend_from_definitions(&config.custom_rules)?;
        rubric.retain(|name| config.is_rule_enabled(name));
        Ok(Self::new(rubric))
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    pub fn check_document(&self, doc: &Document) -> Result<ScoreReport, CheckError> {
        let mut report = run_checks(doc, self.rubric.rules())?;
        report.rubric = self.rubric.name().to_string();
        Ok(report)
    }

    /// Load, parse and check a file. A missing file fails before any rule runs.
    pub fn check_file(&self, path: &Path) -> Result<ScoreReport, CheckError> {
        if self.rubric.is_empty() {
            return Err(CheckError::EmptyRubric);
        }
        let doc = Document::load(path)?;
        let report = self.check_document(&doc)?;
        info!(
            document = %path.display(),
            score = %report.summary(),
            "checked"
        );
        Ok(report)
    }

    /// Check each file independently; one missing file does not stop the others
    pub fn check_many(&self, paths: &[PathBuf]) -> Vec<(PathBuf, Result<ScoreReport, CheckError>)> {
        paths
            .iter()
            .map(|path| (path.clone(), self.check_file(path)))
            .collect()
    }

    /// Like [`Checker::check_many`], split into reports and the documents
    /// that could not be checked. Both keep input order.
    pub fn check_all(&self, paths: &[PathBuf]) -> (Vec<ScoreReport>, Vec<UncheckedDocument>) {
        let mut reports = Vec::with_capacity(paths.len());
        let mut unchecked = Vec::new();
        for (path, result) in self.check_many(paths) {
            match result {
                Ok(report) => reports.push(report),
                Err(e) => {
                    warn!(document = %path.display(), error = %e, "could not check");
                    unchecked.push(UncheckedDocument {
                        document: path,
                        error: e.to_string(),
                    });
                }
            }
        }
        (reports, unchecked)
    }
}
