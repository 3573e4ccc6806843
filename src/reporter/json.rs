//! JSON reporter for machine-readable output

use crate::checker::{AggregateStats, UncheckedDocument};
use crate::{ScoreReport, Verdict};
use serde::Serialize;
use std::path::Path;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a single check result as JSON
    pub fn report(&self, report: &ScoreReport) -> String {
        self.to_json(&JsonReport::from(report), "{}")
    }

    /// Report multiple results with summary; documents that could not be
    /// checked are listed under `errors`
    pub fn report_with_summary(
        &self,
        reports: &[ScoreReport],
        unchecked: &[UncheckedDocument],
        stats: &AggregateStats,
    ) -> String {
        let output = JsonOutput {
            results: reports.iter().map(JsonReport::from).collect(),
            errors: unchecked,
            summary: JsonSummary {
                documents_checked: stats.documents_checked,
                documents_unchecked: unchecked.len(),
                fully_passing: stats.fully_passing,
                average_percentage: format!("{:.2}%", stats.average_percentage),
                total_rules: stats.total_rules,
                total_failures: stats.total_failures,
            },
        };
        self.to_json(&output, "{}")
    }

    fn to_json<T: Serialize>(&self, value: &T, fallback: &str) -> String {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.unwrap_or_else(|_| fallback.to_string())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    document: Option<&'a Path>,
    rubric: &'a str,
    passed: usize,
    total: usize,
    ratio: f64,
    percentage: String,
    grade: String,
    verdicts: &'a [Verdict],
}

impl<'a> From<&'a ScoreReport> for JsonReport<'a> {
    fn from(report: &'a ScoreReport) -> Self {
        Self {
            document: report.document.as_deref(),
            rubric: &report.rubric,
            passed: report.passed,
            total: report.total,
            ratio: report.ratio(),
            percentage: report.percentage(),
            grade: report.grade().to_string(),
            verdicts: &report.verdicts,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: Vec<JsonReport<'a>>,
    errors: &'a [UncheckedDocument],
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    documents_checked: usize,
    documents_unchecked: usize,
    fully_passing: usize,
    average_percentage: String,
    total_rules: usize,
    total_failures: usize,
}
