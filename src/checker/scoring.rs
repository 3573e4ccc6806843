//! Score computation for check runs

use crate::{Grade, ScoreReport, Verdict};
use std::path::PathBuf;

impl ScoreReport {
    /// Build a report from verdicts in rule order
    pub fn from_verdicts(
        rubric: impl Into<String>,
        document: Option<PathBuf>,
        verdicts: Vec<Verdict>,
    ) -> Self {
        let passed = verdicts.iter().filter(|v| v.passed).count();
        let total = verdicts.len();
        Self {
            rubric: rubric.into(),
            document,
            verdicts,
            passed,
            total,
        }
    }

    /// Passed / total, in 0.0..=1.0
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.passed as f64 / self.total as f64
    }

    /// Ratio as a percentage with two decimals, e.g. `75.00%`
    pub fn percentage(&self) -> String {
        format!("{:.2}%", self.ratio() * 100.0)
    }

    /// `passed/total (percentage)`, e.g. `6/8 (75.00%)`
    pub fn summary(&self) -> String {
        format!("{}/{} ({})", self.passed, self.total, self.percentage())
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score((self.ratio() * 100.0).floor() as u8)
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    /// Whether the displayed two-decimal percentage reaches `threshold`
    pub fn meets_threshold(&self, threshold: f64) -> bool {
        self.shown_percentage() >= threshold
    }

    /// The percentage as printed, so `66.67%` meets a threshold of `66.67`
    fn shown_percentage(&self) -> f64 {
        let raw = self.ratio() * 100.0;
        format!("{:.2}", raw).parse().unwrap_or(raw)
    }

    pub fn failed(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| !v.passed)
    }
}

/// Aggregate statistics from multiple document checks
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AggregateStats {
    /// Number of documents checked
    pub documents_checked: usize,
    /// Documents where every rule passed
    pub fully_passing: usize,
    /// Mean of per-document ratios, in percent
    pub average_percentage: f64,
    /// Rules run across all documents
    pub total_rules: usize,
    /// Failed verdicts across all documents
    pub total_failures: usize,
}

impl AggregateStats {
    pub fn from_reports(reports: &[ScoreReport]) -> Self {
        if reports.is_empty() {
            return Self::default();
        }

        let sum: f64 = reports.iter().map(|r| r.ratio() * 100.0).sum();
        Self {
            documents_checked: reports.len(),
            fully_passing: reports.iter().filter(|r| r.all_passed()).count(),
            average_percentage: sum / reports.len() as f64,
            total_rules: reports.iter().map(|r| r.total).sum(),
            total_failures: reports.iter().map(|r| r.total - r.passed).sum(),
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn ratio_is_passed_over_total(outcomes in prop::collection::vec(any::<bool>(), 1..64)) {
            let verdicts: Vec<Verdict> = outcomes
                .iter()
                .enumerate()
                .map(|(i, ok)| {
                    if *ok {
                        Verdict::pass(format!("r{}", i), "ok")
                    } else {
                        Verdict::fail(format!("r{}", i), "nope")
                    }
                })
                .collect();
            let passed = outcomes.iter().filter(|ok| **ok).count();
            let report = ScoreReport::from_verdicts("prop", None, verdicts);

            prop_assert_eq!(report.total, outcomes.len());
            prop_assert_eq!(report.passed, passed);
            prop_assert!((report.ratio() - passed as f64 / outcomes.len() as f64).abs() < 1e-12);
            prop_assert_eq!(
                report.percentage(),
                format!("{:.2}%", passed as f64 / outcomes.len() as f64 * 100.0)
            );
            let shown: f64 = report.percentage().trim_end_matches('%').parse().unwrap();
            prop_assert!(report.meets_threshold(shown));
        }
    }
}
