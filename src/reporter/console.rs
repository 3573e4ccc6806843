//! Console reporter with colored output

use crate::checker::{AggregateStats, UncheckedDocument};
use crate::{Grade, ScoreReport, Verdict};
use colored::{ColoredString, Colorize};
use std::fmt::Write;
use std::path::Path;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show passing rules too
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single check result
    pub fn report(&self, report: &ScoreReport) {
        print!("{}", self.render(report));
    }

    /// Report multiple results with summary
    pub fn report_many(&self, reports: &[ScoreReport], stats: &AggregateStats) {
        for report in reports {
            self.report(report);
            println!("{}", "─".repeat(60));
        }
        print!("{}", self.render_summary(stats));
    }

    /// Report a document that could not be checked, on stderr
    pub fn report_unchecked(&self, unchecked: &UncheckedDocument) {
        eprintln!("{}", self.render_unchecked(unchecked));
    }

    pub fn render_unchecked(&self, unchecked: &UncheckedDocument) -> String {
        format!(
            "{}: {}: {}",
            self.paint("Error", |s| s.red().bold()),
            unchecked.document.display(),
            unchecked.error
        )
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, report: &ScoreReport) {
        println!("{}", self.render_quiet(report));
    }

    pub fn render_quiet(&self, report: &ScoreReport) -> String {
        format!(
            "{}: {} ({})",
            display_document(report.document.as_deref()),
            report.summary(),
            self.colorize_grade(report.grade())
        )
    }

    pub fn render(&self, report: &ScoreReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            self.paint(
                &format!(
                    "📋 Rubric check: {}",
                    display_document(report.document.as_deref())
                ),
                |s| s.bold()
            )
        );
        let _ = writeln!(
            out,
            "   Rubric: {} | Rules: {}",
            report.rubric, report.total
        );
        let _ = writeln!(out);

        let width = report
            .verdicts
            .iter()
            .map(|v| v.rule.chars().count())
            .max()
            .unwrap_or(0);
        for verdict in &report.verdicts {
            if verdict.passed && !self.verbose {
                continue;
            }
            let _ = writeln!(out, "{}", self.render_verdict(verdict, width));
        }
        if !self.verbose && report.all_passed() {
            let _ = writeln!(out, "   {}", self.paint("All rules passed", |s| s.green()));
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "   Score: {} {} {}",
            self.create_score_bar(report.ratio()),
            self.paint(&report.summary(), |s| s.bold()),
            self.colorize_grade(report.grade())
        );
        let _ = writeln!(out);
        out
    }

    fn render_verdict(&self, verdict: &Verdict, width: usize) -> String {
        let (mark, label) = if verdict.passed {
            (self.paint("✓", |s| s.green()), String::new())
        } else if verdict.errored {
            (
                self.paint("!", |s| s.red().bold()),
                format!(" {}", self.paint("(could not evaluate)", |s| s.dimmed())),
            )
        } else {
            (self.paint("✗", |s| s.red()), String::new())
        };
        format!(
            "   {} {:<width$}  {}{}",
            mark,
            verdict.rule,
            verdict.message,
            label,
            width = width
        )
    }

    pub fn render_summary(&self, stats: &AggregateStats) -> String {
        let mut out = String::new();
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "═".repeat(60));
        let _ = writeln!(out, "{}", self.paint("Summary", |s| s.bold()));
        let _ = writeln!(out, "{}", "═".repeat(60));
        let _ = writeln!(out, "   Documents checked: {}", stats.documents_checked);
        let _ = writeln!(
            out,
            "   Fully passing:     {}/{}",
            stats.fully_passing, stats.documents_checked
        );
        let _ = writeln!(
            out,
            "   Average score:     {:.2}%",
            stats.average_percentage
        );
        let _ = writeln!(
            out,
            "   Failed rules:      {} of {}",
            stats.total_failures, stats.total_rules
        );
        let _ = writeln!(out);
        out
    }

    fn paint(&self, s: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.use_colors {
            style(s).to_string()
        } else {
            s.to_string()
        }
    }

    fn colorize_grade(&self, grade: Grade) -> String {
        let s = grade.to_string();
        self.paint(&s, |s| match grade {
            Grade::A => s.green().bold(),
            Grade::B => s.green(),
            Grade::C => s.yellow(),
            Grade::D => s.red(),
            Grade::F => s.red().bold(),
        })
    }

    fn create_score_bar(&self, ratio: f64) -> String {
        let filled = ((ratio * 20.0).round() as usize).min(20);
        let empty = 20 - filled;
        let bar = format!("[{}{}]", "█".repeat(filled), "░".repeat(empty));

        self.paint(&bar, |s| {
            if ratio >= 0.8 {
                s.green()
            } else if ratio >= 0.6 {
                s.yellow()
            } else {
                s.red()
            }
        })
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn display_document(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "<in-memory document>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample() -> ScoreReport {
        ScoreReport::from_verdicts(
            "mips-homework",
            Some(PathBuf::from("abc123/index.html")),
            vec![
                Verdict::pass("lang-attribute", "<html> has lang=\"hu\""),
                Verdict::fail("charset", "<meta> charset is \"utf-48\", expected \"utf-8\""),
                Verdict::error("lists-introduced", "document has no <body> element"),
                Verdict::pass("title", "<title> is present and not empty"),
            ],
        )
    }

    #[test]
    fn failures_listed_passes_hidden() {
        let out = ConsoleReporter::new().without_colors().render(&sample());
        assert!(out.contains("abc123/index.html"));
        assert!(out.contains("✗ charset"));
        assert!(out.contains("! lists-introduced"));
        assert!(out.contains("(could not evaluate)"));
        assert!(!out.contains("lang-attribute"));
        assert!(out.contains("2/4 (50.00%)"));
    }

    #[test]
    fn verbose_shows_passing_rules() {
        let out = ConsoleReporter::new()
            .without_colors()
            .verbose()
            .render(&sample());
        assert!(out.contains("✓ lang-attribute"));
    }

    #[test]
    fn all_passing_says_so() {
        let report = ScoreReport::from_verdicts("r", None, vec![Verdict::pass("title", "ok")]);
        let out = ConsoleReporter::new().without_colors().render(&report);
        assert!(out.contains("All rules passed"));
        assert!(out.contains("<in-memory document>"));
        assert!(out.contains("[████████████████████]"));
    }

    #[test]
    fn quiet_line() {
        let line = ConsoleReporter::new().without_colors().render_quiet(&sample());
        assert_eq!(line, "abc123/index.html: 2/4 (50.00%) (F)");
    }

    #[test]
    fn unchecked_line() {
        let unchecked = UncheckedDocument {
            document: PathBuf::from("b/index.html"),
            error: "Failed to read document: b/index.html".to_string(),
        };
        let line = ConsoleReporter::new().without_colors().render_unchecked(&unchecked);
        assert_eq!(line, "Error: b/index.html: Failed to read document: b/index.html");
    }

    #[test]
    fn summary_block() {
        let stats = AggregateStats {
            documents_checked: 3,
            fully_passing: 1,
            average_percentage: 70.0,
            total_rules: 39,
            total_failures: 12,
        };
        let out = ConsoleReporter::new().without_colors().render_summary(&stats);
        assert!(out.contains("Documents checked: 3"));
        assert!(out.contains("Fully passing:     1/3"));
        assert!(out.contains("Average score:     70.00%"));
    }
}
