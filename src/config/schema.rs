//! Config schema and deserialization

use crate::rubric::DEFAULT_RUBRIC;
use crate::rules::RuleDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_DOCUMENT_NAME: &str = "index.html";

/// Per-rule switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleToggle {
    On,
    /// Remove the rule from the rubric before the run
    Off,
}

/// Root config structure for .rubricrc.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Built-in rubric to grade with. Default: mips-homework
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric: Option<String>,

    /// Minimum percentage a document must reach (exit 1 if below). Default: 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,

    /// Per-rule switches. Key is the rule name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub rules: HashMap<String, RuleToggle>,

    /// Extra rules appended to the rubric, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_rules: Vec<RuleDefinition>,

    /// File name to look for when checking a directory of submissions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,

    /// Glob patterns for submissions to skip in directory mode
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<String>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_threshold: Option<f64>, cli_rubric: Option<&str>) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        if let Some(rubric) = cli_rubric {
            self.rubric = Some(rubric.to_string());
        }
        self
    }

    pub fn rubric_name(&self) -> &str {
        self.rubric.as_deref().unwrap_or(DEFAULT_RUBRIC)
    }

    /// Threshold in percent; every rule must pass unless configured otherwise
    pub fn threshold(&self) -> f64 {
        self.threshold.unwrap_or(100.0)
    }

    pub fn document_name(&self) -> &str {
        self.document_name.as_deref().unwrap_or(DEFAULT_DOCUMENT_NAME)
    }

    /// Rules are on unless switched off
    pub fn is_rule_enabled(&self, rule: &str) -> bool {
        self.rules.get(rule) != Some(&RuleToggle::Off)
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        // Base values are overridden by this config's values
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        if self.rubric.is_none() {
            self.rubric = base.rubric;
        }
        if self.document_name.is_none() {
            self.document_name = base.document_name;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }

        for (rule, toggle) in base.rules {
            self.rules.entry(rule).or_insert(toggle);
        }

        // Base custom rules come first; a rule redefined here replaces the base one
        let mut custom = base.custom_rules;
        custom.retain(|def| !self.custom_rules.iter().any(|own| own.name() == def.name()));
        custom.append(&mut self.custom_rules);
        self.custom_rules = custom;

        let mut all_ignores = base.ignore;
        for pattern in self.ignore.drain(..) {
            if !all_ignores.contains(&pattern) {
                all_ignores.push(pattern);
            }
        }
        self.ignore = all_ignores;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.rubric_name(), "mips-homework");
        assert_eq!(config.threshold(), 100.0);
        assert_eq!(config.document_name(), "index.html");
        assert!(config.is_rule_enabled("anything"));
    }

    #[test]
    fn parses_camel_case_fields() {
        let config: Config = serde_json::from_str(
            r#"{
                "rubric": "mips-fixture",
                "threshold": 80,
                "documentName": "mips.html",
                "rules": { "title": "off", "charset": "on" },
                "ignore": ["**/drafts/**"]
            }"#,
        )
        .unwrap();
        assert_eq!(config.rubric_name(), "mips-fixture");
        assert_eq!(config.threshold(), 80.0);
        assert_eq!(config.document_name(), "mips.html");
        assert!(!config.is_rule_enabled("title"));
        assert!(config.is_rule_enabled("charset"));
    }

    #[test]
    fn cli_overrides_config() {
        let config = Config {
            threshold: Some(50.0),
            rubric: Some("mips-fixture".to_string()),
            ..Config::default()
        }
        .merge_with_cli(Some(90.0), Some("mips-homework"));
        assert_eq!(config.threshold(), 90.0);
        assert_eq!(config.rubric_name(), "mips-homework");
    }

    #[test]
    fn merge_keeps_own_values_first() {
        let mut child: Config = serde_json::from_str(
            r#"{ "threshold": 90, "rules": { "title": "on" },
                 "customRules": [{ "kind": "title", "name": "t", "equals": "MIPS" }] }"#,
        )
        .unwrap();
        let base: Config = serde_json::from_str(
            r#"{ "threshold": 60, "rubric": "mips-fixture",
                 "rules": { "title": "off", "charset": "off" },
                 "customRules": [
                     { "kind": "title", "name": "t" },
                     { "kind": "count", "name": "h1", "tag": "h1", "expected": 1 }
                 ],
                 "ignore": ["**/old/**"] }"#,
        )
        .unwrap();
        child.merge_from(base);
        assert_eq!(child.threshold(), 90.0);
        assert_eq!(child.rubric_name(), "mips-fixture");
        assert!(child.is_rule_enabled("title"));
        assert!(!child.is_rule_enabled("charset"));
        let names: Vec<&str> = child.custom_rules.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["h1", "t"]);
        assert_eq!(child.ignore, vec!["**/old/**".to_string()]);
    }
}
