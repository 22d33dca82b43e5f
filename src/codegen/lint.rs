//! Advisory review of a model before generation.
//!
//! Lint never blocks generation: the generator trusts its input by design,
//! and the checks here exist so a frontend can surface likely mistakes
//! (duplicate field names, names that are not Python identifiers) before the
//! user downloads broken source. Duplicate names in particular remain
//! accepted behavior; they produce duplicate declarations downstream.

use crate::model::ModelSpec;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

static PYTHON_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex compiles"));

/// Keywords that shadow or break generated declarations when used as names.
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LintSeverity {
    /// Generation would produce unusable source.
    Error,
    /// Likely mistake, generation proceeds unchanged.
    Warning,
    /// Informational.
    Info,
}

/// One finding, optionally tied to a field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintIssue {
    pub severity: LintSeverity,
    pub message: String,
    pub field: Option<String>,
}

/// All findings for one model, with per-severity counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintReport {
    pub issues: Vec<LintIssue>,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
}

impl LintReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: String, field: Option<String>) {
        self.issues.push(LintIssue {
            severity: LintSeverity::Error,
            message,
            field,
        });
        self.error_count += 1;
    }

    pub fn add_warning(&mut self, message: String, field: Option<String>) {
        self.issues.push(LintIssue {
            severity: LintSeverity::Warning,
            message,
            field,
        });
        self.warning_count += 1;
    }

    pub fn add_info(&mut self, message: String, field: Option<String>) {
        self.issues.push(LintIssue {
            severity: LintSeverity::Info,
            message,
            field,
        });
        self.info_count += 1;
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

fn is_python_identifier(name: &str) -> bool {
    PYTHON_IDENTIFIER.is_match(name)
}

/// Reviews a model and returns the findings.
pub fn lint_model(model: &ModelSpec) -> LintReport {
    let mut report = LintReport::new();

    if !is_python_identifier(&model.name) {
        report.add_warning(
            format!("model name '{}' is not a valid Python identifier", model.name),
            None,
        );
    }

    if model.fields.is_empty() {
        report.add_info("model has no fields".to_string(), None);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for field in &model.fields {
        if !seen.insert(field.name.as_str()) {
            report.add_warning(
                format!(
                    "duplicate field name '{}' produces duplicate declarations",
                    field.name
                ),
                Some(field.name.clone()),
            );
        }

        if !is_python_identifier(&field.name) {
            report.add_warning(
                format!("field name '{}' is not a valid Python identifier", field.name),
                Some(field.name.clone()),
            );
        } else if PYTHON_KEYWORDS.contains(&field.name.as_str()) {
            report.add_warning(
                format!("field name '{}' is a Python keyword", field.name),
                Some(field.name.clone()),
            );
        }
    }

    report
}
