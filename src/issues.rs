//! Issue types for coverage audit results.
//!
//! Coverage numbers themselves are not issues; they are always reported.
//! Issues are the findings that affect the exit status or deserve a
//! diagnostic of their own: a locale below the configured minimum coverage,
//! a locale file that could not be read, or a second file for the reference
//! locale that was left out.

use enum_dispatch::enum_dispatch;
use serde::Serialize;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MinCoverage,
    ReadError,
    DuplicateReference,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MinCoverage => write!(f, "min-coverage"),
            Rule::ReadError => write!(f, "read-error"),
            Rule::DuplicateReference => write!(f, "duplicate-reference"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A candidate locale whose coverage is below `minCoverage`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BelowMinCoverageIssue {
    pub file_path: String,
    /// Locale file name, e.g. `zh.yaml`.
    pub file_name: String,
    pub coverage_percent: f64,
    pub min_coverage: f64,
    pub missing_count: usize,
}

impl BelowMinCoverageIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MinCoverage
    }
}

/// A candidate locale file that could not be read.
///
/// The run continues without it; the remaining locales are still audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ReadErrorIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ReadError
    }
}

/// A further file for the reference locale (`en.yml` next to `en.yaml`).
///
/// Only the first file by name is the reference; this one is not audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateReferenceIssue {
    pub file_path: String,
    pub file_name: String,
    /// File name of the reference actually used.
    pub reference_file: String,
}

impl DuplicateReferenceIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::DuplicateReference
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A finding produced by an audit run.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum Issue {
    MinCoverage(BelowMinCoverageIssue),
    ReadError(ReadErrorIssue),
    DuplicateReference(DuplicateReferenceIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MinCoverage(_) => BelowMinCoverageIssue::severity(),
            Issue::ReadError(_) => ReadErrorIssue::severity(),
            Issue::DuplicateReference(_) => DuplicateReferenceIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MinCoverage(_) => BelowMinCoverageIssue::rule(),
            Issue::ReadError(_) => ReadErrorIssue::rule(),
            Issue::DuplicateReference(_) => DuplicateReferenceIssue::rule(),
        }
    }
}

/// Sort issues for stable output: errors first, then by file path.
pub fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by(|a, b| {
        a.severity()
            .cmp(&b.severity())
            .then_with(|| a.file_path().cmp(b.file_path()))
            .then_with(|| a.rule().cmp(&b.rule()))
    });
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
///
/// Implemented by every issue type so the report functions can treat them
/// uniformly. Uses `enum_dispatch` for zero-cost dispatch on `Issue`.
#[enum_dispatch]
pub trait Report {
    /// File the issue refers to.
    fn file_path(&self) -> &str;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }
}

impl Report for BelowMinCoverageIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.file_name.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "coverage {:.1}% is below the minimum of {:.1}% ({} missing {})",
            self.coverage_percent,
            self.min_coverage,
            self.missing_count,
            if self.missing_count == 1 { "key" } else { "keys" }
        ))
    }
}

impl Report for ReadErrorIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("the file was skipped; other locales were still checked")
    }
}

impl Report for DuplicateReferenceIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.file_name.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "the reference locale is read from {}",
            self.reference_file
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("merge its keys into the reference file, then remove it")
    }
}
