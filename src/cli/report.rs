//! Report formatting and printing utilities.
//!
//! Coverage tables, cargo-style issue diagnostics and JSON output.
//! Separate from core logic to allow locov to be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{CheckSummary, CommandResult, CommandSummary, InitSummary, KeysSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::CoverageResult;
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Rule printed above and below the coverage table.
const SEPARATOR_WIDTH: usize = 50;

/// Minimum display width of the locale file column.
const MIN_NAME_WIDTH: usize = 15;

// ============================================================
// Coverage Table
// ============================================================

/// Print the coverage table and missing-key details to stdout.
pub fn print_coverage(summary: &CheckSummary) {
    print_coverage_to(summary, &mut io::stdout().lock());
}

/// Print the coverage table to a custom writer.
///
/// One line per candidate in ranked order, bracketed by separator rules,
/// followed by the missing keys of every candidate at or above the detail
/// threshold that is still incomplete.
pub fn print_coverage_to<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let separator = "-".repeat(SEPARATOR_WIDTH);

    let _ = writeln!(
        writer,
        "Reference: {} ({})",
        summary.reference_file.bold(),
        plural(summary.reference_key_count, "key", "keys")
    );
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "Locale coverage:".bold());
    let _ = writeln!(writer, "{}", separator.dimmed());

    let width = name_column_width(&summary.results);
    for result in &summary.results {
        let _ = writeln!(
            writer,
            "{} {} (missing {})",
            pad_to_width(&result.id, width),
            colorize_percent(result, summary),
            plural(result.missing_count(), "key", "keys")
        );
    }

    let _ = writeln!(writer, "{}", separator.dimmed());

    let detailed: Vec<&CoverageResult> = summary.detailed_results().collect();
    if detailed.is_empty() {
        return;
    }

    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{}",
        format!(
            "Missing keys in locales with coverage >= {:.1}%:",
            summary.detail_threshold
        )
        .bold()
    );
    for result in detailed {
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "{} ({}):",
            result.id.bold(),
            result.missing_count()
        );
        for key in &result.missing {
            let _ = writeln!(writer, "  - {}", key);
        }
    }
}

fn colorize_percent(result: &CoverageResult, summary: &CheckSummary) -> ColoredString {
    let text = format!("{:.1}%", result.coverage_percent);
    if result.is_complete() {
        text.green()
    } else if summary
        .min_coverage
        .is_some_and(|min| result.coverage_percent < min)
    {
        text.red()
    } else if result.coverage_percent >= summary.detail_threshold {
        text.yellow()
    } else {
        text.red()
    }
}

fn name_column_width(results: &[CoverageResult]) -> usize {
    results
        .iter()
        .map(|r| UnicodeWidthStr::width(r.id.as_str()))
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH)
}

/// Pad `s` with spaces to `width` terminal columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(padding))
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

/// Print a warning that the reference locale has no keys.
pub fn print_empty_reference(reference_file: &str) {
    print_empty_reference_to(reference_file, &mut io::stderr().lock());
}

pub fn print_empty_reference_to<W: Write>(reference_file: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} reference {} has no keys, nothing to audit",
        "warning:".bold().yellow(),
        reference_file
    );
}

// ============================================================
// Issues
// ============================================================

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let _ = writeln!(writer);
    for issue in issues {
        print_issue(issue, writer);
    }

    print_summary(issues, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(locale_files: usize) {
    print_success_to(locale_files, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(locale_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "\n{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} - no issues found",
            plural(locale_files, "locale file", "locale files")
        )
        .green()
    );
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.file_path());

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "  {} {} {}",
            "=".blue(),
            "hint:".bold().cyan(),
            hint
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

// ============================================================
// JSON
// ============================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckJsonReport<'a> {
    reference: &'a str,
    reference_key_count: usize,
    detail_threshold: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_coverage: Option<f64>,
    results: &'a [CoverageResult],
    issues: &'a [Issue],
}

/// Render a check result as pretty-printed JSON.
pub fn check_json(summary: &CheckSummary, issues: &[Issue]) -> Result<String> {
    let report = CheckJsonReport {
        reference: &summary.reference_file,
        reference_key_count: summary.reference_key_count,
        detail_threshold: summary.detail_threshold,
        min_coverage: summary.min_coverage,
        results: &summary.results,
        issues,
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize report")
}

// ============================================================
// Command Output
// ============================================================

pub fn print(result: &CommandResult) -> Result<()> {
    match &result.summary {
        CommandSummary::Check(summary) => print_check(summary, result)?,
        CommandSummary::Keys(summary) => print_keys_to(summary, &mut io::stdout().lock()),
        CommandSummary::Init(summary) => print_init(summary),
    }
    Ok(())
}

fn print_check(summary: &CheckSummary, result: &CommandResult) -> Result<()> {
    if summary.is_empty_reference() {
        print_empty_reference(&summary.reference_file);
    }

    if summary.format == OutputFormat::Json {
        println!("{}", check_json(summary, &result.issues)?);
        return Ok(());
    }

    if !summary.is_empty_reference() {
        print_coverage(summary);
    }

    report(&result.issues);

    if result.issues.is_empty() && !summary.is_empty_reference() {
        print_success(result.locale_files_checked);
    }

    Ok(())
}

/// Print one leaf path per line, with its value when requested.
pub fn print_keys_to<W: Write>(summary: &KeysSummary, writer: &mut W) {
    for entry in &summary.entries {
        match &entry.value {
            Some(value) => {
                let _ = writeln!(writer, "{} = {}", entry.path, value.dimmed());
            }
            None => {
                let _ = writeln!(writer, "{}", entry.path);
            }
        }
    }
}

fn print_init(summary: &InitSummary) {
    if let Some(error) = &summary.error {
        eprintln!("Error: {}", error);
    } else if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
