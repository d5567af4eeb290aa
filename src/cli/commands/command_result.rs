use crate::{
    cli::args::OutputFormat,
    core::CoverageResult,
    issues::Issue,
};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Keys(KeysSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    /// File name of the reference locale.
    pub reference_file: String,
    pub reference_key_count: usize,
    /// Ranked by coverage, highest first. Empty when the reference has no keys.
    pub results: Vec<CoverageResult>,
    /// Missing keys are listed for results at or above this coverage.
    pub detail_threshold: f64,
    pub min_coverage: Option<f64>,
    pub format: OutputFormat,
}

impl CheckSummary {
    /// Coverage is undefined without reference keys; nothing was audited.
    pub fn is_empty_reference(&self) -> bool {
        self.reference_key_count == 0
    }

    /// Results whose missing keys should be listed.
    pub fn detailed_results(&self) -> impl Iterator<Item = &CoverageResult> {
        self.results
            .iter()
            .filter(|r| r.coverage_percent >= self.detail_threshold && !r.is_complete())
    }
}

#[derive(Debug)]
pub struct KeyEntry {
    pub path: String,
    /// Rendered leaf value, present when values were requested.
    pub value: Option<String>,
}

#[derive(Debug)]
pub struct KeysSummary {
    pub file_path: String,
    pub entries: Vec<KeyEntry>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running locov commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of locale files that were audited, reference included.
    pub locale_files_checked: usize,
}
