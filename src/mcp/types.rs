use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{config::Config, issues::ReadErrorIssue};

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root (where .locovrc.json is searched from)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetLocalesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanCoverageParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Reference locale (overrides config file)
    pub reference_locale: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanMissingKeysParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Locale code (e.g. "zh-CN") or file name (e.g. "zh-CN.yaml") to inspect
    pub locale: String,
    /// Reference locale (overrides config file)
    pub reference_locale: Option<String>,
    /// Maximum number of keys to return (default 50, max 200)
    pub limit: Option<u32>,
    /// Number of keys to skip
    pub offset: Option<u32>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub locales_dir: String,
    pub reference_locale: String,
    pub extensions: Vec<String>,
    pub ignores: Vec<String>,
    pub detail_threshold: f64,
    pub min_coverage: Option<f64>,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            locales_dir: c.locales_dir,
            reference_locale: c.reference_locale,
            extensions: c.extensions,
            ignores: c.ignores,
            detail_threshold: c.detail_threshold,
            min_coverage: c.min_coverage,
        }
    }
}

// ============================================================
// Locales Types (get_locales)
// ============================================================

/// Result of get_locales operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalesResult {
    pub locales_dir: String,
    pub reference_locale: String,
    pub locales: Vec<LocaleInfo>,
    pub read_errors: Vec<ReadErrorItem>,
    /// Further files for the reference locale that are not audited.
    pub duplicate_references: Vec<String>,
}

/// Information about a single locale
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub locale: String,
    pub file_name: String,
    pub file_path: String,
    pub key_count: usize,
    pub is_reference: bool,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadErrorItem {
    pub file_path: String,
    pub error: String,
}

impl From<&ReadErrorIssue> for ReadErrorItem {
    fn from(issue: &ReadErrorIssue) -> Self {
        Self {
            file_path: issue.file_path.clone(),
            error: issue.error.clone(),
        }
    }
}

// ============================================================
// Coverage Types (scan_coverage)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoverageScanResult {
    pub reference: String,
    pub reference_key_count: usize,
    /// Ranked by coverage, highest first
    pub locales: Vec<CoverageItem>,
    pub read_errors: Vec<ReadErrorItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoverageItem {
    pub file_name: String,
    pub coverage_percent: f64,
    pub missing_count: usize,
    /// Keys in the locale itself, including keys the reference lacks
    pub key_count: usize,
    /// True if the locale is below the configured minCoverage
    pub below_min_coverage: bool,
}

// ============================================================
// Missing Keys Types (scan_missing_keys)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissingKeysScanResult {
    pub file_name: String,
    pub coverage_percent: f64,
    pub total_count: usize,
    /// Missing leaf paths, in reference order
    pub items: Vec<String>,
    pub pagination: Pagination,
}

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
