use serde::Serialize;

/// Completeness of one candidate document against the reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageResult {
    /// Document identifier (the locale file name, e.g. `zh-CN.yaml`).
    pub id: String,
    /// Number of leaf paths in the candidate itself, extras included.
    pub total: usize,
    /// Coverage in percent, rounded to one decimal place.
    pub coverage_percent: f64,
    /// Reference paths absent from the candidate, in reference order.
    pub missing: Vec<String>,
}

impl CoverageResult {
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
