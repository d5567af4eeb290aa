//! Completeness analysis of candidate documents against a reference.

use thiserror::Error;

use crate::core::data::{CoverageResult, LeafPaths};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    /// Coverage is undefined when the reference has no leaf paths.
    #[error("reference has no keys")]
    EmptyReference,
}

/// Compare every candidate against `reference` and rank the results.
///
/// Missing paths are `reference - candidate`; keys that only exist in a
/// candidate are never reported. Results are sorted by coverage, highest
/// first. The sort is stable, so candidates with equal coverage keep their
/// input order.
///
/// # Errors
///
/// Returns `AnalyzeError::EmptyReference` if `reference` is empty.
pub fn analyze<'a, I>(
    reference: &LeafPaths,
    candidates: I,
) -> Result<Vec<CoverageResult>, AnalyzeError>
where
    I: IntoIterator<Item = (&'a str, &'a LeafPaths)>,
{
    if reference.is_empty() {
        return Err(AnalyzeError::EmptyReference);
    }

    let mut results: Vec<CoverageResult> = candidates
        .into_iter()
        .map(|(id, paths)| {
            let missing: Vec<String> = reference.difference(paths).map(str::to_string).collect();
            CoverageResult {
                id: id.to_string(),
                total: paths.len(),
                coverage_percent: coverage_percent(reference.len(), missing.len()),
                missing,
            }
        })
        .collect();

    results.sort_by(|a, b| b.coverage_percent.total_cmp(&a.coverage_percent));

    Ok(results)
}

/// Percentage of `reference_len` paths that are present, to one decimal.
///
/// Partial coverage never rounds to the extremes: 100.0 means nothing is
/// missing and 0.0 means nothing is present, even for very large references.
pub fn coverage_percent(reference_len: usize, missing_len: usize) -> f64 {
    if reference_len == 0 {
        return 0.0;
    }
    let present = reference_len.saturating_sub(missing_len);
    if present == reference_len {
        return 100.0;
    }
    if present == 0 {
        return 0.0;
    }

    let exact = present as f64 / reference_len as f64 * 100.0;
    round_one_decimal(exact).clamp(0.1, 99.9)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
