use anyhow::Result;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CheckSummary, CommandResult, CommandSummary},
};

use crate::{
    core::{AnalyzeError, AuditContext, CoverageResult},
    issues::{BelowMinCoverageIssue, Issue},
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let mut ctx = AuditContext::new(&args.common)?;

    if let Some(threshold) = args.threshold {
        ctx.config.detail_threshold = threshold;
    }
    if let Some(min_coverage) = args.min_coverage {
        ctx.config.min_coverage = Some(min_coverage);
    }
    ctx.config.validate()?;

    let results = match ctx.analyze() {
        Ok(results) => results,
        Err(AnalyzeError::EmptyReference) => {
            log::debug!("{} has no keys, skipping analysis", ctx.reference.file_name);
            Vec::new()
        }
    };

    let mut all_issues: Vec<Issue> = ctx
        .read_errors
        .iter()
        .cloned()
        .map(Issue::ReadError)
        .chain(
            ctx.duplicate_references
                .iter()
                .cloned()
                .map(Issue::DuplicateReference),
        )
        .collect();

    if let Some(min_coverage) = ctx.config.min_coverage {
        all_issues.extend(
            check_min_coverage(&ctx, &results, min_coverage)
                .into_iter()
                .map(Issue::MinCoverage),
        );
    }

    let summary = CheckSummary {
        reference_file: ctx.reference.file_name.clone(),
        reference_key_count: ctx.reference.paths.len(),
        results,
        detail_threshold: ctx.config.detail_threshold,
        min_coverage: ctx.config.min_coverage,
        format: args.format,
    };

    Ok(finish(
        CommandSummary::Check(summary),
        all_issues,
        ctx.locale_files_checked(),
    ))
}

fn check_min_coverage(
    ctx: &AuditContext,
    results: &[CoverageResult],
    min_coverage: f64,
) -> Vec<BelowMinCoverageIssue> {
    results
        .iter()
        .filter(|r| r.coverage_percent < min_coverage)
        .map(|r| BelowMinCoverageIssue {
            file_path: ctx
                .candidate(&r.id)
                .map(|c| c.file_path.clone())
                .unwrap_or_else(|| r.id.clone()),
            file_name: r.id.clone(),
            coverage_percent: r.coverage_percent,
            min_coverage,
            missing_count: r.missing_count(),
        })
        .collect()
}
