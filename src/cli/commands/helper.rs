use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Severity, sort_issues};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    locale_files_checked: usize,
) -> CommandResult {
    sort_issues(&mut issues);

    let mut error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    if let CommandSummary::Init(ref summary) = summary
        && summary.error.is_some()
    {
        error_count += 1;
    }

    CommandResult {
        summary,
        error_count,
        warning_count,
        issues,
        locale_files_checked,
    }
}
