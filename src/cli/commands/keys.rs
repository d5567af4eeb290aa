use std::fs;

use anyhow::{Context, Result};

use super::super::args::KeysCommand;
use super::{CommandResult, CommandSummary, KeyEntry, KeysSummary, helper::finish};
use crate::core::{LeafPaths, flatten_entries, parse};

/// Print the leaf paths of a single locale file, in document order.
pub fn keys(cmd: KeysCommand) -> Result<CommandResult> {
    let content = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read {}", cmd.file.display()))?;
    let root = parse(&content);

    // A dotted key can collide with a nested one; list each path once.
    let mut seen = LeafPaths::new();
    let entries: Vec<KeyEntry> = flatten_entries(&root)
        .into_iter()
        .filter(|(path, _)| seen.insert(path.as_str()))
        .map(|(path, value)| KeyEntry {
            path,
            value: cmd.values.then(|| value.to_string()),
        })
        .collect();

    log::debug!("{} has {} keys", cmd.file.display(), entries.len());

    Ok(finish(
        CommandSummary::Keys(KeysSummary {
            file_path: cmd.file.display().to_string(),
            entries,
        }),
        Vec::new(),
        1,
    ))
}
