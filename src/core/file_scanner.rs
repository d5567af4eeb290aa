//! Discovery of locale files in the locales directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use crate::config::{CONFIG_FILE_NAME, Config};

/// A locale file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    /// Locale code taken from the file stem (`zh-CN` for `zh-CN.yaml`).
    pub locale: String,
    /// File name, used as the document identifier in reports.
    pub file_name: String,
    pub path: PathBuf,
}

/// Locale files split into the reference and the candidates to audit.
#[derive(Debug, Default)]
pub struct ScanLocalesResult {
    pub reference: Option<LocaleFile>,
    /// Sorted by file name so that ties in coverage rank reproducibly.
    pub candidates: Vec<LocaleFile>,
    /// Further files whose stem equals the reference locale (`en.yml` next
    /// to `en.yaml`). They are neither reference nor candidate.
    pub shadowed: Vec<LocaleFile>,
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.yaml" -> Some("en")
/// - "zh-CN.yml" -> Some("zh-CN")
/// - "/path/to/locales/ja.yaml" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// List locale files directly inside `locales_dir`.
///
/// Directories are skipped. Every other entry with an accepted extension is
/// returned, so a broken symlink still surfaces later as a read error. Names
/// matching an ignore pattern are skipped. The first file (by name) whose
/// locale equals `config.reference_locale` becomes the reference.
pub fn scan_locale_files(locales_dir: &Path, config: &Config) -> Result<ScanLocalesResult> {
    if !locales_dir.exists() {
        bail!(
            "Locales directory '{}' does not exist.\n\
             Hint: Check the 'localesDir' setting in {}.",
            locales_dir.display(),
            CONFIG_FILE_NAME
        );
    }

    if !locales_dir.is_dir() {
        bail!("'{}' is not a directory.", locales_dir.display());
    }

    let ignore_patterns = config.ignore_patterns();
    let mut files = Vec::new();

    let entries = fs::read_dir(locales_dir)
        .with_context(|| format!("Failed to read locales directory: {}", locales_dir.display()))?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()).map(String::from) else {
            log::warn!("Skipping file with non UTF-8 name: {}", path.display());
            continue;
        };

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !config.accepts_extension(extension) {
            continue;
        }

        if ignore_patterns.iter().any(|p| p.matches(&file_name)) {
            log::debug!("Ignoring {} (matches an ignore pattern)", file_name);
            continue;
        }

        if let Some(locale) = extract_locale(&path) {
            files.push(LocaleFile {
                locale,
                file_name,
                path,
            });
        }
    }

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    let mut result = ScanLocalesResult::default();
    for file in files {
        if file.locale != config.reference_locale {
            result.candidates.push(file);
        } else if result.reference.is_none() {
            result.reference = Some(file);
        } else {
            log::debug!(
                "Multiple reference files for locale '{}', ignoring {}",
                config.reference_locale,
                file.file_name
            );
            result.shadowed.push(file);
        }
    }

    Ok(result)
}
