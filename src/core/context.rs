use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        analyze::{AnalyzeError, analyze},
        data::{CoverageResult, LeafPaths},
        file_scanner::{LocaleFile, scan_locale_files},
        flatten::flatten,
        parsers::parse,
    },
    issues::{DuplicateReferenceIssue, ReadErrorIssue},
};

/// A locale document that was read, parsed and flattened.
#[derive(Debug, Clone)]
pub struct ParsedLocale {
    pub locale: String,
    /// File name, used as the document identifier.
    pub file_name: String,
    /// Display path of the file.
    pub file_path: String,
    pub paths: LeafPaths,
}

/// Everything one audit run needs: configuration plus the flattened
/// reference and candidate documents.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--reference de`)
/// 2. `.locovrc.json` config file
/// 3. Built-in defaults
pub struct AuditContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Resolved locales directory.
    pub locales_dir: PathBuf,

    pub reference: ParsedLocale,

    /// Candidates that were read successfully, sorted by file name.
    pub candidates: Vec<ParsedLocale>,

    /// Candidates that could not be read.
    pub read_errors: Vec<ReadErrorIssue>,

    /// Extra files for the reference locale that were not audited.
    pub duplicate_references: Vec<DuplicateReferenceIssue>,
}

impl AuditContext {
    /// Create a new `AuditContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - Locales directory doesn't exist
    /// - No reference file is found, or it cannot be read
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if !config_result.from_file {
            log::info!("No .locovrc.json found, using default configuration");
        }

        let mut config = config_result.config;

        if let Some(ref reference) = common_args.reference {
            config.reference_locale = reference.clone();
        }
        if let Some(ref locales_dir) = common_args.locales_dir {
            config.locales_dir = locales_dir.to_string_lossy().to_string();
        }
        config.validate()?;

        Self::from_config(config, &root_dir)
    }

    /// Build a context from an already merged configuration.
    pub fn from_config(config: Config, root_dir: &Path) -> Result<Self> {
        let locales_dir = resolve_locales_dir(root_dir, &config.locales_dir);
        let scan = scan_locale_files(&locales_dir, &config)?;

        let reference_file = scan.reference.ok_or_else(|| {
            anyhow!(
                "Reference locale '{}' not found in '{}'",
                config.reference_locale,
                locales_dir.display()
            )
        })?;

        let (reference, loaded) = rayon::join(
            || load_locale(&reference_file),
            || {
                scan.candidates
                    .par_iter()
                    .map(|file| (file, load_locale(file)))
                    .collect::<Vec<_>>()
            },
        );
        let reference = reference?;
        log::debug!(
            "Reference {} has {} keys",
            reference.file_name,
            reference.paths.len()
        );

        let mut candidates = Vec::with_capacity(loaded.len());
        let mut read_errors = Vec::new();
        for (file, result) in loaded {
            match result {
                Ok(parsed) => {
                    log::debug!("{} has {} keys", parsed.file_name, parsed.paths.len());
                    candidates.push(parsed);
                }
                Err(e) => {
                    log::debug!("Failed to load {}: {:#}", file.path.display(), e);
                    read_errors.push(ReadErrorIssue {
                        file_path: file.path.display().to_string(),
                        error: format!("{:#}", e),
                    });
                }
            }
        }

        let duplicate_references = scan
            .shadowed
            .iter()
            .map(|file| DuplicateReferenceIssue {
                file_path: file.path.display().to_string(),
                file_name: file.file_name.clone(),
                reference_file: reference.file_name.clone(),
            })
            .collect();

        Ok(Self {
            config,
            locales_dir,
            reference,
            candidates,
            read_errors,
            duplicate_references,
        })
    }

    /// Rank all candidates by coverage of the reference.
    pub fn analyze(&self) -> Result<Vec<CoverageResult>, AnalyzeError> {
        analyze(
            &self.reference.paths,
            self.candidates
                .iter()
                .map(|c| (c.file_name.as_str(), &c.paths)),
        )
    }

    /// Find a candidate by locale code or file name.
    pub fn candidate(&self, name: &str) -> Option<&ParsedLocale> {
        self.candidates
            .iter()
            .find(|c| c.locale == name || c.file_name == name)
    }

    /// Number of locale files that were audited, reference included.
    pub fn locale_files_checked(&self) -> usize {
        1 + self.candidates.len()
    }
}

/// Read, parse and flatten one locale file.
///
/// Invalid UTF-8 does not reject the file: bad bytes become U+FFFD and the
/// keys around them are still audited.
pub fn load_locale(file: &LocaleFile) -> Result<ParsedLocale> {
    let bytes =
        fs::read(&file.path).with_context(|| format!("Failed to read {}", file.path.display()))?;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            log::warn!(
                "{} is not valid UTF-8, invalid bytes were replaced",
                file.path.display()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    let paths = flatten(&parse(&content));

    Ok(ParsedLocale {
        locale: file.locale.clone(),
        file_name: file.file_name.clone(),
        file_path: file.path.display().to_string(),
        paths,
    })
}

/// Resolve `locales_dir` from the config against the project root.
pub(crate) fn resolve_locales_dir(root_dir: &Path, locales_dir: &str) -> PathBuf {
    let p = Path::new(locales_dir);
    if p.is_absolute() {
        return p.to_path_buf();
    }

    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
