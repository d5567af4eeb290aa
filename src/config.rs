use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".locovrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_dir", alias = "localesRoot")]
    pub locales_dir: String,
    #[serde(default = "default_reference_locale")]
    pub reference_locale: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Glob patterns matched against locale file names.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Missing keys are listed for locales at or above this coverage.
    #[serde(default = "default_detail_threshold")]
    pub detail_threshold: f64,
    /// Locales below this coverage are reported as errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_coverage: Option<f64>,
}

fn default_locales_dir() -> String {
    "./locales".to_string()
}

fn default_reference_locale() -> String {
    "en".to_string()
}

fn default_extensions() -> Vec<String> {
    ["yaml", "yml"].map(String::from).to_vec()
}

fn default_detail_threshold() -> f64 {
    50.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_dir: default_locales_dir(),
            reference_locale: default_reference_locale(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            detail_threshold: default_detail_threshold(),
            min_coverage: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any ignore pattern is not a valid glob, or a
    /// threshold lies outside `0..=100`.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.reference_locale.trim().is_empty() {
            bail!("'referenceLocale' must not be empty");
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        check_percentage("detailThreshold", self.detail_threshold)?;
        if let Some(min_coverage) = self.min_coverage {
            check_percentage("minCoverage", min_coverage)?;
        }

        Ok(())
    }

    /// Compiled ignore patterns. Invalid patterns are dropped; `validate`
    /// reports them.
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.ignores
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }

    /// Whether `extension` (without the dot) is a locale file extension.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }
}

fn check_percentage(name: &str, value: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&value) {
        bail!("'{}' must be between 0 and 100, got {}", name, value);
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            log::debug!("Loaded configuration from {}", path.display());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
