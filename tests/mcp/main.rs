use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rmcp::model::CallToolResult;
use serde_json::{Value, json};
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with a locales/ directory
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join("locales"))?;
        fs::create_dir_all(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with locale files
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_locales(vec![
    ///     ("en", "key: value\n"),
    ///     ("zh", "key: 值\n"),
    /// ])?;
    /// ```
    pub fn with_locales(locales: Vec<(&str, &str)>) -> Result<Self> {
        let fixture = Self::new()?;
        for (locale, content) in locales {
            fixture.write_locale_file(locale, content)?;
        }
        Ok(fixture)
    }

    /// Write a locale file to locales/<locale>.yaml
    pub fn write_locale_file(&self, locale: &str, content: &str) -> Result<()> {
        let path = self
            .project_root
            .join("locales")
            .join(format!("{}.yaml", locale));
        fs::write(&path, content)
            .with_context(|| format!("Failed to write locale file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .locovrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".locovrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// Create a fixture with three locales at different coverage levels
pub fn fixture_multi_locale() -> Result<McpTestFixture> {
    McpTestFixture::with_locales(vec![
        (
            "en",
            "common:\n  submit: Submit\n  cancel: Cancel\nhome:\n  title: Welcome\n",
        ),
        (
            "zh",
            "common:\n  submit: 提交\n  cancel: 取消\nhome:\n  title: 欢迎\n",
        ),
        ("ja", "common:\n  submit: 送信\n"),
    ])
}

/// Create a fixture where one locale misses many keys
pub fn fixture_with_many_missing(count: usize) -> Result<McpTestFixture> {
    let reference: String = (0..count)
        .map(|i| format!("key{:03}: value {}\n", i, i))
        .collect();
    McpTestFixture::with_locales(vec![("en", reference.as_str()), ("de", "key000: Wert\n")])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the pagination block of a paginated scan result
pub fn assert_pagination(result: &Value, offset: usize, limit: usize, has_more: bool) {
    assert_eq!(
        result["pagination"],
        json!({ "offset": offset, "limit": limit, "hasMore": has_more }),
        "unexpected pagination in {result:#}"
    );
}

/// Parse the text payload of a successful tool call as JSON
pub fn extract_tool_result_json(result: &CallToolResult) -> Value {
    assert_ne!(result.is_error, Some(true), "tool call failed: {result:?}");

    let text = result
        .content
        .first()
        .and_then(|content| content.as_text())
        .map(|text| text.text.as_str())
        .unwrap_or_else(|| panic!("tool result carries no text content: {result:?}"));

    serde_json::from_str(text).unwrap_or_else(|e| panic!("tool result is not JSON ({e}): {text}"))
}
