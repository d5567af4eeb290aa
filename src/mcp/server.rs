use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    cli::args::CommonArgs,
    config::load_config,
    core::{AuditContext, context::resolve_locales_dir, load_locale, scan_locale_files},
};

use super::types::{
    ConfigDto, ConfigValues, CoverageItem, CoverageScanResult, GetConfigParams, GetLocalesParams,
    LocaleInfo, LocalesResult, MissingKeysScanResult, Pagination, ReadErrorItem,
    ScanCoverageParams, ScanMissingKeysParams,
};

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 200;

#[derive(Clone)]
pub struct LocovMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for LocovMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl LocovMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current locov configuration
    #[tool(description = "Get the current locov configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// Get available locale files and their key counts
    #[tool(description = "Get available locale files, their paths and leaf key counts.")]
    pub async fn get_locales(
        &self,
        params: Parameters<GetLocalesParams>,
    ) -> Result<CallToolResult, McpError> {
        let root = Path::new(&params.0.project_root_path);

        let config = load_config(root)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?
            .config;

        let locales_dir = resolve_locales_dir(root, &config.locales_dir);
        let scan = scan_locale_files(&locales_dir, &config)
            .map_err(|e| McpError::internal_error(format!("Scan failed: {}", e), None))?;

        let mut locales = Vec::new();
        let mut read_errors = Vec::new();
        for file in scan.reference.iter().chain(&scan.candidates) {
            match load_locale(file) {
                Ok(parsed) => locales.push(LocaleInfo {
                    is_reference: parsed.locale == config.reference_locale,
                    key_count: parsed.paths.len(),
                    locale: parsed.locale,
                    file_name: parsed.file_name,
                    file_path: parsed.file_path,
                }),
                Err(e) => read_errors.push(ReadErrorItem {
                    file_path: file.path.display().to_string(),
                    error: format!("{:#}", e),
                }),
            }
        }

        locales.sort_by(|a, b| a.locale.cmp(&b.locale));

        json_result(&LocalesResult {
            locales_dir: locales_dir.to_string_lossy().to_string(),
            reference_locale: config.reference_locale,
            locales,
            read_errors,
            duplicate_references: scan.shadowed.into_iter().map(|f| f.file_name).collect(),
        })
    }

    /// Rank locales by how completely they cover the reference locale
    #[tool(
        description = "Rank all locales by coverage of the reference locale. Returns percentages and missing-key counts without key lists. Use this first."
    )]
    pub async fn scan_coverage(
        &self,
        params: Parameters<ScanCoverageParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = audit_context(&params.project_root_path, params.reference_locale)?;

        let results = ctx
            .analyze()
            .map_err(|e| McpError::internal_error(format!("Scan failed: {}", e), None))?;

        let min_coverage = ctx.config.min_coverage;
        let locales = results
            .iter()
            .map(|r| CoverageItem {
                file_name: r.id.clone(),
                coverage_percent: r.coverage_percent,
                missing_count: r.missing_count(),
                key_count: r.total,
                below_min_coverage: min_coverage.is_some_and(|min| r.coverage_percent < min),
            })
            .collect();

        json_result(&CoverageScanResult {
            reference: ctx.reference.file_name.clone(),
            reference_key_count: ctx.reference.paths.len(),
            locales,
            read_errors: ctx.read_errors.iter().map(ReadErrorItem::from).collect(),
        })
    }

    /// List the reference keys one locale is missing
    #[tool(
        description = "List the keys of the reference locale that one locale is missing, in reference order. Returns paginated list."
    )]
    pub async fn scan_missing_keys(
        &self,
        params: Parameters<ScanMissingKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let ctx = audit_context(&params.project_root_path, params.reference_locale)?;

        let Some(candidate) = ctx.candidate(&params.locale) else {
            return Err(McpError::invalid_params(
                format!(
                    "Locale '{}' not found among the candidates in '{}'",
                    params.locale,
                    ctx.locales_dir.display()
                ),
                None,
            ));
        };

        let results = ctx
            .analyze()
            .map_err(|e| McpError::internal_error(format!("Scan failed: {}", e), None))?;
        let Some(result) = results.into_iter().find(|r| r.id == candidate.file_name) else {
            return Err(McpError::internal_error(
                format!("No coverage result for '{}'", candidate.file_name),
                None,
            ));
        };

        let total_count = result.missing_count();
        let items: Vec<String> = result.missing.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + items.len() < total_count;

        json_result(&MissingKeysScanResult {
            file_name: result.id,
            coverage_percent: result.coverage_percent,
            total_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }
}

fn audit_context(
    project_root_path: &str,
    reference_locale: Option<String>,
) -> Result<AuditContext, McpError> {
    let common = CommonArgs {
        root: Some(PathBuf::from(project_root_path)),
        reference: reference_locale,
        ..Default::default()
    };
    AuditContext::new(&common)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for LocovMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Locov MCP reports how completely each locale file covers the reference locale.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_locales - Get locale files and their key counts\n\
                 3. scan_coverage - Rank locales by coverage percentage\n\
                 4. scan_missing_keys - List the keys one locale is missing (paginated)\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_coverage to see which locales lag behind\n\
                 2. Use scan_missing_keys on a locale to get the keys to translate"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            log::info!("Starting locov MCP server");
            let service = LocovMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
