use locov::mcp::{
    LocovMcpServer,
    types::{ScanCoverageParams, ScanMissingKeysParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{
    McpTestFixture, assert_pagination, extract_tool_result_json, fixture_multi_locale,
    fixture_with_many_missing,
};

fn missing_keys_params(
    fixture: &McpTestFixture,
    locale: &str,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Parameters<ScanMissingKeysParams> {
    Parameters(ScanMissingKeysParams {
        project_root_path: fixture.root(),
        locale: locale.to_string(),
        reference_locale: None,
        limit,
        offset,
    })
}

// ============================================================================
// scan_coverage tests
// ============================================================================

#[tokio::test]
async fn test_scan_coverage_ranks_locales() {
    let fixture = fixture_multi_locale().unwrap();
    let server = LocovMcpServer::new();

    let params = Parameters(ScanCoverageParams {
        project_root_path: fixture.root(),
        reference_locale: None,
    });

    let result = server.scan_coverage(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["reference"], "en.yaml");
    assert_eq!(json_result["referenceKeyCount"], 3);

    let locales = json_result["locales"].as_array().unwrap();
    assert_eq!(locales.len(), 2);

    assert_eq!(locales[0]["fileName"], "zh.yaml");
    assert_eq!(locales[0]["coveragePercent"], 100.0);
    assert_eq!(locales[0]["missingCount"], 0);

    assert_eq!(locales[1]["fileName"], "ja.yaml");
    assert_eq!(locales[1]["coveragePercent"], 33.3);
    assert_eq!(locales[1]["missingCount"], 2);
    assert_eq!(locales[1]["keyCount"], 1);
    assert_eq!(locales[1]["belowMinCoverage"], false);
}

#[tokio::test]
async fn test_scan_coverage_flags_below_min_coverage() {
    let fixture = fixture_multi_locale().unwrap();
    fixture.write_config(&json!({ "minCoverage": 50 })).unwrap();
    let server = LocovMcpServer::new();

    let params = Parameters(ScanCoverageParams {
        project_root_path: fixture.root(),
        reference_locale: None,
    });

    let result = server.scan_coverage(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["locales"][0]["belowMinCoverage"], false);
    assert_eq!(json_result["locales"][1]["belowMinCoverage"], true);
}

#[tokio::test]
async fn test_scan_coverage_with_reference_override() {
    let fixture = fixture_multi_locale().unwrap();
    let server = LocovMcpServer::new();

    let params = Parameters(ScanCoverageParams {
        project_root_path: fixture.root(),
        reference_locale: Some("ja".to_string()),
    });

    let result = server.scan_coverage(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["reference"], "ja.yaml");
    assert_eq!(json_result["referenceKeyCount"], 1);
    // Both remaining locales contain common.submit.
    assert_eq!(json_result["locales"][0]["coveragePercent"], 100.0);
    assert_eq!(json_result["locales"][1]["coveragePercent"], 100.0);
    assert_eq!(json_result["locales"][0]["fileName"], "en.yaml");
}

#[tokio::test]
async fn test_scan_coverage_empty_reference_is_error() {
    let fixture =
        McpTestFixture::with_locales(vec![("en", "# empty\n"), ("fr", "a: b\n")]).unwrap();
    let server = LocovMcpServer::new();

    let params = Parameters(ScanCoverageParams {
        project_root_path: fixture.root(),
        reference_locale: None,
    });

    let err = server.scan_coverage(params).await.unwrap_err();
    assert!(err.message.contains("reference has no keys"));
}

#[tokio::test]
async fn test_scan_coverage_missing_reference_is_error() {
    let fixture = McpTestFixture::with_locales(vec![("fr", "a: b\n")]).unwrap();
    let server = LocovMcpServer::new();

    let params = Parameters(ScanCoverageParams {
        project_root_path: fixture.root(),
        reference_locale: None,
    });

    let err = server.scan_coverage(params).await.unwrap_err();
    assert!(err.message.contains("Reference locale 'en' not found"));
}

// ============================================================================
// scan_missing_keys tests
// ============================================================================

#[tokio::test]
async fn test_scan_missing_keys_in_reference_order() {
    let fixture = fixture_multi_locale().unwrap();
    let server = LocovMcpServer::new();

    let result = server
        .scan_missing_keys(missing_keys_params(&fixture, "ja", None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fileName"], "ja.yaml");
    assert_eq!(json_result["coveragePercent"], 33.3);
    assert_eq!(json_result["totalCount"], 2);
    assert_eq!(json_result["items"], json!(["common.cancel", "home.title"]));
    assert_pagination(&json_result, 0, 50, false);
}

#[tokio::test]
async fn test_scan_missing_keys_by_file_name() {
    let fixture = fixture_multi_locale().unwrap();
    let server = LocovMcpServer::new();

    let result = server
        .scan_missing_keys(missing_keys_params(&fixture, "zh.yaml", None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
    assert_eq!(json_result["items"], json!([]));
}

#[tokio::test]
async fn test_scan_missing_keys_pagination() {
    let fixture = fixture_with_many_missing(30).unwrap();
    let server = LocovMcpServer::new();

    let result = server
        .scan_missing_keys(missing_keys_params(&fixture, "de", Some(10), Some(0)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 29);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 10);
    assert_eq!(json_result["items"][0], "key001");
    assert_pagination(&json_result, 0, 10, true);

    let result = server
        .scan_missing_keys(missing_keys_params(&fixture, "de", Some(10), Some(20)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["items"].as_array().unwrap().len(), 9);
    assert_eq!(json_result["items"][8], "key029");
    assert_pagination(&json_result, 20, 10, false);
}

#[tokio::test]
async fn test_scan_missing_keys_limit_is_capped() {
    let fixture = fixture_with_many_missing(5).unwrap();
    let server = LocovMcpServer::new();

    let result = server
        .scan_missing_keys(missing_keys_params(&fixture, "de", Some(10_000), None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_pagination(&json_result, 0, 200, false);
}

#[tokio::test]
async fn test_scan_missing_keys_unknown_locale() {
    let fixture = fixture_multi_locale().unwrap();
    let server = LocovMcpServer::new();

    let err = server
        .scan_missing_keys(missing_keys_params(&fixture, "ko", None, None))
        .await
        .unwrap_err();

    assert!(err.message.contains("Locale 'ko' not found"));
}
