use locov::mcp::{
    LocovMcpServer,
    types::{GetConfigParams, GetLocalesParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json, fixture_multi_locale};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::with_locales(vec![("en", "a: b\n")]).unwrap();
    let server = LocovMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["localesDir"], "./locales");
    assert_eq!(json_result["config"]["referenceLocale"], "en");
    assert_eq!(json_result["config"]["detailThreshold"], 50.0);
    assert!(json_result["config"]["minCoverage"].is_null());
    assert_eq!(json_result["fromFile"], false);
}

#[tokio::test]
async fn test_get_config_from_locovrc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "localesDir": "i18n",
            "referenceLocale": "zh",
            "minCoverage": 80
        }))
        .unwrap();

    let server = LocovMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["localesDir"], "i18n");
    assert_eq!(json_result["config"]["referenceLocale"], "zh");
    assert_eq!(json_result["config"]["minCoverage"], 80.0);
}

#[tokio::test]
async fn test_get_config_invalid_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "detailThreshold": 101 }))
        .unwrap();

    let server = LocovMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let err = server.get_config(params).await.unwrap_err();
    assert!(err.message.contains("Failed to load config"));
}

// ============================================================================
// get_locales tests
// ============================================================================

#[tokio::test]
async fn test_get_locales() {
    let fixture = fixture_multi_locale().unwrap();
    let server = LocovMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["referenceLocale"], "en");

    let locales = json_result["locales"].as_array().unwrap();
    let names: Vec<&str> = locales
        .iter()
        .map(|l| l["locale"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["en", "ja", "zh"]);

    assert_eq!(locales[0]["keyCount"], 3);
    assert_eq!(locales[0]["isReference"], true);
    assert_eq!(locales[1]["keyCount"], 1);
    assert_eq!(locales[1]["isReference"], false);
    assert_eq!(locales[2]["fileName"], "zh.yaml");

    let expected_path = fixture.root_path().join("locales").join("zh.yaml");
    assert_eq!(
        locales[2]["filePath"],
        expected_path.to_string_lossy().to_string()
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_get_locales_reports_unreadable_files() {
    let fixture = fixture_multi_locale().unwrap();
    let locales = fixture.root_path().join("locales");
    std::os::unix::fs::symlink(locales.join("gone.yaml"), locales.join("ko.yaml")).unwrap();

    let server = LocovMcpServer::new();
    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["locales"].as_array().unwrap().len(), 3);
    let errors = json_result["readErrors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0]["filePath"].as_str().unwrap().ends_with("ko.yaml"));
}

#[tokio::test]
async fn test_get_locales_lists_duplicate_references() {
    let fixture = fixture_multi_locale().unwrap();
    std::fs::write(fixture.root_path().join("locales/en.yml"), "extra: key\n").unwrap();

    let server = LocovMcpServer::new();
    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["duplicateReferences"], json!(["en.yml"]));
    assert_eq!(json_result["locales"].as_array().unwrap().len(), 3);
    assert_eq!(json_result["locales"][0]["fileName"], "en.yaml");
}

#[tokio::test]
async fn test_get_locales_missing_dir_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_config(&json!({ "localesDir": "nowhere" })).unwrap();

    let server = LocovMcpServer::new();
    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let err = server.get_locales(params).await.unwrap_err();
    assert!(err.message.contains("does not exist"));
}
