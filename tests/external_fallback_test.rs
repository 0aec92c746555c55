//! External generator contract and fallback tests
//!
//! The remote endpoint is mocked; every failure mode must resolve to the
//! rule path without surfacing an error to the caller.

use datalex::config::{ApiKeyValue, DatalexConfig};
use datalex::dictionary::Dictionary;
use datalex::domain::{ColumnMetadata, TableContext, RULES_MODEL_VERSION};
use datalex::generator::GenerationEngine;
use secrecy::Secret;
use serde_json::json;
use std::sync::Arc;

fn external_config(endpoint: &str) -> DatalexConfig {
    let mut config = DatalexConfig::default();
    config.external.enabled = true;
    config.external.endpoint = endpoint.to_string();
    config.external.model = "test-model-1".to_string();
    config.external.api_key = Some(Secret::new(ApiKeyValue::from("test-key")));
    config.external.timeout_seconds = 5;
    config
}

fn ssn_table() -> TableContext {
    TableContext::new("customers")
        .with_column(ColumnMetadata::new("ssn").with_sample_values(["123-45-6789"]))
}

fn chat_completion_body(content: serde_json::Value) -> String {
    json!({
        "choices": [
            {"message": {"role": "assistant", "content": content.to_string()}}
        ]
    })
    .to_string()
}

#[tokio::test]
async fn provider_error_falls_back_to_rules() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let config = external_config(&server.url());
    let engine =
        GenerationEngine::from_config(&config, Arc::new(Dictionary::builtin().unwrap())).unwrap();

    let payload = engine.generate_table(&ssn_table()).await.unwrap();
    assert_eq!(payload.model_version, RULES_MODEL_VERSION);
    mock.assert_async().await;
}

#[tokio::test]
async fn malformed_response_falls_back_to_rules() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_completion_body(json!({"unexpected": "shape"})))
        .create_async()
        .await;

    let config = external_config(&server.url());
    let engine =
        GenerationEngine::from_config(&config, Arc::new(Dictionary::builtin().unwrap())).unwrap();

    let payload = engine.generate_table(&ssn_table()).await.unwrap();
    assert_eq!(payload.model_version, RULES_MODEL_VERSION);
}

#[tokio::test]
async fn successful_remote_call_keeps_local_pii_findings() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_completion_body(json!({
            "table_description": "Customer master data for retail banking.",
            "columns": [
                {"column_name": "ssn", "description": "Customer tax identifier."}
            ]
        })))
        .create_async()
        .await;

    let config = external_config(&server.url());
    let engine =
        GenerationEngine::from_config(&config, Arc::new(Dictionary::builtin().unwrap())).unwrap();

    let payload = engine.generate_table(&ssn_table()).await.unwrap();

    // Remote text, remote model tag
    assert_eq!(payload.model_version, "test-model-1");
    assert!(payload.columns[0]
        .description
        .starts_with("Customer tax identifier."));

    // Sensitivity analysis stayed local
    assert!(!payload.columns[0].pii_findings.is_empty());
    assert!(payload.columns[0].needs_review);
    assert!(payload.columns[0].description.contains("sensitive"));
}

#[tokio::test]
async fn missing_column_in_remote_response_falls_back() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_completion_body(json!({
            "table_description": "Customer master data.",
            "columns": []
        })))
        .create_async()
        .await;

    let config = external_config(&server.url());
    let engine =
        GenerationEngine::from_config(&config, Arc::new(Dictionary::builtin().unwrap())).unwrap();

    let payload = engine.generate_table(&ssn_table()).await.unwrap();
    assert_eq!(payload.model_version, RULES_MODEL_VERSION);
}

#[tokio::test]
async fn batch_rows_fall_back_on_length_mismatch() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_completion_body(json!({
            "descriptions": ["only one description"]
        })))
        .create_async()
        .await;

    let config = external_config(&server.url());
    let engine =
        GenerationEngine::from_config(&config, Arc::new(Dictionary::builtin().unwrap())).unwrap();

    let rows = vec![
        datalex::generator::RowSpec {
            table_name: "customer_account".to_string(),
            column_name: "acct_open_dt".to_string(),
        },
        datalex::generator::RowSpec {
            table_name: "customer_account".to_string(),
            column_name: "acct_bal_amt".to_string(),
        },
    ];

    let descriptions = engine.describe_rows(&rows).await.unwrap();
    assert_eq!(descriptions.len(), 2);
    assert!(descriptions[0].contains("Account open date"));
}

#[tokio::test]
async fn absent_credentials_select_rule_path_without_error() {
    let config = DatalexConfig::default();
    assert!(!config.external.is_available());

    let engine =
        GenerationEngine::from_config(&config, Arc::new(Dictionary::builtin().unwrap())).unwrap();
    let payload = engine.generate_table(&ssn_table()).await.unwrap();
    assert_eq!(payload.model_version, RULES_MODEL_VERSION);
}
