use super::MockModelClient;
use bedrock_adapter::{adapter::RequestAdapter, bedrock::DEFAULT_MODEL_ID};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Adapter over a clone of `mock`, so the caller can still inspect requests.
pub fn create_test_adapter(mock: &MockModelClient) -> RequestAdapter {
    RequestAdapter::new(Arc::new(mock.clone()), DEFAULT_MODEL_ID)
}

/// A typical Titan text response.
pub fn titan_response(output_text: &str, completion_reason: &str) -> Value {
    json!({
        "inputTextTokenCount": 5,
        "results": [{
            "tokenCount": 12,
            "outputText": output_text,
            "completionReason": completion_reason
        }]
    })
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content)
        .await
        .expect("Failed to write config file");
    config_path.to_string_lossy().to_string()
}

pub const SAMPLE_CONFIG_YAML: &str = r#"
model:
  model_id: "amazon.titan-text-express-v1"
  region: "eu-west-1"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"
"#;
