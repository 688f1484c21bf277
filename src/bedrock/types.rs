use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_MODEL_ID: &str = "amazon.titan-text-premier-v1:0";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const CONTENT_FILTERED: &str = "CONTENT_FILTERED";

pub const MAX_TOKEN_COUNT: u32 = 3072;
pub const TEMPERATURE: f32 = 0.7;
pub const TOP_P: f32 = 0.9;

/// A single `InvokeModel` call as handed to a [`super::ModelClient`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeModelRequest {
    pub model_id: String,
    pub content_type: String,
    pub accept: String,
    /// Serialized [`TitanRequest`].
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanRequest {
    pub input_text: String,
    pub text_generation_config: TextGenerationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextGenerationConfig {
    pub max_token_count: u32,
    pub stop_sequences: Vec<String>,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for TextGenerationConfig {
    fn default() -> Self {
        Self {
            max_token_count: MAX_TOKEN_COUNT,
            stop_sequences: Vec::new(),
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }
}

impl TitanRequest {
    pub fn new(input_text: impl Into<String>) -> Self {
        Self {
            input_text: input_text.into(),
            text_generation_config: TextGenerationConfig::default(),
        }
    }
}

impl InvokeModelRequest {
    pub fn titan(model_id: impl Into<String>, input_text: &str) -> crate::Result<Self> {
        Ok(Self {
            model_id: model_id.into(),
            content_type: JSON_CONTENT_TYPE.to_string(),
            accept: JSON_CONTENT_TYPE.to_string(),
            body: serde_json::to_string(&TitanRequest::new(input_text))?,
        })
    }
}

/// `results[0].completionReason` of a parsed model response, if present.
pub fn completion_reason(response: &Value) -> Option<&str> {
    response
        .get("results")?
        .get(0)?
        .get("completionReason")?
        .as_str()
}

pub fn is_content_filtered(response: &Value) -> bool {
    completion_reason(response) == Some(CONTENT_FILTERED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_titan_request_wire_shape() {
        let request = InvokeModelRequest::titan(DEFAULT_MODEL_ID, "What is Rust?").unwrap();

        assert_eq!(request.model_id, "amazon.titan-text-premier-v1:0");
        assert_eq!(request.content_type, "application/json");
        assert_eq!(request.accept, "application/json");

        let body: Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body["inputText"], "What is Rust?");
        assert_eq!(body["textGenerationConfig"]["maxTokenCount"], 3072);
        assert_eq!(body["textGenerationConfig"]["stopSequences"], json!([]));
        assert!((body["textGenerationConfig"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert!((body["textGenerationConfig"]["topP"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_invoke_request_serializes_camel_case() {
        let request = InvokeModelRequest::titan("model", "hi").unwrap();
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["modelId"], "model");
        assert_eq!(value["contentType"], "application/json");
        assert!(value["body"].is_string());
    }

    #[test]
    fn test_completion_reason() {
        let response = json!({
            "inputTextTokenCount": 3,
            "results": [{"tokenCount": 0, "outputText": "", "completionReason": "CONTENT_FILTERED"}]
        });
        assert_eq!(completion_reason(&response), Some(CONTENT_FILTERED));
        assert!(is_content_filtered(&response));
    }

    #[test]
    fn test_completion_reason_absent() {
        assert_eq!(completion_reason(&json!({})), None);
        assert_eq!(completion_reason(&json!({"results": []})), None);
        assert_eq!(completion_reason(&json!([1, 2])), None);
        assert!(!is_content_filtered(&json!({"results": [{"completionReason": "FINISH"}]})));
    }
}
