use async_trait::async_trait;
use bedrock_adapter::{
    Error, Result,
    bedrock::{InvokeModelRequest, ModelClient},
};
use std::sync::{Arc, Mutex};

/// Recording model client that replays canned payloads in order.
#[derive(Debug, Clone)]
pub struct MockModelClient {
    pub responses: Arc<Mutex<Vec<Vec<u8>>>>,
    pub requests: Arc<Mutex<Vec<InvokeModelRequest>>>,
    pub error: Option<String>,
}

impl MockModelClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_response(self, payload: impl Into<Vec<u8>>) -> Self {
        self.responses.lock().unwrap().push(payload.into());
        self
    }

    pub fn with_json_response(self, payload: &serde_json::Value) -> Self {
        self.with_response(payload.to_string())
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_requests(&self) -> Vec<InvokeModelRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for MockModelClient {
    async fn invoke_model(&self, request: InvokeModelRequest) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::model(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::model("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockModelClient {
    fn default() -> Self {
        Self::new()
    }
}
