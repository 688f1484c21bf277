use super::types::InvokeModelRequest;
use crate::{Error, Result, config::ModelConfig};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::{Client, error::DisplayErrorContext, primitives::Blob};
use tracing::debug;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Sends the request and returns the raw response payload.
    async fn invoke_model(&self, request: InvokeModelRequest) -> Result<Vec<u8>>;
}

pub struct BedrockClient {
    client: Client,
}

impl BedrockClient {
    pub async fn new(config: &ModelConfig) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .load()
            .await;

        debug!("Bedrock runtime client configured for region {}", config.region);

        Self {
            client: Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl ModelClient for BedrockClient {
    async fn invoke_model(&self, request: InvokeModelRequest) -> Result<Vec<u8>> {
        debug!("Invoking model {}", request.model_id);

        let output = self
            .client
            .invoke_model()
            .model_id(request.model_id)
            .content_type(request.content_type)
            .accept(request.accept)
            .body(Blob::new(request.body.into_bytes()))
            .send()
            .await
            .map_err(|e| Error::model(DisplayErrorContext(&e).to_string()))?;

        let payload = output.body.into_inner();
        debug!("Received {} byte model response", payload.len());

        Ok(payload)
    }
}
