mod event;
mod response;

pub use event::*;
pub use response::*;

use crate::{
    Error, Result,
    bedrock::{InvokeModelRequest, ModelClient, is_content_filtered},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

/// Turns inbound events into a single model invocation and shapes the
/// outcome as an [`HttpResult`]. The client is shared across invocations.
#[derive(Clone)]
pub struct RequestAdapter {
    client: Arc<dyn ModelClient>,
    model_id: String,
}

impl RequestAdapter {
    pub fn new(client: Arc<dyn ModelClient>, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    /// Never fails: missing input maps to 400, every other error to 500.
    pub async fn handle(&self, event: InboundEvent) -> HttpResult {
        let span = info_span!("invocation", id = %Uuid::new_v4(), model = %self.model_id);

        async move {
            match self.process(event).await {
                Ok(success) => HttpResult::ok(&success),
                Err(e) if e.is_client_error() => {
                    debug!("Rejecting request: {}", e);
                    HttpResult::bad_request(e.to_string())
                }
                Err(e) => {
                    error!("Error querying model: {}", e);
                    HttpResult::internal_error(e.details())
                }
            }
        }
        .instrument(span)
        .await
    }

    pub async fn process(&self, event: InboundEvent) -> Result<SuccessBody> {
        let body = event.normalized_body()?;
        let query = event.user_query(&body).ok_or(Error::MissingQuery)?;

        let request = InvokeModelRequest::titan(&self.model_id, query)?;
        info!(
            "Payload sent: {}",
            serde_json::to_string_pretty(&request)?
        );

        let payload = self.client.invoke_model(request).await?;
        let generated_response: Value = serde_json::from_str(&String::from_utf8(payload)?)?;

        if is_content_filtered(&generated_response) {
            warn!("Response was filtered by the model.");
        }

        Ok(SuccessBody {
            query: query.to_string(),
            generated_response,
        })
    }
}
