use crate::adapter::{HttpResult, InboundEvent, RequestAdapter};
use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct AppState {
    pub adapter: Arc<RequestAdapter>,
}

/// Proxy-style entry: the raw request body becomes the event body and the
/// adapter's result is written out as the HTTP response.
pub async fn query(State(state): State<AppState>, body: String) -> HttpResult {
    debug!("Received query request ({} bytes)", body.len());
    state.adapter.handle(InboundEvent::from_raw_body(body)).await
}

/// Direct invocation: accepts a whole inbound event and returns the
/// proxy result object itself.
pub async fn invoke(
    State(state): State<AppState>,
    Json(event): Json<InboundEvent>,
) -> Json<HttpResult> {
    debug!("Received direct invocation");
    Json(state.adapter.handle(event).await)
}
