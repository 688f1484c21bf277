pub mod handlers;

use crate::{
    Result,
    adapter::RequestAdapter,
    bedrock::{BedrockClient, ModelClient},
    config::Config,
};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(adapter: RequestAdapter) -> Router {
    let app_state = handlers::AppState {
        adapter: Arc::new(adapter),
    };

    Router::new()
        .route("/", post(handlers::query))
        .route("/invoke", post(handlers::invoke))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    // Built once and shared by every invocation
    let client: Arc<dyn ModelClient> = Arc::new(BedrockClient::new(&config.model).await);
    let adapter = RequestAdapter::new(client, config.model.model_id.clone());

    let app = router(adapter);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!(
        "Starting server on {} for model {}",
        addr, config.model.model_id
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
