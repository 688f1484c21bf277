use anyhow::Result;
use bedrock_adapter::{config, server};
use tracing::info;

/// Rejects anything `LevelFilter` cannot parse, before the subscriber exists.
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .json()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging is configured from the file, so it cannot be up yet
    let config = config::load().await.unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());
    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    init_tracing(&log_level);

    info!(
        model_id = %config.model.model_id,
        region = %config.model.region,
        "Starting Bedrock request adapter with log level: {}",
        log_level
    );

    server::run(config).await?;

    Ok(())
}
