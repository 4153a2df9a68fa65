use anyhow::{Context, Result};
use order::{handler::AppRouter, state::AppState};
use shared::{
    config::Config,
    utils::{Telemetry, init_logger},
};
use tracing::{error, info, warn};

const SERVICE_NAME: &str = "order-service";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let mut telemetry = config
        .otel_endpoint
        .as_ref()
        .map(|endpoint| Telemetry::new(SERVICE_NAME, endpoint.clone()));

    let logger_provider = match telemetry.as_mut() {
        Some(t) => {
            t.init_tracer().context("Failed to initialize tracer")?;
            t.init_meter().context("Failed to initialize meter")?;
            Some(t.init_logger().context("Failed to initialize OTLP logs")?)
        }
        None => None,
    };

    let _log_guard = init_logger(
        logger_provider.as_ref(),
        SERVICE_NAME,
        config.is_dev,
        config.enable_file_log,
    );

    if telemetry.is_none() {
        warn!("OTEL_ENDPOINT not set, OTLP export disabled");
    }

    let state = AppState::new(&config)
        .await
        .context("Failed to create AppState")?;

    info!("✅ Application setup completed successfully.");

    let result = AppRouter::serve(config.port, state).await;

    if let Some(telemetry) = telemetry
        && let Err(e) = telemetry.shutdown().await
    {
        error!("Failed to shutdown telemetry: {e}");
    }

    info!("✅ Order service shutdown complete.");

    result
}
