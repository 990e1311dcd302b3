use bfhl_service::config::BfhlConfig;
use bfhl_service::startup::{AppState, Application};
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing("bfhl-service", "info", otlp_endpoint.as_deref());

    let config = BfhlConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(official_email = %config.official_email, "Loaded configuration");

    let state = AppState::from_config(config)?;
    let app = Application::build(state).await?;
    app.run_until_stopped().await?;

    Ok(())
}
