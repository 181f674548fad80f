use portal_service::config::PortalConfig;
use portal_service::Application;
use service_core::error::AppError;
use service_core::observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = PortalConfig::load()?;

    init_tracing(
        &config.service_name,
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );

    init_metrics()?;

    tracing::info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        "Starting portal service"
    );

    if config.uses_default_secret() {
        tracing::warn!("JWT_SECRET is not set; using the insecure built-in default");
    }

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}
