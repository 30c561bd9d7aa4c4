//! Image Guard - signed request gateway for image handlers.
//!
//! Verifies the HMAC carried in image request paths before they reach the
//! image decoder.

use tokio::net::TcpListener;

use image_guard::api::build_router;
use image_guard::config::Config;
use image_guard::{logging, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    logging::init();

    tracing::info!("Starting Image Guard v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let verification = config.security.verification().map_err(|e| {
        tracing::error!(error = %e, "Invalid signing configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        algorithm = %verification.algorithm,
        separator = %verification.separator,
        hmac_required = verification.digest_required,
        key_configured = verification.key().is_some(),
        "Configuration loaded"
    );

    if verification.digest_required && verification.key().is_none() {
        tracing::warn!("HMAC is compulsory but no key is set - every request will be rejected");
    } else if !verification.digest_required {
        tracing::warn!("HMAC is optional - unsigned requests will be accepted");
    }

    let app = build_router(AppState::new(verification));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
