use anyhow::{Context, Result};
use dotenv::dotenv;
use log::info;
use siteguard::{build_router, utils::init_logging, AppConfig, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env()?;
    init_logging(&config)?;

    info!(
        "scan service at {}, pdf service at {}",
        config.scan_service_url, config.pdf_service_url
    );
    if config.stripe_secret_key.is_none() {
        info!("STRIPE_SECRET_KEY not set, checkout sessions are disabled");
    }

    let bind_addr = config.bind_addr;
    let app = build_router(AppState::new(config)?);

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    info!("🚀 Server running on http://{}", bind_addr);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
