use crate::models::app::config::AppConfig;
use crate::services::{CheckoutClient, PdfClient, ScanClient};
use anyhow::{Context, Result};
use reqwest::Client;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub scan_client: ScanClient,
    pub pdf_client: PdfClient,
    // None when no payment provider key is configured
    pub checkout_client: Option<CheckoutClient>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let checkout_client = config.stripe_secret_key.as_ref().map(|key| {
            CheckoutClient::new(http.clone(), config.stripe_api_base.clone(), key.clone())
        });

        Ok(AppState {
            scan_client: ScanClient::new(http.clone(), config.scan_service_url.clone()),
            pdf_client: PdfClient::new(http, config.pdf_service_url.clone()),
            checkout_client,
            config,
        })
    }
}
