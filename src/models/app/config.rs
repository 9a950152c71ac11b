use anyhow::{Context, Result};
use reqwest::Url;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::filter::LevelFilter;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3043";
pub const DEFAULT_SCAN_SERVICE_URL: &str = "http://localhost:3001";
pub const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub scan_service_url: Url,
    pub pdf_service_url: Url,
    pub stripe_secret_key: Option<String>,
    pub stripe_api_base: Url,
    pub upstream_timeout: Duration,
    pub environment: Environment,
    pub log_level: LevelFilter,
    pub log_config: Option<PathBuf>,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenv().ok()` first to pick up `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_addr = var("SITEGUARD_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = SocketAddr::from_str(bind_addr.trim())
            .with_context(|| format!("SITEGUARD_BIND_ADDR is not a socket address: {}", bind_addr))?;

        let scan_service_url = parse_url(
            "SCAN_SERVICE_URL",
            &var("SCAN_SERVICE_URL").unwrap_or_else(|| DEFAULT_SCAN_SERVICE_URL.to_string()),
        )?;
        let pdf_service_url = match var("PDF_SERVICE_URL") {
            Some(raw) => parse_url("PDF_SERVICE_URL", &raw)?,
            None => scan_service_url.clone(),
        };
        let stripe_api_base = parse_url(
            "STRIPE_API_BASE",
            &var("STRIPE_API_BASE").unwrap_or_else(|| DEFAULT_STRIPE_API_BASE.to_string()),
        )?;

        let upstream_timeout = match var("SITEGUARD_UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().with_context(|| {
                    format!("SITEGUARD_UPSTREAM_TIMEOUT_SECS is not a number: {}", raw)
                })?;
                anyhow::ensure!(secs > 0, "SITEGUARD_UPSTREAM_TIMEOUT_SECS must be positive");
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        let environment = match var("SITEGUARD_ENV").as_deref().map(str::trim) {
            Some(env) if env.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        };

        let log_level = match var("SITEGUARD_LOG_LEVEL") {
            Some(raw) => LevelFilter::from_str(raw.trim())
                .map_err(|_| anyhow::anyhow!("SITEGUARD_LOG_LEVEL is not a log level: {}", raw))?,
            None => LevelFilter::INFO,
        };

        Ok(AppConfig {
            bind_addr,
            scan_service_url,
            pdf_service_url,
            stripe_secret_key: var("STRIPE_SECRET_KEY"),
            stripe_api_base,
            upstream_timeout,
            environment,
            log_level,
            log_config: var("SITEGUARD_LOG_CONFIG").map(PathBuf::from),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

fn parse_url(key: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("{} is not a valid URL: {}", key, raw))?;
    anyhow::ensure!(
        matches!(url.scheme(), "http" | "https"),
        "{} must be an http(s) URL: {}",
        key,
        raw
    );
    Ok(url)
}

/// Joins an endpoint path onto a base URL, keeping any path prefix the base carries.
pub fn endpoint(base: &Url, path: &str) -> String {
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
