use crate::error::UpstreamError;
use crate::models::app::endpoint;
use crate::models::scan::RawScanResult;
use crate::models::ScanRequest;
use log::debug;
use reqwest::{Client, Url};

// Client for the remote scan service
#[derive(Clone)]
pub struct ScanClient {
    http: Client,
    base_url: Url,
}

impl ScanClient {
    pub fn new(http: Client, base_url: Url) -> Self {
        ScanClient { http, base_url }
    }

    /// POSTs `{url}` to the scan service.
    ///
    /// An `{error}` payload is returned as `UpstreamError::Reported`, whatever
    /// the status code, and is never normalized.
    pub async fn fetch_raw(&self, url: &str) -> Result<RawScanResult, UpstreamError> {
        let endpoint = endpoint(&self.base_url, "scan");
        debug!("POST {} for {}", endpoint, url);

        let response = self
            .http
            .post(&endpoint)
            .json(&ScanRequest {
                url: Some(url.to_string()),
            })
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        match serde_json::from_slice::<RawScanResult>(&body) {
            Ok(RawScanResult {
                error: Some(message),
                ..
            }) if !message.is_empty() => Err(UpstreamError::Reported(message)),
            Ok(raw) if status.is_success() => Ok(raw),
            Ok(_) => Err(UpstreamError::Status(status)),
            Err(_) if !status.is_success() => Err(UpstreamError::Status(status)),
            Err(e) => Err(UpstreamError::Decode(e.to_string())),
        }
    }
}
