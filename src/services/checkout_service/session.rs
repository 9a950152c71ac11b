use crate::error::UpstreamError;
use crate::models::app::endpoint;
use log::{debug, info};
use reqwest::{Client, Url};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SessionCreated {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: Option<String>,
}

// Hosted checkout sessions with the payment provider (Stripe API)
#[derive(Clone)]
pub struct CheckoutClient {
    http: Client,
    api_base: Url,
    secret_key: String,
}

impl CheckoutClient {
    pub fn new(http: Client, api_base: Url, secret_key: String) -> Self {
        CheckoutClient {
            http,
            api_base,
            secret_key,
        }
    }

    /// One-off card payment for `price_id`. The audited URL travels in the
    /// session metadata and in the success redirect so the landing page can
    /// recover it.
    pub async fn create_session(
        &self,
        price_id: &str,
        url: &str,
        origin: &str,
    ) -> Result<String, UpstreamError> {
        let form = session_form(price_id, url, origin);
        let endpoint = endpoint(&self.api_base, "v1/checkout/sessions");
        debug!("POST {}", endpoint);

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ProviderErrorBody>(&body)
                .ok()
                .and_then(|body| body.error.message);
            return Err(match message {
                Some(message) => UpstreamError::Reported(message),
                None => UpstreamError::Status(status),
            });
        }

        let session: SessionCreated =
            serde_json::from_slice(&body).map_err(|e| UpstreamError::Decode(e.to_string()))?;
        info!("checkout session {} created for {}", session.id, url);
        Ok(session.id)
    }
}

pub fn session_form(price_id: &str, url: &str, origin: &str) -> Vec<(&'static str, String)> {
    let origin = origin.trim_end_matches('/');
    let success_url = match Url::parse(&format!("{}/scan-success", origin)) {
        Ok(mut success) => {
            success
                .query_pairs_mut()
                .append_pair("unlocked", "true")
                .append_pair("url", url);
            success.to_string()
        }
        Err(_) => format!("{}/scan-success?unlocked=true", origin),
    };

    vec![
        ("payment_method_types[]", "card".to_string()),
        ("line_items[0][price]", price_id.to_string()),
        ("line_items[0][quantity]", "1".to_string()),
        ("mode", "payment".to_string()),
        ("success_url", success_url),
        ("cancel_url", format!("{}/?canceled=true", origin)),
        ("metadata[url]", url.to_string()),
    ]
}
