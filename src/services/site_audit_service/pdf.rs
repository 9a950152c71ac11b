use crate::error::UpstreamError;
use crate::models::api::PdfRequest;
use crate::models::app::endpoint;
use log::debug;
use reqwest::{Client, Response, Url};

// Client for the remote HTML-to-PDF renderer
#[derive(Clone)]
pub struct PdfClient {
    http: Client,
    base_url: Url,
}

impl PdfClient {
    pub fn new(http: Client, base_url: Url) -> Self {
        PdfClient { http, base_url }
    }

    /// Submits the report HTML. On success the response body is the document
    /// stream; any non-2xx status is a failure.
    pub async fn render(&self, html: &str) -> Result<Response, UpstreamError> {
        let endpoint = endpoint(&self.base_url, "generate-pdf");
        debug!("POST {} ({} bytes of html)", endpoint, html.len());

        let response = self
            .http
            .post(&endpoint)
            .json(&PdfRequest { html })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }
        Ok(response)
    }
}
