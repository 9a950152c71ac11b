use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct ScanRequest {
    pub url: Option<String>,
}

// Query string of the post-checkout landing page
#[derive(Debug, Deserialize)]
pub struct ScanSuccessParams {
    pub url: Option<String>,
    pub unlocked: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PdfRequest<'a> {
    pub html: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    #[serde(rename = "priceId")]
    pub price_id: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckoutResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
