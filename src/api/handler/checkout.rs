use crate::error::ApiError;
use crate::models::{AppState, CheckoutRequest, CheckoutResponse};
use crate::utils::normalize_target_url;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{
        header::{HOST, ORIGIN},
        HeaderMap, StatusCode,
    },
    Json,
};
use log::error;
use std::sync::Arc;

const CHECKOUT_ERROR: &str = "Stripe Checkout error";

pub async fn create_checkout_session_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let Json(payload) = payload?;
    let (Some(price_id), Some(url)) = (
        non_empty(payload.price_id.as_deref()),
        non_empty(payload.url.as_deref()),
    ) else {
        return Err(ApiError::BadRequest("Missing priceId or url".to_string()));
    };
    let url = normalize_target_url(url).map_err(ApiError::BadRequest)?;

    let Some(client) = state.checkout_client.as_ref() else {
        return Err(ApiError::Checkout {
            status: StatusCode::SERVICE_UNAVAILABLE,
            error: CHECKOUT_ERROR.to_string(),
            details: "payment provider not configured".to_string(),
        });
    };

    let origin = request_origin(&headers, state.config.is_production());
    let session_id = client
        .create_session(price_id, &url, &origin)
        .await
        .map_err(|e| {
            error!("Stripe Checkout error: {}", e);
            ApiError::Checkout {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: CHECKOUT_ERROR.to_string(),
                details: e.to_string(),
            }
        })?;

    Ok(Json(CheckoutResponse { session_id }))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Origin the browser used, for the provider's redirect URLs.
pub fn request_origin(headers: &HeaderMap, production: bool) -> String {
    if let Some(origin) = headers.get(ORIGIN).and_then(|v| v.to_str().ok()) {
        return origin.trim_end_matches('/').to_string();
    }
    let host = headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let scheme = if production { "https" } else { "http" };
    format!("{}://{}", scheme, host)
}
