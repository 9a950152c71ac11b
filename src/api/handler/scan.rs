use crate::error::ApiError;
use crate::models::{AppState, NormalizedReport, ScanRequest, ScanSuccessParams};
use crate::services::run_audit;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use log::info;
use std::sync::Arc;

pub async fn scan_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> Result<Json<NormalizedReport>, ApiError> {
    let url = requested_url(payload)?;
    let report = run_audit(&state, &url).await?;
    Ok(Json(report))
}

/// Target URL from a `{url}` body. A missing or blank url is a 400.
pub fn requested_url(payload: Result<Json<ScanRequest>, JsonRejection>) -> Result<String, ApiError> {
    let Json(payload) = payload?;
    match payload.url.filter(|url| !url.trim().is_empty()) {
        Some(url) => Ok(url),
        None => Err(ApiError::BadRequest("No URL found for scan.".to_string())),
    }
}

// Landing page after checkout; the audited URL comes back in the query string
pub async fn scan_success_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScanSuccessParams>,
) -> Result<Json<NormalizedReport>, ApiError> {
    let url = params.url.as_deref().unwrap_or_default();
    if url.trim().is_empty() {
        return Err(ApiError::BadRequest("No URL found for scan.".to_string()));
    }
    if params.unlocked.as_deref() == Some("true") {
        info!("unlocked scan requested for {}", url);
    }

    let report = run_audit(&state, url).await?;
    Ok(Json(report))
}
