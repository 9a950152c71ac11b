use crate::api::handler::scan::requested_url;
use crate::error::ApiError;
use crate::models::{AppState, NormalizedReport, ScanRequest};
use crate::services::site_audit_service::export_pdf;
use crate::services::{run_audit, sample_report, to_report_html};
use crate::utils::attachment_disposition;
use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        HeaderValue, StatusCode,
    },
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;

pub async fn report_html_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> Result<Html<String>, ApiError> {
    let report = run_audit(&state, &requested_url(payload)?).await?;
    Ok(Html(to_report_html(&report)))
}

pub async fn report_pdf_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let report = run_audit(&state, &requested_url(payload)?).await?;
    let export = export_pdf(&state, &report).await?;

    let content_type = export
        .response
        .headers()
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/pdf"));
    let disposition = HeaderValue::from_str(&attachment_disposition(&export.filename))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));
    let body = Body::from_stream(export.response.bytes_stream());

    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, content_type), (CONTENT_DISPOSITION, disposition)],
        body,
    )
        .into_response())
}

pub async fn sample_report_handler() -> Json<NormalizedReport> {
    Json(sample_report())
}
