use crate::error::ApiError;
use crate::models::scan::{score_percent, NormalizedReport};
use crate::models::AppState;
use crate::services::report_service::{grade, normalize, to_report_html};
use crate::utils::{normalize_target_url, pdf_filename};
use chrono::Utc;
use log::{error, info, warn};
use uuid::Uuid;

pub const SCAN_FETCH_FAILED: &str = "Error fetching scan results.";
pub const PDF_GENERATION_FAILED: &str = "PDF generation failed";

// Rendered PDF ready to stream back to the browser
pub struct PdfExport {
    pub filename: String,
    pub response: reqwest::Response,
}

/// Scan `target` and normalize the result. Failures are terminal: nothing is
/// retried or cached.
pub async fn run_audit(state: &AppState, target: &str) -> Result<NormalizedReport, ApiError> {
    let url = normalize_target_url(target).map_err(ApiError::BadRequest)?;
    let scan_id = Uuid::new_v4();
    info!("scan {} started for {}", scan_id, url);

    let raw = state.scan_client.fetch_raw(url.as_str()).await.map_err(|e| {
        warn!("scan {} failed upstream: {}", scan_id, e);
        ApiError::upstream(SCAN_FETCH_FAILED, e)
    })?;

    let report = normalize(&raw, url.as_str()).map_err(|e| {
        warn!("scan {} returned an unusable payload: {}", scan_id, e);
        ApiError::from(e)
    })?;

    info!(
        "scan {} finished: grade {} ({}/100), {} issues, {} passes",
        scan_id,
        grade(report.overall_score),
        score_percent(report.overall_score),
        report.issues.len(),
        report.passes.len()
    );
    Ok(report)
}

/// Serialize the report and hand it to the PDF service.
pub async fn export_pdf(state: &AppState, report: &NormalizedReport) -> Result<PdfExport, ApiError> {
    let html = to_report_html(report);
    let response = state.pdf_client.render(&html).await.map_err(|e| {
        error!("pdf export for {} failed: {}", report.url, e);
        ApiError::upstream(PDF_GENERATION_FAILED, e)
    })?;

    Ok(PdfExport {
        filename: pdf_filename(Utc::now()),
        response,
    })
}
