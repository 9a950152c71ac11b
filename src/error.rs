use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Scan payloads that cannot produce a report.
#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("scan result has no summary")]
    MissingSummary,
    #[error("scan summary is missing `{0}`")]
    MissingSummaryField(&'static str),
    #[error("scan summary `{field}` is not a score between 0 and 1: {value}")]
    InvalidSummaryScore { field: &'static str, value: f64 },
}

/// Failures talking to the scan, PDF or payment services.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{0}")]
    Reported(String),
    #[error("upstream responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("upstream request timed out")]
    Timeout,
    #[error("invalid upstream response: {0}")]
    Decode(String),
    #[error(transparent)]
    Transport(reqwest::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else if err.is_decode() {
            UpstreamError::Decode(err.to_string())
        } else {
            UpstreamError::Transport(err)
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error("{message}")]
    Upstream {
        message: String,
        #[source]
        source: UpstreamError,
    },
    #[error("{error}: {details}")]
    Checkout {
        status: StatusCode,
        error: String,
        details: String,
    },
}

impl ApiError {
    /// Upstream-reported messages pass through verbatim. Anything else gets `generic`.
    pub fn upstream(generic: &str, source: UpstreamError) -> Self {
        let message = match &source {
            UpstreamError::Reported(message) => message.clone(),
            _ => generic.to_string(),
        };
        ApiError::Upstream { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Normalize(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Upstream {
                source: UpstreamError::Timeout,
                ..
            } => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Checkout { status, .. } => *status,
        }
    }
}

// Unreadable request bodies get the same `{error}` shape as every other failure
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Checkout { error, details, .. } => json!({ "error": error, "details": details }),
            other => json!({ "error": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
