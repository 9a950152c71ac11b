// src/api/mod.rs

pub mod handler;

pub use handler::{
    create_checkout_session_handler, health_handler, report_html_handler, report_pdf_handler,
    sample_report_handler, scan_handler, scan_success_handler,
};

use crate::models::AppState;
use axum::{
    http::{HeaderName, HeaderValue},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

// Sent on every response in production
pub const SECURITY_HEADERS: [(&str, &str); 6] = [
    (
        "strict-transport-security",
        "max-age=63072000; includeSubDomains; preload",
    ),
    (
        "content-security-policy",
        "default-src 'self' https://js.stripe.com; script-src 'self' https://js.stripe.com; style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; font-src 'self' data:;",
    ),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("referrer-policy", "same-origin"),
    (
        "permissions-policy",
        "geolocation=(), microphone=(), camera=()",
    ),
];

pub fn build_router(state: AppState) -> Router {
    let production = state.config.is_production();

    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/scan", post(scan_handler))
        .route("/scan-success", get(scan_success_handler))
        .route("/report/html", post(report_html_handler))
        .route("/report/pdf", post(report_pdf_handler))
        .route("/sample-report", get(sample_report_handler))
        .route(
            "/api/create-checkout-session",
            post(create_checkout_session_handler),
        )
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http());

    if production {
        with_security_headers(router)
    } else {
        router
    }
}

fn with_security_headers(router: Router) -> Router {
    SECURITY_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            ))
        })
}
