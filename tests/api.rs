//! HTTP tests: the router is served on 127.0.0.1:0 against stub scan, PDF and
//! payment services.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Form, Json, Router,
};
use serde_json::{json, Value};
use siteguard::{build_router, AppConfig, AppState};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;

const FIXTURE: &str = include_str!("fixtures/scan_result.json");
const FAKE_PDF: &[u8] = b"%PDF-1.4 siteguard test document";
const STRIPE_KEY: &str = "sk_test_123";

#[derive(Default)]
struct Upstream {
    scanned: Mutex<Vec<String>>,
    rendered_html: Mutex<Option<String>>,
    checkout_form: Mutex<Option<HashMap<String, String>>>,
}

async fn stub_scan(
    State(upstream): State<Arc<Upstream>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let url = body["url"].as_str().unwrap_or_default().to_string();
    upstream.scanned.lock().await.push(url.clone());
    match url.as_str() {
        "https://broken.example.com" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Scan failed: target unreachable" })),
        ),
        "https://partial.example.com" => (
            StatusCode::OK,
            Json(json!({ "summary": { "performance": 0.9, "accessibility": 0.9, "bestPractices": 0.9 } })),
        ),
        "https://garbled.example.com" => (StatusCode::BAD_GATEWAY, Json(json!("upstream down"))),
        _ => (
            StatusCode::OK,
            Json(serde_json::from_str(FIXTURE).expect("fixture")),
        ),
    }
}

async fn stub_pdf(
    State(upstream): State<Arc<Upstream>>,
    Json(body): Json<Value>,
) -> Result<([(&'static str, &'static str); 1], &'static [u8]), StatusCode> {
    let html = body["html"].as_str().unwrap_or_default().to_string();
    let fail = html.contains("pdf-fails.example.com");
    *upstream.rendered_html.lock().await = Some(html);
    if fail {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(([("content-type", "application/pdf")], FAKE_PDF))
}

async fn stub_checkout(
    State(upstream): State<Arc<Upstream>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let expected = format!("Bearer {}", STRIPE_KEY);
    let authorized =
        headers.get("authorization").and_then(|v| v.to_str().ok()) == Some(expected.as_str());
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "message": "Invalid API Key provided" } })),
        );
    }
    let price = form.get("line_items[0][price]").cloned().unwrap_or_default();
    *upstream.checkout_form.lock().await = Some(form);
    if price == "price_missing" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "message": "No such price: 'price_missing'" } })),
        );
    }
    (StatusCode::OK, Json(json!({ "id": "cs_test_a1b2c3" })))
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

struct Harness {
    base: String,
    upstream: Arc<Upstream>,
    client: reqwest::Client,
}

impl Harness {
    async fn start(extra: &[(&str, &str)]) -> Self {
        let upstream = Arc::new(Upstream::default());
        let stub = Router::new()
            .route("/scan", post(stub_scan))
            .route("/generate-pdf", post(stub_pdf))
            .route("/v1/checkout/sessions", post(stub_checkout))
            .with_state(upstream.clone());
        let stub_addr = spawn(stub).await;

        let stub_url = format!("http://{}", stub_addr);
        let mut vars: HashMap<String, String> = HashMap::from([
            ("SCAN_SERVICE_URL".to_string(), stub_url.clone()),
            ("STRIPE_API_BASE".to_string(), stub_url),
            ("SITEGUARD_UPSTREAM_TIMEOUT_SECS".to_string(), "5".to_string()),
        ]);
        for (key, value) in extra {
            vars.insert(key.to_string(), value.to_string());
        }
        let config = AppConfig::from_vars(|key| vars.get(key).cloned()).expect("config");
        let app = build_router(AppState::new(config).expect("state"));
        let addr = spawn(app).await;

        Harness {
            base: format!("http://{}", addr),
            upstream,
            client: reqwest::Client::new(),
        }
    }

    async fn post_json(&self, path: &str, body: Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.base, path))
            .json(&body)
            .send()
            .await
            .expect("request")
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base, path))
            .send()
            .await
            .expect("request")
    }
}

#[tokio::test]
async fn scan_returns_normalized_report() {
    let h = Harness::start(&[]).await;
    let res = h
        .post_json("/scan", json!({ "url": "shop.example.com" }))
        .await;
    assert_eq!(res.status(), 200);

    let report: Value = res.json().await.unwrap();
    assert_eq!(report["url"], "https://shop.example.com");
    assert!((report["overallScore"].as_f64().unwrap() - 0.7375).abs() < 1e-9);
    assert_eq!(report["issues"][0]["id"], "hsts-missing");
    assert_eq!(report["passes"][1]["id"], "blacklist-clear");
    assert_eq!(
        report["failedAudits"]["seo"][0]["id"],
        "meta-description"
    );
    assert_eq!(
        *h.upstream.scanned.lock().await,
        vec!["https://shop.example.com".to_string()]
    );
}

#[tokio::test]
async fn upstream_error_is_surfaced_verbatim() {
    let h = Harness::start(&[]).await;
    let res = h
        .post_json("/scan", json!({ "url": "https://broken.example.com" }))
        .await;
    assert_eq!(res.status(), 502);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Scan failed: target unreachable");
}

#[tokio::test]
async fn unreadable_upstream_reply_gets_generic_message() {
    let h = Harness::start(&[]).await;
    let res = h
        .post_json("/scan", json!({ "url": "https://garbled.example.com" }))
        .await;
    assert_eq!(res.status(), 502);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Error fetching scan results.");
}

#[tokio::test]
async fn unreachable_scan_service_gets_generic_message() {
    // nothing listens on the discard port
    let h = Harness::start(&[("SCAN_SERVICE_URL", "http://127.0.0.1:9")]).await;
    let res = h
        .post_json("/scan", json!({ "url": "https://shop.example.com" }))
        .await;
    assert!(matches!(res.status().as_u16(), 502 | 504));
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Error fetching scan results.");
}

#[tokio::test]
async fn missing_summary_field_is_unprocessable() {
    let h = Harness::start(&[]).await;
    let res = h
        .post_json("/scan", json!({ "url": "https://partial.example.com" }))
        .await;
    assert_eq!(res.status(), 422);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "scan summary is missing `seo`");
}

#[tokio::test]
async fn empty_url_is_rejected_before_scanning() {
    let h = Harness::start(&[]).await;
    let res = h.post_json("/scan", json!({ "url": "  " })).await;
    assert_eq!(res.status(), 400);
    assert!(h.upstream.scanned.lock().await.is_empty());
}

#[tokio::test]
async fn body_without_url_gets_json_error() {
    let h = Harness::start(&[]).await;
    for path in ["/scan", "/report/html", "/report/pdf"] {
        let res = h.post_json(path, json!({ "target": "shop.example.com" })).await;
        assert_eq!(res.status(), 400, "{path}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], "No URL found for scan.");
    }
    assert!(h.upstream.scanned.lock().await.is_empty());
}

#[tokio::test]
async fn non_json_body_gets_json_error() {
    let h = Harness::start(&[]).await;
    let res = h
        .client
        .post(format!("{}/scan", h.base))
        .header("content-type", "text/plain")
        .body("https://shop.example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn scan_success_recovers_url_from_query() {
    let h = Harness::start(&[]).await;

    let res = h.get("/scan-success?unlocked=true").await;
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "No URL found for scan.");

    let res = h
        .get("/scan-success?unlocked=true&url=https%3A%2F%2Fshop.example.com")
        .await;
    assert_eq!(res.status(), 200);
    let report: Value = res.json().await.unwrap();
    assert_eq!(report["url"], "https://shop.example.com");
}

#[tokio::test]
async fn report_html_is_served_as_html() {
    let h = Harness::start(&[]).await;
    let res = h
        .post_json("/report/html", json!({ "url": "https://shop.example.com" }))
        .await;
    assert_eq!(res.status(), 200);
    assert!(res.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let html = res.text().await.unwrap();
    assert!(html.contains("https://shop.example.com"));
    assert!(html.contains("Best Practices Issues"));
}

#[tokio::test]
async fn pdf_export_streams_the_rendered_document() {
    let h = Harness::start(&[]).await;
    let res = h
        .post_json("/report/pdf", json!({ "url": "https://shop.example.com" }))
        .await;
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "application/pdf");
    let disposition = res.headers()["content-disposition"].to_str().unwrap().to_string();
    assert!(disposition.starts_with("attachment; filename=\"siteguard-scan-"));
    assert!(disposition.ends_with(".pdf\""));
    assert_eq!(res.bytes().await.unwrap().as_ref(), FAKE_PDF);

    let html = h.upstream.rendered_html.lock().await.clone().expect("html sent");
    assert!(html.contains("Overall Grade:</b> B (74/100)"));
    assert!(html.contains("Critical Security/Compliance Issues"));
}

#[tokio::test]
async fn pdf_service_failure_is_reported() {
    let h = Harness::start(&[]).await;
    let res = h
        .post_json("/report/pdf", json!({ "url": "https://pdf-fails.example.com" }))
        .await;
    assert_eq!(res.status(), 502);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "PDF generation failed");
}

#[tokio::test]
async fn sample_report_is_available_without_scanning() {
    let h = Harness::start(&[]).await;
    let res = h.get("/sample-report").await;
    assert_eq!(res.status(), 200);
    let report: Value = res.json().await.unwrap();
    assert_eq!(report["url"], "https://www.big-enterprise-demo.com");
    assert!((report["overallScore"].as_f64().unwrap() - 0.82).abs() < 1e-9);
    assert!(h.upstream.scanned.lock().await.is_empty());
}

#[tokio::test]
async fn checkout_requires_price_and_url() {
    let h = Harness::start(&[("STRIPE_SECRET_KEY", STRIPE_KEY)]).await;
    let res = h
        .post_json("/api/create-checkout-session", json!({ "url": "https://shop.example.com" }))
        .await;
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Missing priceId or url");
}

#[tokio::test]
async fn checkout_without_key_is_unavailable() {
    let h = Harness::start(&[]).await;
    let res = h
        .post_json(
            "/api/create-checkout-session",
            json!({ "priceId": "price_1", "url": "https://shop.example.com" }),
        )
        .await;
    assert_eq!(res.status(), 503);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Stripe Checkout error");
}

#[tokio::test]
async fn checkout_creates_a_session() {
    let h = Harness::start(&[("STRIPE_SECRET_KEY", STRIPE_KEY)]).await;
    let res = h
        .client
        .post(format!("{}/api/create-checkout-session", h.base))
        .header("origin", "https://siteguard.io")
        .json(&json!({ "priceId": "price_1", "url": "https://shop.example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["sessionId"], "cs_test_a1b2c3");

    let form = h.upstream.checkout_form.lock().await.clone().expect("form sent");
    assert_eq!(form["mode"], "payment");
    assert_eq!(form["metadata[url]"], "https://shop.example.com");
    assert_eq!(form["cancel_url"], "https://siteguard.io/?canceled=true");
    assert!(form["success_url"].starts_with("https://siteguard.io/scan-success?unlocked=true&url="));
}

#[tokio::test]
async fn checkout_provider_error_is_a_server_error() {
    let h = Harness::start(&[("STRIPE_SECRET_KEY", STRIPE_KEY)]).await;
    let res = h
        .post_json(
            "/api/create-checkout-session",
            json!({ "priceId": "price_missing", "url": "https://shop.example.com" }),
        )
        .await;
    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Stripe Checkout error");
    assert_eq!(body["details"], "No such price: 'price_missing'");
}

#[tokio::test]
async fn checkout_rejects_other_methods() {
    let h = Harness::start(&[]).await;
    let res = h.get("/api/create-checkout-session").await;
    assert_eq!(res.status(), 405);
}

#[tokio::test]
async fn production_responses_carry_security_headers() {
    let h = Harness::start(&[("SITEGUARD_ENV", "production")]).await;
    let res = h.get("/health").await;
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()["strict-transport-security"],
        "max-age=63072000; includeSubDomains; preload"
    );
    assert_eq!(res.headers()["x-frame-options"], "DENY");
    assert_eq!(res.headers()["x-content-type-options"], "nosniff");
    assert!(res.headers()["content-security-policy"]
        .to_str()
        .unwrap()
        .contains("https://js.stripe.com"));
}

#[tokio::test]
async fn development_responses_skip_security_headers() {
    let h = Harness::start(&[]).await;
    let res = h.get("/health").await;
    assert_eq!(res.status(), 200);
    assert!(res.headers().get("strict-transport-security").is_none());
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
