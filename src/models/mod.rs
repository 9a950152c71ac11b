// src/models/mod.rs

pub mod api;
pub mod app;
pub mod scan;

pub use api::{CheckoutRequest, CheckoutResponse, HealthResponse, ScanRequest, ScanSuccessParams};
pub use app::{AppConfig, AppState, Environment};
pub use scan::{
    CategoryId, Criticality, FailedAudit, Grade, Issue, NormalizedReport, Pass, RawScanResult,
    Summary,
};
