pub mod api;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use api::build_router;
pub use error::{ApiError, NormalizeError, UpstreamError};
pub use models::{AppConfig, AppState, NormalizedReport, RawScanResult};
pub use services::{grade, normalize, to_report_html};
