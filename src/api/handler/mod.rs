// src/api/handler/mod.rs

pub mod checkout;
pub mod health;
pub mod report;
pub mod scan;

pub use checkout::create_checkout_session_handler;
pub use health::health_handler;
pub use report::{report_html_handler, report_pdf_handler, sample_report_handler};
pub use scan::{scan_handler, scan_success_handler};
