// src/services/site_audit_service/mod.rs

pub mod audit;
pub mod pdf;
pub mod scan;

pub use audit::{export_pdf, run_audit, PdfExport, PDF_GENERATION_FAILED, SCAN_FETCH_FAILED};
pub use pdf::PdfClient;
pub use scan::ScanClient;
