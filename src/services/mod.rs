pub mod checkout_service;
pub mod report_service;
pub mod site_audit_service;

pub use checkout_service::CheckoutClient;
pub use report_service::{grade, normalize, sample_report, to_report_html};
pub use site_audit_service::{export_pdf, run_audit, PdfClient, ScanClient};
