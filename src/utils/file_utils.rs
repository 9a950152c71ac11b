use chrono::{DateTime, Utc};

// Download name for an exported report, e.g. siteguard-scan-1718000000000.pdf
pub fn pdf_filename(now: DateTime<Utc>) -> String {
    format!("siteguard-scan-{}.pdf", now.timestamp_millis())
}

pub fn sanitize_filename(name: &str) -> String {
    name.replace(|c: char| !c.is_ascii_alphanumeric() && c != '.' && c != '-', "_")
}

/// `Content-Disposition` value that forces a download under `filename`.
pub fn attachment_disposition(filename: &str) -> String {
    format!("attachment; filename=\"{}\"", sanitize_filename(filename))
}
