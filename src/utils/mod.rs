pub mod file_utils;
pub mod html_utils;
pub mod log_utils;
pub mod url_utils;

pub use file_utils::{attachment_disposition, pdf_filename, sanitize_filename};
pub use html_utils::escape_html;
pub use log_utils::init_logging;
pub use url_utils::normalize_target_url;
