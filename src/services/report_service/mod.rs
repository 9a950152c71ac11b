// src/services/report_service/mod.rs

pub mod explanations;
pub mod grade;
pub mod html;
pub mod normalize;
pub mod sample;

pub use explanations::{explain, Explanation};
pub use grade::grade;
pub use html::to_report_html;
pub use normalize::normalize;
pub use sample::sample_report;
