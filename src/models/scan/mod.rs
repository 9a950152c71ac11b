// src/models/scan/mod.rs

pub mod category;
pub mod grade;
pub mod raw;
pub mod report;

pub use category::{CategoryId, Summary};
pub use grade::{score_percent, Grade};
pub use raw::{
    AuditRef, FullReport, RawAudit, RawCategory, RawHttps, RawSafeBrowsing, RawScanResult,
    RawSecurity, RawSsl, RawSummary, RawTrackersAndCookies,
};
pub use report::{
    empty_failed_audits, Criticality, FailedAudit, FailedAudits, Issue, NormalizedReport, Pass,
};
