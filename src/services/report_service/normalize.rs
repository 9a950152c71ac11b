use crate::error::NormalizeError;
use crate::models::scan::{
    empty_failed_audits, CategoryId, Criticality, FailedAudit, FailedAudits, FullReport, Issue,
    NormalizedReport, Pass, RawScanResult, RawSecurity, RawSummary, Summary,
};
use crate::models::scan::raw::is_truthy;
use crate::services::report_service::explanations::{
    BLACKLIST_CLEAR, BLACKLIST_LISTED, COOKIE_BANNER_MISSING, HSTS_MISSING, SSL_VALID,
};

const HSTS_HEADER: &str = "strict-transport-security";

/// Turns a raw scan payload into the report served to the front-end.
///
/// Fails only when the summary scores are missing or unusable. Absent
/// security sub-objects and an absent full report degrade to "no finding"
/// and empty audit lists.
pub fn normalize(raw: &RawScanResult, url: &str) -> Result<NormalizedReport, NormalizeError> {
    let summary = validate_summary(raw.summary.as_ref())?;
    let security = raw.security.as_ref();

    Ok(NormalizedReport {
        url: url.to_string(),
        overall_score: summary.mean(),
        summary,
        issues: collect_issues(security),
        passes: collect_passes(security),
        failed_audits: collect_failed_audits(raw.full_report.as_ref()),
    })
}

pub fn validate_summary(summary: Option<&RawSummary>) -> Result<Summary, NormalizeError> {
    let summary = summary.ok_or(NormalizeError::MissingSummary)?;
    Ok(Summary {
        performance: required_score("performance", summary.performance)?,
        accessibility: required_score("accessibility", summary.accessibility)?,
        seo: required_score("seo", summary.seo)?,
        best_practices: required_score("bestPractices", summary.best_practices)?,
    })
}

fn required_score(field: &'static str, value: Option<f64>) -> Result<f64, NormalizeError> {
    let value = value.ok_or(NormalizeError::MissingSummaryField(field))?;
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(NormalizeError::InvalidSummaryScore { field, value });
    }
    Ok(value)
}

pub fn collect_issues(security: Option<&RawSecurity>) -> Vec<Issue> {
    let mut issues = Vec::new();

    // Each check needs its sub-object; without it the check does not apply.
    if let Some(security) = security.filter(|s| s.headers.is_some()) {
        let hsts_present = security.header(HSTS_HEADER).is_some_and(is_truthy);
        if !hsts_present {
            issues.push(issue(HSTS_MISSING, "HSTS header missing", Criticality::High));
        }
    }

    if let Some(trackers) = security.and_then(|s| s.trackers_and_cookies.as_ref()) {
        if !trackers.has_cookie_banner() {
            issues.push(issue(
                COOKIE_BANNER_MISSING,
                "No cookie consent banner detected",
                Criticality::Medium,
            ));
        }
    }

    if security.and_then(RawSecurity::safe_browsing_verdict) == Some(false) {
        issues.push(issue(
            BLACKLIST_LISTED,
            "Site is blacklisted for malware or phishing",
            Criticality::High,
        ));
    }

    issues
}

pub fn collect_passes(security: Option<&RawSecurity>) -> Vec<Pass> {
    let mut passes = Vec::new();

    if security.is_some_and(RawSecurity::ssl_valid) {
        passes.push(pass(SSL_VALID, "SSL certificate is valid"));
    }
    if security.and_then(RawSecurity::safe_browsing_verdict) == Some(true) {
        passes.push(pass(BLACKLIST_CLEAR, "Site is not blacklisted"));
    }

    passes
}

pub fn collect_failed_audits(full_report: Option<&FullReport>) -> FailedAudits {
    let mut failed = empty_failed_audits();
    let Some(full_report) = full_report else {
        return failed;
    };

    for category in CategoryId::ALL {
        let Some(raw_category) = full_report.categories.get(category.id()) else {
            continue;
        };
        let audits = raw_category
            .audit_refs
            .iter()
            .filter(|audit_ref| audit_ref.weight > 0.0)
            .filter_map(|audit_ref| {
                let audit = full_report.audits.get(&audit_ref.id)?;
                if audit.score == Some(1.0) {
                    return None;
                }
                Some(FailedAudit {
                    id: audit_ref.id.clone(),
                    title: audit.title.clone(),
                    description: audit.description.clone(),
                    score: audit.score,
                    display_value: audit.display_value.clone(),
                    details: audit.details.clone(),
                })
            })
            .collect();
        failed.insert(category, audits);
    }

    failed
}

fn issue(id: &str, label: &str, criticality: Criticality) -> Issue {
    Issue {
        id: id.to_string(),
        label: label.to_string(),
        criticality,
    }
}

fn pass(id: &str, label: &str) -> Pass {
    Pass {
        id: id.to_string(),
        label: label.to_string(),
    }
}
