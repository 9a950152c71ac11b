use crate::models::scan::{
    empty_failed_audits, CategoryId, Criticality, FailedAudit, Issue, NormalizedReport, Pass,
    Summary,
};
use crate::services::report_service::explanations::{
    BLACKLIST_CLEAR, COOKIE_BANNER_MISSING, HSTS_MISSING, SSL_VALID,
};

pub const SAMPLE_URL: &str = "https://www.big-enterprise-demo.com";

// Demonstration report for the marketing pages
pub fn sample_report() -> NormalizedReport {
    let summary = Summary {
        performance: 0.65,
        accessibility: 0.85,
        seo: 0.92,
        best_practices: 0.86,
    };

    let mut failed_audits = empty_failed_audits();
    failed_audits.insert(
        CategoryId::Performance,
        vec![
            sample_audit(
                "uses-long-cache-ttl",
                "Serve static assets with an efficient cache policy",
                "A long cache lifetime can speed up repeat visits to your page.",
                "1 resource found",
            ),
            sample_audit(
                "unused-javascript",
                "Remove unused JavaScript",
                "Reduce unused JavaScript and defer loading scripts until they are required to decrease bytes consumed by network activity.",
                "Potential savings of 60 KB",
            ),
        ],
    );
    failed_audits.insert(
        CategoryId::Accessibility,
        vec![sample_audit(
            "color-contrast",
            "Background and foreground colors do not have a sufficient contrast ratio.",
            "Low-contrast text is difficult or impossible for many users to read.",
            "4 elements found",
        )],
    );
    failed_audits.insert(
        CategoryId::BestPractices,
        vec![sample_audit(
            "image-aspect-ratio",
            "Displays images with incorrect aspect ratio",
            "Image display is distorted if the aspect ratio in the page does not match the source.",
            "1 image found",
        )],
    );

    NormalizedReport {
        url: SAMPLE_URL.to_string(),
        overall_score: summary.mean(),
        summary,
        issues: vec![
            Issue {
                id: HSTS_MISSING.to_string(),
                label: "HSTS header missing".to_string(),
                criticality: Criticality::High,
            },
            Issue {
                id: COOKIE_BANNER_MISSING.to_string(),
                label: "No cookie consent banner detected".to_string(),
                criticality: Criticality::Medium,
            },
        ],
        passes: vec![
            Pass {
                id: SSL_VALID.to_string(),
                label: "SSL certificate is valid".to_string(),
            },
            Pass {
                id: BLACKLIST_CLEAR.to_string(),
                label: "Site is not blacklisted".to_string(),
            },
        ],
        failed_audits,
    }
}

fn sample_audit(id: &str, title: &str, description: &str, display_value: &str) -> FailedAudit {
    FailedAudit {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        score: Some(0.0),
        display_value: Some(display_value.to_string()),
        details: None,
    }
}
