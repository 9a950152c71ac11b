use crate::models::scan::{score_percent, CategoryId, FailedAudit, NormalizedReport};
use crate::services::report_service::explanations::explain;
use crate::services::report_service::grade::grade;
use crate::utils::escape_html;

// Audits listed per category in the exported document
pub const MAX_AUDITS_PER_CATEGORY: usize = 8;

pub const FOOTER_SERVICE: &str = "Scan performed by SiteGuard.io";
pub const FOOTER_REFERENCES: &str = "References: NIST 800-53, CISA, OWASP Top 10";

/// Flat HTML document handed to the PDF service.
pub fn to_report_html(report: &NormalizedReport) -> String {
    let mut html = String::with_capacity(8_192);

    let overall = grade(report.overall_score);
    html.push_str(&format!(
        "<div><b>URL:</b> {}</div>\n",
        escape_html(&report.url)
    ));
    html.push_str(&format!(
        "<div style=\"font-size:1.5rem;\"><b>Overall Grade:</b> {} ({}/100)</div>\n",
        overall,
        score_percent(report.overall_score)
    ));

    html.push_str("<h2>Category Scores</h2>\n<ul>\n");
    for (key, score) in report.summary.entries() {
        html.push_str(&format!(
            "<li><b>{}:</b> {} ({}/100)</li>\n",
            capitalize(key),
            grade(score),
            score_percent(score)
        ));
    }
    html.push_str("</ul>\n");

    for category in CategoryId::ALL {
        push_category_section(&mut html, category, report.failed_audits_for(category));
    }

    html.push_str("<h2 style=\"color:#b91c1c\">Critical Security/Compliance Issues</h2>\n<ul>\n");
    if report.issues.is_empty() {
        html.push_str("<li>None</li>\n");
    }
    for issue in &report.issues {
        let explanation = explain(&issue.id);
        html.push_str(&format!(
            "<li><b>{}</b><br/><b>Why this matters:</b> {}<br/><b>How to fix:</b> {}</li>\n",
            escape_html(&issue.label),
            escape_html(explanation.why),
            escape_html(explanation.fix)
        ));
    }
    html.push_str("</ul>\n");

    html.push_str("<h2 style=\"color:#15803d\">Passed / Good</h2>\n<ul>\n");
    for pass in &report.passes {
        let why = explain(&pass.id).why;
        if why.is_empty() {
            html.push_str(&format!("<li><b>{}</b></li>\n", escape_html(&pass.label)));
        } else {
            html.push_str(&format!(
                "<li><b>{}</b><br/>{}</li>\n",
                escape_html(&pass.label),
                escape_html(why)
            ));
        }
    }
    html.push_str("</ul>\n");

    html.push_str(&format!(
        "<hr/>\n<div><b>{}</b></div>\n<div>{}</div>\n",
        FOOTER_SERVICE, FOOTER_REFERENCES
    ));
    html
}

fn push_category_section(html: &mut String, category: CategoryId, failed: &[FailedAudit]) {
    let name = category.display_name();
    html.push_str(&format!(
        "<h3 style=\"color:#0369a1\">{} Issues</h3>\n",
        name
    ));

    if failed.is_empty() {
        html.push_str(&format!(
            "<div style=\"color:green;\">No major issues detected in {}.</div>\n",
            name
        ));
        return;
    }

    html.push_str("<ul>\n");
    for audit in failed.iter().take(MAX_AUDITS_PER_CATEGORY) {
        html.push_str(&format!(
            "<li><b>{}</b><br/><span>{}</span><br/>",
            escape_html(&audit.title),
            escape_html(&audit.description)
        ));
        if let Some(display_value) = audit.display_value.as_deref().filter(|v| !v.is_empty()) {
            html.push_str(&format!(
                "<span style=\"color:#d97706\">{}</span><br/>",
                escape_html(display_value)
            ));
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n");
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
