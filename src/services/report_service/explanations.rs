// Remediation text for the security/compliance findings

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explanation {
    pub why: &'static str,
    pub fix: &'static str,
}

impl Explanation {
    pub const EMPTY: Explanation = Explanation { why: "", fix: "" };
}

pub const HSTS_MISSING: &str = "hsts-missing";
pub const COOKIE_BANNER_MISSING: &str = "cookie-banner-missing";
pub const BLACKLIST_LISTED: &str = "blacklist-listed";
pub const SSL_VALID: &str = "ssl-valid";
pub const BLACKLIST_CLEAR: &str = "blacklist-clear";

static EXPLANATIONS: [(&str, Explanation); 5] = [
    (
        HSTS_MISSING,
        Explanation {
            why: "Without HTTP Strict Transport Security (HSTS), browsers may allow users to access your site over insecure HTTP.",
            fix: "Add a Strict-Transport-Security header to your server response (e.g., `Strict-Transport-Security: max-age=31536000; includeSubDomains`).",
        },
    ),
    (
        COOKIE_BANNER_MISSING,
        Explanation {
            why: "Sites handling personal data in the EU (and other regions) must inform users about cookies for privacy compliance.",
            fix: "Add a cookie consent banner using a trusted library or service (e.g., Cookiebot, CookieYes).",
        },
    ),
    (
        BLACKLIST_LISTED,
        Explanation {
            why: "Your site is flagged by Google Safe Browsing as potentially malicious or infected with malware/phishing.",
            fix: "Check your site with the Google Safe Browsing Transparency Report and clean any infections before requesting removal.",
        },
    ),
    (
        SSL_VALID,
        Explanation {
            why: "A valid SSL/TLS certificate ensures all traffic to your site is securely encrypted.",
            fix: "No action needed.",
        },
    ),
    (
        BLACKLIST_CLEAR,
        Explanation {
            why: "Your site is not flagged as dangerous or infected by Google Safe Browsing.",
            fix: "No action needed.",
        },
    ),
];

/// Unknown ids get an empty explanation so new upstream findings still render.
pub fn explain(id: &str) -> Explanation {
    EXPLANATIONS
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, explanation)| *explanation)
        .unwrap_or(Explanation::EMPTY)
}
