use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// Payload returned by the scan service. Everything is optional: presence is
// checked where the value is used, never assumed at decode time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawScanResult {
    pub summary: Option<RawSummary>,
    pub security: Option<RawSecurity>,
    #[serde(rename = "fullReport")]
    pub full_report: Option<FullReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSummary {
    pub performance: Option<f64>,
    pub accessibility: Option<f64>,
    pub seo: Option<f64>,
    #[serde(rename = "bestPractices")]
    pub best_practices: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSecurity {
    pub headers: Option<HashMap<String, Value>>,
    pub https: Option<RawHttps>,
    #[serde(rename = "safeBrowsing")]
    pub safe_browsing: Option<RawSafeBrowsing>,
    #[serde(rename = "trackersAndCookies")]
    pub trackers_and_cookies: Option<RawTrackersAndCookies>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawHttps {
    pub ssl: Option<RawSsl>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSsl {
    pub valid: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSafeBrowsing {
    pub safe: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTrackersAndCookies {
    #[serde(rename = "cookieBanner")]
    pub cookie_banner: Option<Value>,
}

impl RawTrackersAndCookies {
    /// Scanners report the banner as a flag or as the consent tool's name.
    pub fn has_cookie_banner(&self) -> bool {
        self.cookie_banner.as_ref().is_some_and(is_truthy)
    }
}

// Lighthouse-style breakdown: categories reference audits by id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FullReport {
    #[serde(default)]
    pub categories: HashMap<String, RawCategory>,
    #[serde(default)]
    pub audits: HashMap<String, RawAudit>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCategory {
    pub score: Option<f64>,
    #[serde(rename = "auditRefs", default)]
    pub audit_refs: Vec<AuditRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRef {
    pub id: String,
    #[serde(default)]
    pub weight: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAudit {
    pub score: Option<f64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "displayValue")]
    pub display_value: Option<String>,
    pub details: Option<Value>,
}

impl RawSecurity {
    /// Looks up a response header by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&Value> {
        self.headers
            .as_ref()?
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    pub fn ssl_valid(&self) -> bool {
        self.https
            .as_ref()
            .and_then(|https| https.ssl.as_ref())
            .and_then(|ssl| ssl.valid.as_ref())
            .is_some_and(is_truthy)
    }

    /// Only an explicit boolean counts as a verdict.
    pub fn safe_browsing_verdict(&self) -> Option<bool> {
        match self.safe_browsing.as_ref()?.safe {
            Some(Value::Bool(safe)) => Some(safe),
            _ => None,
        }
    }
}

// Loosely typed scanner flags; empty, false, zero and null mean absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
