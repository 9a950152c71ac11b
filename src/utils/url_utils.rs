use reqwest::Url;

/// Cleans up a user-supplied audit target.
///
/// Bare hosts get an `https://` prefix. The result must be an http(s) URL
/// with a host. The returned string is what the scan service receives and
/// what the report shows.
pub fn normalize_target_url(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("No URL found for scan.".to_string());
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&candidate).map_err(|e| format!("Invalid URL {}: {}", trimmed, e))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("Unsupported URL scheme: {}", parsed.scheme()));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(format!("URL has no host: {}", trimmed));
    }
    Ok(candidate)
}
