//! URL resolution against the configured API base.

use once_cell::sync::Lazy;
use regex::Regex;

static ABSOLUTE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://").expect("absolute url pattern is valid"));

/// Returns true when `path_or_url` already carries an `http` or `https` scheme
#[must_use]
pub fn is_absolute_url(path_or_url: &str) -> bool {
    ABSOLUTE_URL.is_match(path_or_url)
}

/// Normalizes a base URL by dropping a single trailing slash
#[must_use]
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.strip_suffix('/').unwrap_or(base_url).to_string()
}

/// Resolves a request target against the API base
///
/// Absolute URLs pass through unchanged. Relative paths are joined onto the base
/// with exactly one separating slash; an empty path resolves to the base root.
///
/// # Example
/// ```
/// use facelog_client::utils::url::resolve_url;
///
/// assert_eq!(
///     resolve_url("http://x/api", "attendance/logs/"),
///     "http://x/api/attendance/logs/"
/// );
/// assert_eq!(resolve_url("http://x/api", "http://y/z"), "http://y/z");
/// ```
#[must_use]
pub fn resolve_url(base_url: &str, path_or_url: &str) -> String {
    if is_absolute_url(path_or_url) {
        return path_or_url.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path_or_url.trim_start_matches('/')
    )
}
