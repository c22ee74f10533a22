use facelog_client::utils::url::{is_absolute_url, normalize_base_url, resolve_url};

#[test]
fn test_resolve_relative_path() {
    assert_eq!(
        resolve_url("http://x/api", "attendance/logs/"),
        "http://x/api/attendance/logs/"
    );
}

#[test]
fn test_resolve_normalizes_one_separator() {
    assert_eq!(
        resolve_url("http://x/api/", "/attendance/logs/"),
        "http://x/api/attendance/logs/"
    );
    assert_eq!(
        resolve_url("http://x/api", "/attendance/logs/"),
        "http://x/api/attendance/logs/"
    );
}

#[test]
fn test_resolve_absolute_url_passes_through() {
    let next = "http://other/api/attendance/attendance-logs/?page=2";
    assert_eq!(resolve_url("http://x/api", next), next);
    assert_eq!(
        resolve_url("http://x/api", "https://secure/api/x/"),
        "https://secure/api/x/"
    );
}

#[test]
fn test_is_absolute_url() {
    assert!(is_absolute_url("http://x"));
    assert!(is_absolute_url("https://x"));
    assert!(!is_absolute_url("ftp://x"));
    assert!(!is_absolute_url("attendance/http://x"));
}

#[test]
fn test_normalize_base_url() {
    assert_eq!(normalize_base_url("http://x/api/"), "http://x/api");
    assert_eq!(normalize_base_url("http://x/api"), "http://x/api");
}
