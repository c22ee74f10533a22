use facelog_client::model::responses::{Listing, Page, ToggleActivationResponse};
use serde_json::json;

#[test]
fn test_listing_accepts_paginated_envelope() {
    let body = json!({
        "count": 3,
        "next": "http://x/api/attendance/attendance-logs/?page=2",
        "previous": null,
        "results": [1, 2]
    });
    let page = serde_json::from_value::<Listing<u32>>(body)
        .unwrap()
        .into_page();
    assert_eq!(page.count, 3);
    assert_eq!(page.len(), 2);
    assert!(page.has_next());
    assert_eq!(page.previous, None);
}

#[test]
fn test_listing_accepts_plain_array() {
    let page = serde_json::from_value::<Listing<u32>>(json!([4, 5, 6]))
        .unwrap()
        .into_page();
    assert_eq!(page.count, 3);
    assert_eq!(page.results, vec![4, 5, 6]);
    assert!(!page.has_next());
}

#[test]
fn test_listing_into_vec() {
    let items = serde_json::from_value::<Listing<String>>(json!({
        "count": 1, "next": null, "previous": null, "results": ["a"]
    }))
    .unwrap()
    .into_vec();
    assert_eq!(items, vec!["a".to_string()]);
}

#[test]
fn test_empty_page() {
    let page: Page<u32> = Page::default();
    assert!(page.is_empty());
    assert_eq!(page.iter().count(), 0);
}

#[test]
fn test_toggle_activation_response() {
    let toggled: ToggleActivationResponse =
        serde_json::from_str(r#"{"status":"success","is_active":true}"#).unwrap();
    assert!(toggled.is_active);
    assert_eq!(toggled.status, "success");
}
