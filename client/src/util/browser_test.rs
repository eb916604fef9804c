#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn navigate_to_reports_missing_window_outside_browser() {
    assert_eq!(navigate_to("https://example.com"), Err(BrowserError::NoWindow));
}

#[test]
fn alert_reports_missing_window_outside_browser() {
    assert_eq!(alert("hello"), Err(BrowserError::NoWindow));
}

#[test]
fn navigation_error_message_includes_url() {
    let err = BrowserError::Navigation { url: "javascript:".to_owned(), reason: "SecurityError".to_owned() };
    assert_eq!(err.to_string(), "navigation to `javascript:` failed: SecurityError");
}
