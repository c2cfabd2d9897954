#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn scroll_metrics_unavailable_off_browser() {
    assert_eq!(read_scroll_metrics(), None);
}

#[test]
fn current_year_is_plausible() {
    let year = current_year();
    assert!((2024..3000).contains(&year), "{year}");
}

#[test]
fn navigation_helpers_are_noops_off_browser() {
    open_in_new_tab("https://example.com");
    scroll_to_section("contact");
    scroll_to_top();
}
