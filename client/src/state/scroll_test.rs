use super::*;

fn metrics(scroll_y: f64, viewport_height: f64, document_height: f64) -> ScrollMetrics {
    ScrollMetrics { scroll_y, viewport_height, document_height }
}

// =============================================================
// back_to_top_visible
// =============================================================

#[test]
fn back_to_top_hidden_at_and_below_threshold() {
    assert!(!back_to_top_visible(0.0));
    assert!(!back_to_top_visible(BACK_TO_TOP_THRESHOLD_PX));
}

#[test]
fn back_to_top_visible_past_threshold() {
    assert!(back_to_top_visible(BACK_TO_TOP_THRESHOLD_PX + 1.0));
    assert!(back_to_top_visible(5_000.0));
}

// =============================================================
// footer_offset_percent
// =============================================================

#[test]
fn footer_hidden_far_from_bottom() {
    assert_eq!(footer_offset_percent(metrics(0.0, 800.0, 5_000.0)), 100.0);
}

#[test]
fn footer_shown_at_bottom() {
    assert_eq!(footer_offset_percent(metrics(4_200.0, 800.0, 5_000.0)), 0.0);
}

#[test]
fn footer_slides_linearly_inside_reveal_zone() {
    let half = FOOTER_REVEAL_PX / 2.0;
    let m = metrics(5_000.0 - 800.0 - half, 800.0, 5_000.0);
    assert!((footer_offset_percent(m) - 50.0).abs() < 1e-9);
}

#[test]
fn footer_hidden_before_first_sample() {
    assert_eq!(footer_offset_percent(ScrollMetrics::default()), 100.0);
}

#[test]
fn footer_offset_clamped_on_overscroll_and_short_pages() {
    assert_eq!(footer_offset_percent(metrics(4_500.0, 800.0, 5_000.0)), 0.0);
    assert_eq!(footer_offset_percent(metrics(0.0, 800.0, 400.0)), 0.0);
}

#[test]
fn distance_to_bottom_never_negative() {
    assert_eq!(metrics(900.0, 800.0, 1_000.0).distance_to_bottom(), 0.0);
    assert_eq!(metrics(100.0, 800.0, 1_000.0).distance_to_bottom(), 100.0);
}

// =============================================================
// keyboard_likely_open
// =============================================================

#[test]
fn keyboard_detected_on_large_viewport_shrink() {
    assert!(keyboard_likely_open(800.0, 450.0));
}

#[test]
fn keyboard_not_detected_on_small_shrink() {
    assert!(!keyboard_likely_open(800.0, 700.0));
    assert!(!keyboard_likely_open(800.0, 800.0));
}

#[test]
fn keyboard_not_detected_without_baseline() {
    assert!(!keyboard_likely_open(0.0, 300.0));
}
